//! ICS text generation.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::EVENT_LOCATION;
use crate::schedule::SessionInstance;
use crate::timezone::Timezone;

/// Which instant an exported session is pinned to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportClock {
    /// The wall-clock time shown on screen, written as if it were UTC.
    /// Viewers in different zones get different absolute instants.
    #[default]
    Viewer,
    /// The authored time in the reference zone converted to real UTC.
    /// Every viewer gets the same instant.
    Reference,
}

/// Settings shared by every VEVENT in one payload.
#[derive(Debug, Clone)]
pub struct IcsOptions<'o> {
    pub product_id: &'o str,
    pub clock: ExportClock,
    /// Zone the session templates are authored in.
    pub reference: Timezone,
}

/// Start and end of a session as written into DTSTART/DTEND.
pub fn event_window(
    instance: &SessionInstance<'_>,
    options: &IcsOptions<'_>,
) -> (NaiveDateTime, NaiveDateTime) {
    let start = match options.clock {
        ExportClock::Viewer => instance.date.and_time(instance.display_time.to_naive_time()),
        ExportClock::Reference => {
            let authored = instance
                .date
                .and_time(instance.template.base_time.to_naive_time());
            authored - Duration::hours(i64::from(options.reference.utc_offset_hours()))
        }
    };
    let end = start + Duration::minutes(i64::from(instance.template.duration_minutes));

    (start, end)
}

/// Generate a VCALENDAR holding one VEVENT per session, in iteration order.
/// No sessions yields an envelope with no events.
pub fn generate_ics<'s, 'a: 's, I>(sessions: I, options: &IcsOptions<'_>) -> String
where
    I: IntoIterator<Item = &'s SessionInstance<'a>>,
{
    let mut out = String::new();

    push_line(&mut out, "BEGIN:VCALENDAR");
    push_line(&mut out, "VERSION:2.0");
    push_line(
        &mut out,
        &format!("PRODID:-//{}//Session Calendar//EN", options.product_id),
    );

    for instance in sessions {
        push_event(&mut out, instance, options);
    }

    push_line(&mut out, "END:VCALENDAR");
    out
}

fn push_event(out: &mut String, instance: &SessionInstance<'_>, options: &IcsOptions<'_>) {
    let template = instance.template;
    let (start, end) = event_window(instance, options);

    let description = format!(
        "{}\n\nJoin via: {}",
        template.description, template.meeting_link
    );

    push_line(out, "BEGIN:VEVENT");
    push_line(out, &format!("DTSTART:{}", format_utc(start)));
    push_line(out, &format!("DTEND:{}", format_utc(end)));
    push_line(out, &format!("SUMMARY:{}", escape_text(&template.summary())));
    push_line(out, &format!("DESCRIPTION:{}", escape_text(&description)));
    push_line(out, &format!("LOCATION:{}", EVENT_LOCATION));
    push_line(out, "END:VEVENT");
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str("\r\n");
}

/// Compact UTC form with a Z suffix; the value is written as-is, no conversion.
pub fn format_utc(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Escape backslashes and line breaks for a TEXT value.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\n");
            }
            other => escaped.push(other),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionKind, SessionTemplate};
    use crate::time_of_day::TimeOfDay;
    use chrono::{NaiveDate, Weekday};
    use url::Url;

    fn template(topic: Option<&str>) -> SessionTemplate {
        SessionTemplate {
            kind: SessionKind::Lifestyle,
            title: "Lifestyle Discussion".to_string(),
            base_time: "7:00 PM".parse().unwrap(),
            duration_minutes: 30,
            description: "This week's wellness focus".to_string(),
            topic: topic.map(str::to_string),
            meeting_link: Url::parse("https://zoom.us/j/example").unwrap(),
        }
    }

    fn instance<'a>(
        template: &'a SessionTemplate,
        display: &str,
        tz: Timezone,
    ) -> SessionInstance<'a> {
        SessionInstance {
            template,
            weekday: Weekday::Tue,
            date: NaiveDate::from_ymd_opt(2025, 1, 7).unwrap(),
            display_time: display.parse::<TimeOfDay>().unwrap(),
            timezone: tz,
        }
    }

    fn options(clock: ExportClock) -> IcsOptions<'static> {
        IcsOptions {
            product_id: "Arogya Wellness",
            clock,
            reference: Timezone::Eastern,
        }
    }

    #[test]
    fn test_single_event_exact_payload() {
        let t = template(Some("Nutrition"));
        let session = instance(&t, "7:00 PM", Timezone::Eastern);
        let ics = generate_ics([&session], &options(ExportClock::Viewer));

        let expected = "BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Arogya Wellness//Session Calendar//EN\r\n\
BEGIN:VEVENT\r\n\
DTSTART:20250107T190000Z\r\n\
DTEND:20250107T193000Z\r\n\
SUMMARY:Lifestyle Discussion - Nutrition\r\n\
DESCRIPTION:This week's wellness focus\\n\\nJoin via: https://zoom.us/j/example\r\n\
LOCATION:Online\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";
        assert_eq!(ics, expected);
    }

    #[test]
    fn test_summary_without_topic() {
        let t = template(None);
        let session = instance(&t, "7:00 PM", Timezone::Eastern);
        let ics = generate_ics([&session], &options(ExportClock::Viewer));

        assert!(
            ics.contains("SUMMARY:Lifestyle Discussion\r\n"),
            "Summary should have no topic suffix. ICS:\n{}",
            ics
        );
        assert!(!ics.contains("SUMMARY:Lifestyle Discussion - "));
    }

    #[test]
    fn test_viewer_clock_uses_displayed_time() {
        let t = template(None);
        // 7 PM Eastern shown in Pacific
        let session = instance(&t, "10:00 PM", Timezone::Pacific);
        let ics = generate_ics([&session], &options(ExportClock::Viewer));

        assert!(ics.contains("DTSTART:20250107T220000Z"), "ICS:\n{}", ics);
        assert!(ics.contains("DTEND:20250107T223000Z"), "ICS:\n{}", ics);
    }

    #[test]
    fn test_reference_clock_is_viewer_independent() {
        let t = template(None);
        let eastern = instance(&t, "7:00 PM", Timezone::Eastern);
        let pacific = instance(&t, "10:00 PM", Timezone::Pacific);

        let opts = options(ExportClock::Reference);
        let (start_e, end_e) = event_window(&eastern, &opts);
        let (start_p, _) = event_window(&pacific, &opts);
        assert_eq!(start_e, start_p);

        // 7 PM at UTC-5 is midnight UTC the next day
        assert_eq!(format_utc(start_e), "20250108T000000Z");
        assert_eq!(format_utc(end_e), "20250108T003000Z");
    }

    #[test]
    fn test_empty_envelope() {
        let ics = generate_ics(
            std::iter::empty::<&SessionInstance<'_>>(),
            &options(ExportClock::Viewer),
        );
        assert_eq!(ics.matches("BEGIN:VEVENT").count(), 0);
        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
    }

    #[test]
    fn test_escape_text_newlines() {
        assert_eq!(escape_text("a\nb"), "a\\nb");
        assert_eq!(escape_text("a\r\nb"), "a\\nb");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
        assert_eq!(escape_text("plain, text; ok"), "plain, text; ok");
    }

    #[test]
    fn test_multiline_description_stays_on_one_line() {
        let mut t = template(None);
        t.description = "Bring water\nand a mat".to_string();
        let session = instance(&t, "7:00 PM", Timezone::Eastern);
        let ics = generate_ics([&session], &options(ExportClock::Viewer));

        let line = ics
            .lines()
            .find(|l| l.starts_with("DESCRIPTION:"))
            .expect("Should have DESCRIPTION line");
        assert_eq!(
            line,
            "DESCRIPTION:Bring water\\nand a mat\\n\\nJoin via: https://zoom.us/j/example"
        );
    }
}
