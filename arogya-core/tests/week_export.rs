//! Build a week from the public API and export it.

use arogya_core::ics::ExportClock;
use arogya_core::{
    CalendarExporter, Timezone, WeekAnchor, WeekSchedule, WeeklyTemplate, week_start,
};
use chrono::{NaiveDate, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_navigate_and_export_year_boundary_week() {
    let template = WeeklyTemplate::arogya().unwrap();
    let today = date(2025, 1, 2);

    let current = week_start(today).unwrap();
    assert!(current.is_current_week(today));

    // Step forward then back to the current week
    let next = current.shift(1).unwrap();
    assert!(!next.is_current_week(today));
    let back = next.shift(-1).unwrap();
    assert_eq!(back, current);

    let week = WeekSchedule::build(&template, back, Timezone::Pacific, Timezone::Eastern, today);
    assert_eq!(week.range_label(), "Dec 30 - Jan 5, 2025");
    assert!(week.day(Weekday::Thu).unwrap().is_today);

    let file = CalendarExporter::default().export_week(&week);
    assert_eq!(file.filename, "arogya-schedule-Dec-30---Jan-5--2025.ics");

    let starts: Vec<_> = file
        .contents
        .lines()
        .filter_map(|l| l.strip_prefix("DTSTART:"))
        .collect();
    assert_eq!(
        starts,
        [
            "20241230T120000Z",
            "20241231T220000Z",
            "20250101T120000Z",
            "20250103T120000Z",
        ]
    );
}

#[test]
fn test_single_session_export_with_reference_clock() {
    let template = WeeklyTemplate::arogya().unwrap();
    let anchor = WeekAnchor::try_from(date(2025, 1, 6)).unwrap();
    let week = WeekSchedule::build(
        &template,
        anchor,
        Timezone::Mountain,
        Timezone::Eastern,
        date(2025, 1, 6),
    );

    let exporter =
        CalendarExporter::default().with_clock(ExportClock::Reference, Timezone::Eastern);
    let wednesday = &week.day(Weekday::Wed).unwrap().sessions[0];
    assert_eq!(wednesday.display_time.to_string(), "11:00 AM");

    let file = exporter.export_session(wednesday);
    assert_eq!(file.filename, "arogya-exercise-wednesday.ics");
    // 9:00 AM Eastern is 14:00 UTC no matter which zone is displayed
    assert!(file.contents.contains("DTSTART:20250108T140000Z"), "ICS:\n{}", file.contents);
    assert!(file.contents.contains("DTEND:20250108T144500Z"), "ICS:\n{}", file.contents);
}

#[test]
fn test_empty_week_exports_valid_envelope() {
    let template = WeeklyTemplate::default();
    let week = WeekSchedule::build(
        &template,
        week_start(date(2025, 6, 15)).unwrap(),
        Timezone::Eastern,
        Timezone::Eastern,
        date(2025, 6, 15),
    );
    let file = CalendarExporter::default().export_week(&week);

    assert_eq!(file.event_count(), 0);
    assert!(!file.contents.contains("BEGIN:VEVENT"));
    assert!(file.contents.starts_with("BEGIN:VCALENDAR"));
    assert!(file.contents.trim_end().ends_with("END:VCALENDAR"));
    assert_eq!(file.filename, "arogya-schedule-Jun-9---15--2025.ics");
}
