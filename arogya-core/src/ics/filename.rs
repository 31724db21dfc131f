//! Download filenames for exported calendars.

use crate::schedule::{SessionInstance, weekday_name};

/// `<brand>-<kind>-<weekday>.ics`, e.g. "arogya-exercise-monday.ics".
pub fn session_filename(brand: &str, instance: &SessionInstance<'_>) -> String {
    format!(
        "{}-{}-{}.ics",
        brand,
        instance.template.kind.slug(),
        weekday_name(instance.weekday).to_lowercase()
    )
}

/// `<brand>-schedule-<label>.ics` with the week label sanitized.
pub fn week_filename(brand: &str, range_label: &str) -> String {
    format!("{}-schedule-{}.ics", brand, sanitize_label(range_label))
}

/// Replace every character that is not an ASCII letter or digit with '-'.
/// Runs are not collapsed.
pub fn sanitize_label(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}
