use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use arogya_core::config::ArogyaConfig;
use arogya_core::ics::ExportClock;
use arogya_core::{CalendarExporter, CalendarFile, WeekSchedule};
use owo_colors::OwoColorize;

use crate::WeekArgs;
use crate::render::pluralize;
use crate::utils::selection::{WeekView, parse_weekday};

pub fn run(
    config: &ArogyaConfig,
    args: &WeekArgs,
    day: Option<&str>,
    index: usize,
    out: Option<PathBuf>,
    reference_clock: bool,
) -> Result<()> {
    let template = config.weekly_template()?;
    let view = WeekView::from_args(config, args)?;
    let week = view.build(&template);

    let mut exporter = CalendarExporter::from_config(config);
    if reference_clock {
        exporter = exporter.with_clock(ExportClock::Reference, config.reference_timezone);
    }

    let file = match day {
        Some(day) => export_one(&exporter, &week, day, index)?,
        None => exporter.export_week(&week),
    };

    let dir = out.unwrap_or_else(|| config.export_path());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;

    let path = dir.join(&file.filename);
    std::fs::write(&path, &file.contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let count = file.event_count();
    let summary = format!("({} {})", count, pluralize("event", count));
    println!("{} {} {}", "Saved".green(), path.display(), summary.dimmed());

    Ok(())
}

fn export_one(
    exporter: &CalendarExporter,
    week: &WeekSchedule<'_>,
    day: &str,
    index: usize,
) -> Result<CalendarFile> {
    let weekday = parse_weekday(day)?;
    let schedule = week
        .day(weekday)
        .with_context(|| format!("{} is missing from the week", weekday))?;

    if schedule.sessions.is_empty() {
        bail!(
            "No sessions on {} {}",
            schedule.weekday_name(),
            schedule.formatted_date
        );
    }

    let Some(session) = index
        .checked_sub(1)
        .and_then(|i| schedule.sessions.get(i))
    else {
        bail!(
            "{} has {} {}. Pick --index between 1 and {}",
            schedule.weekday_name(),
            schedule.sessions.len(),
            pluralize("session", schedule.sessions.len()),
            schedule.sessions.len()
        );
    };

    Ok(exporter.export_session(session))
}
