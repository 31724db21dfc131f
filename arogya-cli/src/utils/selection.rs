//! Turn command-line flags plus config into the week and timezone to show.

use anyhow::{Result, bail};
use arogya_core::config::ArogyaConfig;
use arogya_core::{Timezone, WeekAnchor, WeekSchedule, WeeklyTemplate, week_start};
use chrono::{NaiveDate, Weekday};
use tracing::debug;

use crate::WeekArgs;

/// The resolved view: which week, which zone, and what "today" is.
#[derive(Debug, Clone, Copy)]
pub struct WeekView {
    pub anchor: WeekAnchor,
    pub timezone: Timezone,
    pub reference: Timezone,
    pub today: NaiveDate,
}

impl WeekView {
    pub fn from_args(config: &ArogyaConfig, args: &WeekArgs) -> Result<Self> {
        let today = chrono::Local::now().date_naive();

        Ok(WeekView {
            anchor: resolve_anchor(args.date, args.offset, today)?,
            timezone: resolve_timezone(args.tz.as_deref(), config)?,
            reference: config.reference_timezone,
            today,
        })
    }

    pub fn build<'a>(&self, template: &'a WeeklyTemplate) -> WeekSchedule<'a> {
        WeekSchedule::build(
            template,
            self.anchor,
            self.timezone,
            self.reference,
            self.today,
        )
    }
}

/// `--tz`, then `default_timezone`, then the system zone, then the reference zone.
pub fn resolve_timezone(flag: Option<&str>, config: &ArogyaConfig) -> Result<Timezone> {
    if let Some(name) = flag {
        return Ok(name.parse::<Timezone>()?);
    }

    if let Some(tz) = config.default_timezone {
        return Ok(tz);
    }

    Ok(detect_system_timezone().unwrap_or(config.reference_timezone))
}

fn detect_system_timezone() -> Option<Timezone> {
    let name = iana_time_zone::get_timezone().ok()?;
    let tz = Timezone::from_iana(&name);

    if tz.is_none() {
        debug!(zone = %name, "system timezone is not one of the supported zones");
    }

    tz
}

pub fn resolve_anchor(
    date: Option<NaiveDate>,
    offset: i64,
    today: NaiveDate,
) -> Result<WeekAnchor> {
    let anchor = week_start(date.unwrap_or(today))?;
    Ok(anchor.shift(offset)?)
}

pub fn parse_weekday(input: &str) -> Result<Weekday> {
    match input.trim().parse::<Weekday>() {
        Ok(weekday) => Ok(weekday),
        Err(_) => bail!(
            "Unknown day '{}'. Use a weekday name like \"monday\" or \"tue\"",
            input
        ),
    }
}
