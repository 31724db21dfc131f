//! Projection of the weekly template onto a concrete week and display timezone.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::session::{SessionTemplate, WeeklyTemplate};
use crate::time_of_day::TimeOfDay;
use crate::timezone::{Timezone, adjusted_time};
use crate::week::WeekAnchor;

/// Display order of a week.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A template placed on a real date and shown in a chosen timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInstance<'a> {
    pub template: &'a SessionTemplate,
    pub weekday: Weekday,
    pub date: NaiveDate,
    pub display_time: TimeOfDay,
    pub timezone: Timezone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule<'a> {
    pub weekday: Weekday,
    pub date: NaiveDate,
    /// Long form, e.g. "January 6, 2025".
    pub formatted_date: String,
    pub is_today: bool,
    pub sessions: Vec<SessionInstance<'a>>,
}

impl DaySchedule<'_> {
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.weekday)
    }
}

/// Seven days, Monday first, rebuilt whenever the week or timezone changes.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSchedule<'a> {
    pub anchor: WeekAnchor,
    pub timezone: Timezone,
    pub days: Vec<DaySchedule<'a>>,
}

impl<'a> WeekSchedule<'a> {
    /// `reference` is the zone the template is authored in. `today` decides
    /// which day (if any) is flagged as today.
    pub fn build(
        template: &'a WeeklyTemplate,
        anchor: WeekAnchor,
        timezone: Timezone,
        reference: Timezone,
        today: NaiveDate,
    ) -> Self {
        let days: Vec<DaySchedule<'a>> = anchor
            .days()
            .map(|date| {
                let weekday = date.weekday();
                let sessions = template
                    .sessions_on(weekday)
                    .iter()
                    .map(|session| SessionInstance {
                        template: session,
                        weekday,
                        date,
                        display_time: adjusted_time(session.base_time, reference, timezone),
                        timezone,
                    })
                    .collect();

                DaySchedule {
                    weekday,
                    date,
                    formatted_date: date.format("%B %-d, %Y").to_string(),
                    is_today: date == today,
                    sessions,
                }
            })
            .collect();

        debug!(
            week = %anchor.date(),
            timezone = timezone.code(),
            sessions = days.iter().map(|d| d.sessions.len()).sum::<usize>(),
            "built week schedule"
        );

        WeekSchedule {
            anchor,
            timezone,
            days,
        }
    }

    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule<'a>> {
        self.days.iter().find(|d| d.weekday == weekday)
    }

    pub fn sessions(&self) -> impl Iterator<Item = &SessionInstance<'a>> {
        self.days.iter().flat_map(|d| d.sessions.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.sessions.is_empty())
    }

    pub fn range_label(&self) -> String {
        self.anchor.range_label()
    }
}
