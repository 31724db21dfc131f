//! The four supported display timezones and wall-clock projection between them.
//!
//! Offsets are fixed whole hours (standard time). Daylight saving and
//! half-hour zones are not modeled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArogyaError;
use crate::time_of_day::TimeOfDay;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timezone {
    #[default]
    Eastern,
    Central,
    Mountain,
    Pacific,
}

impl Timezone {
    pub const ALL: [Timezone; 4] = [
        Timezone::Eastern,
        Timezone::Central,
        Timezone::Mountain,
        Timezone::Pacific,
    ];

    /// IANA identifier, e.g. "America/New_York".
    pub fn identifier(&self) -> &'static str {
        match self {
            Timezone::Eastern => "America/New_York",
            Timezone::Central => "America/Chicago",
            Timezone::Mountain => "America/Denver",
            Timezone::Pacific => "America/Los_Angeles",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Timezone::Eastern => "Eastern Time (ET)",
            Timezone::Central => "Central Time (CT)",
            Timezone::Mountain => "Mountain Time (MT)",
            Timezone::Pacific => "Pacific Time (PT)",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Timezone::Eastern => "ET",
            Timezone::Central => "CT",
            Timezone::Mountain => "MT",
            Timezone::Pacific => "PT",
        }
    }

    pub fn utc_offset_hours(&self) -> i8 {
        match self {
            Timezone::Eastern => -5,
            Timezone::Central => -6,
            Timezone::Mountain => -7,
            Timezone::Pacific => -8,
        }
    }

    /// Map a system zone name to one of the supported zones, if it is one.
    pub fn from_iana(name: &str) -> Option<Timezone> {
        Timezone::ALL
            .into_iter()
            .find(|tz| tz.identifier().eq_ignore_ascii_case(name.trim()))
    }

}

/// Shift a wall-clock time from `reference` to `target`.
///
/// Adds `reference - target` offset hours, so 9:00 AM Eastern shows as
/// 12:00 PM Pacific. The hour wraps modulo 24 and the date never changes: a session pushed
/// past midnight keeps its calendar day.
pub fn adjusted_time(base: TimeOfDay, reference: Timezone, target: Timezone) -> TimeOfDay {
    let diff = i16::from(reference.utc_offset_hours()) - i16::from(target.utc_offset_hours());
    let hour24 = (i16::from(base.hour24()) + diff).rem_euclid(24) as u8;

    TimeOfDay::from_24h(hour24, base.minute())
        .expect("hour is wrapped into 0-23 and the minute comes from a valid time")
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Timezone {
    type Err = ArogyaError;

    /// Accepts the IANA identifier, the short code ("PT") or the bare name ("pacific").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Timezone::ALL
            .into_iter()
            .find(|tz| {
                let name = match tz {
                    Timezone::Eastern => "eastern",
                    Timezone::Central => "central",
                    Timezone::Mountain => "mountain",
                    Timezone::Pacific => "pacific",
                };
                needle.eq_ignore_ascii_case(tz.identifier())
                    || needle.eq_ignore_ascii_case(tz.code())
                    || needle.eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| ArogyaError::UnknownTimezone(s.to_string()))
    }
}

impl TryFrom<String> for Timezone {
    type Error = ArogyaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timezone> for String {
    fn from(value: Timezone) -> Self {
        value.code().to_string()
    }
}
