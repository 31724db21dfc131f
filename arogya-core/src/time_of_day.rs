//! Twelve-hour wall-clock times as shown on the schedule ("9:00 AM").

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ArogyaError, ArogyaResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "AM"),
            Meridiem::Pm => write!(f, "PM"),
        }
    }
}

/// A time of day in 12-hour form. `hour` is always 1..=12 and `minute` 0..=59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8, meridiem: Meridiem) -> ArogyaResult<Self> {
        if !(1..=12).contains(&hour) {
            return Err(ArogyaError::InvalidTime(format!(
                "hour {hour} is outside 1-12"
            )));
        }
        if minute > 59 {
            return Err(ArogyaError::InvalidTime(format!(
                "minute {minute} is outside 0-59"
            )));
        }
        Ok(TimeOfDay {
            hour,
            minute,
            meridiem,
        })
    }

    /// Build from a 24-hour clock reading. `hour24` must be 0..=23.
    pub fn from_24h(hour24: u8, minute: u8) -> ArogyaResult<Self> {
        if hour24 > 23 {
            return Err(ArogyaError::InvalidTime(format!(
                "hour {hour24} is outside 0-23"
            )));
        }
        let meridiem = if hour24 >= 12 { Meridiem::Pm } else { Meridiem::Am };
        let hour = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        TimeOfDay::new(hour, minute, meridiem)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn meridiem(&self) -> Meridiem {
        self.meridiem
    }

    /// Hour on the 24-hour clock: 12 AM is 0, 12 PM is 12.
    pub fn hour24(&self) -> u8 {
        match (self.meridiem, self.hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        }
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour24()), u32::from(self.minute), 0)
            .expect("fields are range-checked on construction")
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        let hour24 = time.hour() as u8;
        TimeOfDay {
            hour: match hour24 % 12 {
                0 => 12,
                h => h,
            },
            minute: time.minute() as u8,
            meridiem: if hour24 >= 12 { Meridiem::Pm } else { Meridiem::Am },
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem)
    }
}

impl FromStr for TimeOfDay {
    type Err = ArogyaError;

    /// Accepts "9:00 AM", "09:00 am" and "7:30PM".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        NaiveTime::parse_from_str(input, "%I:%M %p")
            .or_else(|_| NaiveTime::parse_from_str(input, "%I:%M%p"))
            .map(TimeOfDay::from)
            .map_err(|_| ArogyaError::InvalidTime(format!("'{s}', expected e.g. \"9:00 AM\"")))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ArogyaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let t: TimeOfDay = "9:00 AM".parse().unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 0);
        assert_eq!(t.meridiem(), Meridiem::Am);
        assert_eq!(t.to_string(), "9:00 AM");

        let t: TimeOfDay = "07:05pm".parse().unwrap();
        assert_eq!(t.to_string(), "7:05 PM");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("25:00 AM".parse::<TimeOfDay>().is_err());
        assert!("9 o'clock".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_noon_and_midnight() {
        let midnight = TimeOfDay::from_24h(0, 0).unwrap();
        assert_eq!(midnight.to_string(), "12:00 AM");
        assert_eq!(midnight.hour24(), 0);

        let noon = TimeOfDay::from_24h(12, 0).unwrap();
        assert_eq!(noon.to_string(), "12:00 PM");
        assert_eq!(noon.hour24(), 12);

        let late = TimeOfDay::from_24h(23, 59).unwrap();
        assert_eq!(late.to_string(), "11:59 PM");
    }

    #[test]
    fn test_new_validates_ranges() {
        assert!(TimeOfDay::new(0, 0, Meridiem::Am).is_err());
        assert!(TimeOfDay::new(13, 0, Meridiem::Pm).is_err());
        assert!(TimeOfDay::new(12, 60, Meridiem::Pm).is_err());
        assert!(TimeOfDay::from_24h(24, 0).is_err());
    }

    #[test]
    fn test_hour24_roundtrip_all_hours() {
        for h in 0..24u8 {
            let t = TimeOfDay::from_24h(h, 30).unwrap();
            assert_eq!(t.hour24(), h, "hour {} did not survive 12h conversion", h);
            assert_eq!(t.to_naive_time(), NaiveTime::from_hms_opt(h as u32, 30, 0).unwrap());
        }
    }

    #[test]
    fn test_naive_time_for_every_minute() {
        for hour24 in 0..24u8 {
            for minute in 0..60u8 {
                let time = TimeOfDay::from_24h(hour24, minute).unwrap();
                let naive = time.to_naive_time();
                assert_eq!(naive.hour(), u32::from(hour24), "for {}", time);
                assert_eq!(naive.minute(), u32::from(minute), "for {}", time);
                assert_eq!(TimeOfDay::from(naive), time);
            }
        }
    }

    #[test]
    fn test_serde_as_string() {
        #[derive(Deserialize, Serialize)]
        struct Wrapper {
            at: TimeOfDay,
        }
        let w: Wrapper = toml::from_str("at = \"7:00 PM\"").unwrap();
        assert_eq!(w.at.hour24(), 19);
        let out = toml::to_string(&w).unwrap();
        assert!(out.contains("at = \"7:00 PM\""), "got: {}", out);
    }
}
