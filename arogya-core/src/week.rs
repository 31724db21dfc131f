//! Monday-aligned calendar weeks.

use std::fmt;

use chrono::{Datelike, Days, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_WEEK;
use crate::error::{ArogyaError, ArogyaResult};

const LAST_DAY_OFFSET: Days = Days::new(DAYS_PER_WEEK as u64 - 1);

/// The Monday that identifies a displayed week.
///
/// Sunday belongs to the week that started six days earlier. Every anchor
/// has all seven of its days inside chrono's date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct WeekAnchor(NaiveDate);

impl WeekAnchor {
    /// The week containing `date`.
    pub fn containing(date: NaiveDate) -> ArogyaResult<Self> {
        let back = Days::new(u64::from(date.weekday().num_days_from_monday()));
        let monday = date.checked_sub_days(back).ok_or_else(|| {
            ArogyaError::DateOutOfRange(format!(
                "the week containing {date} starts before chrono's range"
            ))
        })?;
        Self::checked(monday)
    }

    fn checked(monday: NaiveDate) -> ArogyaResult<Self> {
        match monday.checked_add_days(LAST_DAY_OFFSET) {
            Some(_) => Ok(WeekAnchor(monday)),
            None => Err(ArogyaError::DateOutOfRange(format!(
                "the week of {monday} ends after chrono's range"
            ))),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The Sunday closing this week.
    pub fn end(&self) -> NaiveDate {
        self.0
            .checked_add_days(LAST_DAY_OFFSET)
            .expect("anchors are constructed with their Sunday in range")
    }

    /// Monday..Sunday.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let start = self.0;
        start.iter_days().take(DAYS_PER_WEEK as usize)
    }

    /// Move by whole weeks (negative goes back).
    pub fn shift(&self, delta_weeks: i64) -> ArogyaResult<Self> {
        let monday = delta_weeks
            .checked_mul(DAYS_PER_WEEK)
            .and_then(Duration::try_days)
            .and_then(|d| self.0.checked_add_signed(d))
            .ok_or_else(|| {
                ArogyaError::DateOutOfRange(format!(
                    "{} shifted by {} weeks",
                    self.0, delta_weeks
                ))
            })?;
        Self::checked(monday)
    }

    /// False when `today` has no representable week.
    pub fn is_current_week(&self, today: NaiveDate) -> bool {
        WeekAnchor::containing(today).is_ok_and(|current| current == *self)
    }

    /// "Jan 6 - 12, 2025", or "Dec 30 - Jan 5, 2025" across months.
    ///
    /// A month-crossing label carries the year of the Sunday.
    pub fn range_label(&self) -> String {
        let start = self.0;
        let end = self.end();

        if start.month() == end.month() {
            format!(
                "{} {} - {}, {}",
                start.format("%b"),
                start.day(),
                end.day(),
                start.year()
            )
        } else {
            format!(
                "{} {} - {} {}, {}",
                start.format("%b"),
                start.day(),
                end.format("%b"),
                end.day(),
                end.year()
            )
        }
    }
}

/// The Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> ArogyaResult<WeekAnchor> {
    WeekAnchor::containing(date)
}

impl TryFrom<NaiveDate> for WeekAnchor {
    type Error = ArogyaError;

    /// Accepts only Mondays; use [`WeekAnchor::containing`] for any date.
    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if date.weekday() == Weekday::Mon {
            Self::checked(date)
        } else {
            Err(ArogyaError::DateOutOfRange(format!(
                "{date} is a {}, not a Monday",
                date.weekday()
            )))
        }
    }
}

impl From<WeekAnchor> for NaiveDate {
    fn from(anchor: WeekAnchor) -> Self {
        anchor.0
    }
}

impl fmt::Display for WeekAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.range_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_monday_and_idempotent() {
        let mut d = date(2024, 12, 20);
        for _ in 0..60 {
            let anchor = week_start(d).unwrap();
            assert_eq!(anchor.date().weekday(), Weekday::Mon, "for {}", d);
            let again = week_start(anchor.date()).unwrap();
            assert_eq!(again, anchor, "not idempotent for {}", d);
            assert!(anchor.date() <= d && d <= anchor.end());
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_sunday_belongs_to_previous_monday() {
        let sunday = date(2025, 1, 5);
        assert_eq!(sunday.weekday(), Weekday::Sun);
        assert_eq!(week_start(sunday).unwrap().date(), sunday - Duration::days(6));
        assert_eq!(week_start(sunday).unwrap().date(), date(2024, 12, 30));
    }

    #[test]
    fn test_shift_roundtrip() {
        let anchor = week_start(date(2025, 3, 12)).unwrap();
        for n in [-53, -2, -1, 0, 1, 4, 52] {
            let moved = anchor.shift(n).unwrap();
            assert_eq!(moved.date().weekday(), Weekday::Mon);
            assert_eq!(moved.shift(-n).unwrap(), anchor, "n = {}", n);
        }
        assert_eq!(anchor.shift(1).unwrap().date(), date(2025, 3, 17));
    }

    #[test]
    fn test_shift_out_of_range() {
        let anchor = week_start(date(2025, 3, 12)).unwrap();
        assert!(matches!(
            anchor.shift(i64::MAX),
            Err(ArogyaError::DateOutOfRange(_))
        ));
    }

    #[test]
    fn test_is_current_week() {
        let anchor = week_start(date(2025, 1, 6)).unwrap();
        assert!(anchor.is_current_week(date(2025, 1, 6)));
        assert!(anchor.is_current_week(date(2025, 1, 12)));
        assert!(!anchor.is_current_week(date(2025, 1, 13)));
        assert!(!anchor.is_current_week(date(2025, 1, 5)));
    }

    #[test]
    fn test_range_label_same_month() {
        let anchor = week_start(date(2025, 1, 8)).unwrap();
        assert_eq!(anchor.range_label(), "Jan 6 - 12, 2025");
    }

    #[test]
    fn test_range_label_month_crossing() {
        let anchor = week_start(date(2025, 3, 31)).unwrap();
        assert_eq!(anchor.range_label(), "Mar 31 - Apr 6, 2025");
    }

    #[test]
    fn test_range_label_year_crossing_uses_end_year() {
        let anchor = WeekAnchor::try_from(date(2024, 12, 30)).unwrap();
        assert_eq!(anchor.range_label(), "Dec 30 - Jan 5, 2025");
    }

    #[test]
    fn test_days_are_consecutive() {
        let anchor = week_start(date(2025, 2, 26)).unwrap();
        let days: Vec<_> = anchor.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2025, 2, 24));
        assert_eq!(days[6], date(2025, 3, 2));
    }

    #[test]
    fn test_try_from_rejects_non_monday() {
        assert!(WeekAnchor::try_from(date(2025, 1, 7)).is_err());
    }

    #[test]
    fn test_chrono_range_edges_are_errors() {
        // MAX is a Monday whose Sunday does not exist
        assert_eq!(NaiveDate::MAX.weekday(), Weekday::Mon);
        assert!(matches!(
            week_start(NaiveDate::MAX),
            Err(ArogyaError::DateOutOfRange(_))
        ));
        assert!(WeekAnchor::try_from(NaiveDate::MAX).is_err());

        // MIN is mid-week, so its Monday is out of range
        assert!(matches!(
            week_start(NaiveDate::MIN),
            Err(ArogyaError::DateOutOfRange(_))
        ));
        assert!(!week_start(date(2025, 1, 6)).unwrap().is_current_week(NaiveDate::MIN));
    }

    #[test]
    fn test_shift_onto_last_full_week() {
        let last = week_start(NaiveDate::MAX - Duration::days(7)).unwrap();
        assert_eq!(last.end(), NaiveDate::MAX - Duration::days(1));
        assert_eq!(last.days().count(), 7);
        assert!(!last.range_label().is_empty());
        assert!(matches!(last.shift(1), Err(ArogyaError::DateOutOfRange(_))));
    }

    #[test]
    fn test_deserialize_rejects_non_monday() {
        let ok: WeekAnchor = serde_json::from_str("\"2025-01-06\"").unwrap();
        assert_eq!(ok.date(), date(2025, 1, 6));
        assert!(serde_json::from_str::<WeekAnchor>("\"2025-01-07\"").is_err());
    }
}
