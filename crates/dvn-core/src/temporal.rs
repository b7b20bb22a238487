//! # Temporal Types: Calendar Dates
//!
//! Court deadlines are counted in whole calendar days, so the navigator works
//! with dates rather than instants. [`CalendarDate`] wraps
//! `chrono::NaiveDate` and always renders as `YYYY-MM-DD`.
//!
//! "Today" is never read implicitly by domain code. Outer surfaces call
//! [`CalendarDate::today_utc()`] and pass the result in, which keeps deadline
//! projection and urgency labeling reproducible in tests.

use chrono::{Datelike, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DvnError;

/// A calendar date without time-of-day or timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Wrap a `chrono::NaiveDate`.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a date from year, month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DvnError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DvnError::InvalidDate {
                input: format!("{year:04}-{month:02}-{day:02}"),
            })
    }

    /// Parse a `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Result<Self, DvnError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| DvnError::InvalidDate {
                input: s.to_string(),
            })
    }

    /// The current date in UTC.
    pub fn today_utc() -> Self {
        Self(Utc::now().date_naive())
    }

    /// The date `days` calendar days after this one.
    pub fn plus_days(&self, days: u32) -> Result<Self, DvnError> {
        self.0
            .checked_add_days(Days::new(u64::from(days)))
            .map(Self)
            .ok_or_else(|| DvnError::DateOutOfRange {
                date: self.to_string(),
                days: i64::from(days),
            })
    }

    /// Signed number of days from `self` until `other`.
    ///
    /// Negative when `other` is earlier than `self`.
    pub fn days_until(&self, other: CalendarDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Access the inner `NaiveDate`.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::str::FromStr for CalendarDate {
    type Err = DvnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_and_display() {
        let d = CalendarDate::parse("2025-01-01").unwrap();
        assert_eq!(d.to_string(), "2025-01-01");
        assert_eq!(d.year(), 2025);
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(CalendarDate::parse("01/02/2025").is_err());
        assert!(CalendarDate::parse("2025-02-30").is_err());
        assert!(CalendarDate::parse("").is_err());
        assert!(CalendarDate::parse("2025-01-01T00:00:00Z").is_err());
    }

    #[test]
    fn test_from_ymd_rejects_invalid() {
        assert!(CalendarDate::from_ymd(2025, 13, 1).is_err());
        assert!(CalendarDate::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_plus_days_crosses_months() {
        let d = CalendarDate::parse("2025-01-01").unwrap();
        assert_eq!(d.plus_days(180).unwrap().to_string(), "2025-06-30");
        assert_eq!(d.plus_days(28).unwrap().to_string(), "2025-01-29");
        assert_eq!(d.plus_days(0).unwrap(), d);
    }

    #[test]
    fn test_plus_days_leap_year() {
        let d = CalendarDate::parse("2024-02-28").unwrap();
        assert_eq!(d.plus_days(1).unwrap().to_string(), "2024-02-29");
    }

    #[test]
    fn test_days_until_is_signed() {
        let a = CalendarDate::parse("2025-03-01").unwrap();
        let b = CalendarDate::parse("2025-03-11").unwrap();
        assert_eq!(a.days_until(b), 10);
        assert_eq!(b.days_until(a), -10);
        assert_eq!(a.days_until(a), 0);
    }

    #[test]
    fn test_serde_as_plain_string() {
        let d = CalendarDate::parse("2025-06-30").unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2025-06-30\"");
        let back: CalendarDate = serde_json::from_str("\"2025-06-30\"").unwrap();
        assert_eq!(back, d);
    }

    proptest! {
        /// Adding n days and measuring back yields n.
        #[test]
        fn plus_days_inverse_of_days_until(n in 0u32..20_000) {
            let start = CalendarDate::parse("2020-01-01").unwrap();
            let end = start.plus_days(n).unwrap();
            prop_assert_eq!(start.days_until(end), i64::from(n));
        }
    }
}
