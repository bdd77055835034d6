use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A local calendar date at day granularity.
///
/// Fortunes only change when the day changes, so this is the only notion of
/// time the generator sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Wrap a chrono date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a day from year/month/day, or `None` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a `YYYY-MM-DD` date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Self)
            .map_err(|_| CoreError::InvalidDate(s.to_string()))
    }

    /// The underlying chrono date.
    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Locale-independent day string used as the hash seed, e.g. `Fri Oct 16 2026`.
    pub fn canonical(self) -> String {
        self.0.format("%a %b %d %Y").to_string()
    }

    /// Human-facing date, e.g. `2026年10月16日`.
    pub fn display(self) -> String {
        format!("{}年{}月{}日", self.0.year(), self.0.month(), self.0.day())
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Source of "today".
pub trait Clock {
    /// The current local calendar day.
    fn today(&self) -> CalendarDay;
}

/// Clock backed by the host's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDay {
        CalendarDay(Local::now().date_naive())
    }
}

/// Clock pinned to a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    day: CalendarDay,
}

impl FixedClock {
    /// Create a clock that always reports `day`.
    pub fn new(day: CalendarDay) -> Self {
        Self { day }
    }

    /// Move the clock to another day.
    pub fn set(&mut self, day: CalendarDay) {
        self.day = day;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDay {
        self.day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CalendarDay {
        CalendarDay::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn canonical_matches_day_string_pattern() {
        assert_eq!(day(2006, 1, 2).canonical(), "Mon Jan 02 2006");
        assert_eq!(day(2026, 10, 16).canonical(), "Fri Oct 16 2026");
    }

    #[test]
    fn display_is_not_zero_padded() {
        assert_eq!(day(2026, 3, 5).display(), "2026年3月5日");
        assert_eq!(day(2026, 12, 31).display(), "2026年12月31日");
    }

    #[test]
    fn parse_accepts_iso_dates() {
        assert_eq!(CalendarDay::parse("2026-10-16").unwrap(), day(2026, 10, 16));
        assert_eq!(CalendarDay::parse(" 2024-02-29 ").unwrap(), day(2024, 2, 29));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            CalendarDay::parse("2023-02-29"),
            Err(CoreError::InvalidDate(_))
        ));
        assert!(CalendarDay::parse("16/10/2026").is_err());
    }

    #[test]
    fn fixed_clock_reports_its_day() {
        let mut clock = FixedClock::new(day(2026, 1, 1));
        assert_eq!(clock.today(), day(2026, 1, 1));
        clock.set(day(2026, 1, 2));
        assert_eq!(clock.today(), day(2026, 1, 2));
    }

    #[test]
    fn serializes_as_iso_string() {
        let json = serde_json::to_string(&day(2026, 10, 16)).unwrap();
        assert_eq!(json, "\"2026-10-16\"");
    }
}
