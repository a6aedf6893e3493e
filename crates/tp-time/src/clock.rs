//! Source of "today" for calculations without a caller-supplied date.
//!
//! Production code reads the system clock and takes the civil day in
//! Colombia (UTC−5). Tests pin the date with [`Clock::Fixed`] so results do
//! not depend on when they run.

use crate::date::{Date, DayAnchor};
use chrono::Utc;
use tp_core::errors::Result;

/// Where the evaluation date comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// The current civil date in Colombia.
    #[default]
    System,
    /// Always the given date.
    Fixed(Date),
}

impl Clock {
    /// Return today's date according to this clock.
    pub fn today(&self) -> Result<Date> {
        match self {
            Clock::System => {
                Date::from_instant(Utc::now(), DayAnchor::ColombiaNoon.utc_offset()?)
            }
            Clock::Fixed(date) => Ok(*date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_date() {
        let d = Date::from_ymd(2025, 1, 2).unwrap();
        assert_eq!(Clock::Fixed(d).today().unwrap(), d);
    }

    #[test]
    fn system_clock_is_within_a_day_of_utc() {
        let today = Clock::System.today().unwrap();
        let utc_today = Date::from_naive(Utc::now().date_naive()).unwrap();
        let diff = today.days_between(utc_today);
        assert!((0..=1).contains(&diff), "Colombia date {today} vs UTC {utc_today}");
    }
}
