//! `Calendar` trait: business-day predicate and business-day arithmetic.
//!
//! A calendar knows which dates are business days and can count, skip and
//! adjust dates over them. Calendar-day and calendar-month offsets live on
//! [`Date`] itself because they do not depend on holidays.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use tp_core::ensure;
use tp_core::errors::Result;
use tp_core::Natural;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Colombia"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return the first business day strictly after `date`.
    ///
    /// The input itself is never returned, even when it is already a
    /// business day.
    fn next_business_day(&self, date: Date) -> Result<Date> {
        let mut d = date.add_days(1)?;
        while !self.is_business_day(d) {
            d = d.add_days(1)?;
        }
        Ok(d)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => {
                if self.is_business_day(date) {
                    Ok(date)
                } else {
                    self.next_business_day(date)
                }
            }
        }
    }

    /// Return the date on which the `n`-th business day falls.
    ///
    /// When `count_start_day` is set and `date` is itself a business day,
    /// `date` counts as day 1; otherwise counting starts on the following
    /// business day. `n` must be at least 1.
    fn add_business_days(&self, date: Date, n: Natural, count_start_day: bool) -> Result<Date> {
        ensure!(n >= 1, "business-day count must be at least 1, got {n}");
        let mut counter: Natural = if count_start_day && self.is_business_day(date) {
            1
        } else {
            0
        };
        let mut d = date;
        while counter < n {
            d = d.add_days(1)?;
            if self.is_business_day(d) {
                counter += 1;
            }
        }
        Ok(d)
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|&d| self.is_business_day(d))
            .count() as i32;
        sign * count
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::Error;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        assert!(!cal.is_business_day(date(2023, 9, 2)));
        assert!(cal.is_business_day(date(2023, 9, 4)));
    }

    #[test]
    fn adjust_following() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        assert_eq!(
            cal.adjust(sat, BusinessDayConvention::Following).unwrap(),
            date(2023, 9, 4)
        );
        let mon = date(2023, 9, 4);
        assert_eq!(cal.adjust(mon, BusinessDayConvention::Following).unwrap(), mon);
        assert_eq!(cal.adjust(sat, BusinessDayConvention::Unadjusted).unwrap(), sat);
    }

    #[test]
    fn next_business_day_skips_a_business_input() {
        let cal = WeekendsOnly;
        // Monday → Tuesday, Friday → Monday
        assert_eq!(cal.next_business_day(date(2023, 9, 4)).unwrap(), date(2023, 9, 5));
        assert_eq!(cal.next_business_day(date(2023, 9, 8)).unwrap(), date(2023, 9, 11));
    }

    #[test]
    fn add_business_days_counts_start_day() {
        let cal = WeekendsOnly;
        let mon = date(2023, 9, 4);
        assert_eq!(cal.add_business_days(mon, 1, true).unwrap(), mon);
        assert_eq!(cal.add_business_days(mon, 5, true).unwrap(), date(2023, 9, 8));
        assert_eq!(cal.add_business_days(mon, 5, false).unwrap(), date(2023, 9, 11));
    }

    #[test]
    fn add_business_days_ignores_count_start_on_non_business_start() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        // The Saturday is never counted, with or without the flag
        assert_eq!(cal.add_business_days(sat, 1, true).unwrap(), date(2023, 9, 4));
        assert_eq!(cal.add_business_days(sat, 1, false).unwrap(), date(2023, 9, 4));
    }

    #[test]
    fn add_business_days_rejects_zero() {
        let cal = WeekendsOnly;
        let err = cal.add_business_days(date(2023, 9, 4), 0, true).unwrap_err();
        assert!(matches!(err, Error::Precondition(_)));
    }

    #[test]
    fn next_business_day_at_range_end_is_an_error() {
        let cal = WeekendsOnly;
        assert!(matches!(cal.next_business_day(Date::MAX), Err(Error::Date(_))));
    }

    #[test]
    fn business_days_between() {
        let cal = WeekendsOnly;
        let d1 = date(2023, 9, 4); // Monday
        let d2 = date(2023, 9, 8); // Friday
        // Tue, Wed, Thu, Fri = 4 business days (d1 exclusive)
        assert_eq!(cal.business_days_between(d1, d2), 4);
        assert_eq!(cal.business_days_between(d2, d1), -4);
        assert_eq!(cal.business_days_between(d1, d1), 0);
    }
}
