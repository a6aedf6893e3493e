//! Integration tests for `Date`: ISO text round trips, anchored parsing and
//! calendar-day / calendar-month arithmetic.

use proptest::prelude::*;
use tp_time::{Date, DayAnchor, Period};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn any_date() -> impl Strategy<Value = Date> {
    (Date::MIN.serial()..=Date::MAX.serial()).prop_map(|s| Date::from_serial(s).unwrap())
}

// ─── Month clamping ───────────────────────────────────────────────────────────

#[test]
fn month_clamping_leap_year() {
    assert_eq!(date(2024, 1, 31).add_months(1).unwrap().to_string(), "2024-02-29");
}

#[test]
fn month_clamping_common_year() {
    assert_eq!(date(2025, 1, 31).add_months(1).unwrap().to_string(), "2025-02-28");
}

#[test]
fn four_month_expiry_from_month_end() {
    // 2025-10-31 + 4M → February 2026 has 28 days
    assert_eq!(date(2025, 10, 31).advance(Period::months(4)).unwrap(), date(2026, 2, 28));
    // 2023-10-31 + 4M → February 2024 has 29 days
    assert_eq!(date(2023, 10, 31).advance(Period::months(4)).unwrap(), date(2024, 2, 29));
    // 2025-08-31 + 4M → December has 31 days, no clamping
    assert_eq!(date(2025, 8, 31).advance(Period::months(4)).unwrap(), date(2025, 12, 31));
}

#[test]
fn three_calendar_days_cross_month_and_year() {
    assert_eq!(date(2025, 1, 30).advance(Period::days(3)).unwrap(), date(2025, 2, 2));
    assert_eq!(date(2024, 12, 30).advance(Period::days(3)).unwrap(), date(2025, 1, 2));
    assert_eq!(date(2024, 2, 27).advance(Period::days(3)).unwrap(), date(2024, 3, 1));
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_iso_roundtrip(d in any_date()) {
        let text = d.to_string();
        prop_assert_eq!(text.len(), 10);
        prop_assert_eq!(Date::parse_iso(&text).unwrap(), d);
    }

    #[test]
    fn prop_anchored_parse_never_drifts(d in any_date()) {
        let text = d.to_string();
        prop_assert_eq!(Date::parse_anchored(&text, DayAnchor::ColombiaNoon).unwrap(), d);
        prop_assert_eq!(Date::parse_anchored(&text, DayAnchor::UtcMidnight).unwrap(), d);
    }

    #[test]
    fn prop_add_days_is_invertible(serial in 10_000i32..100_000, n in -400i32..400) {
        let d = Date::from_serial(serial).unwrap();
        let shifted = d.add_days(n).unwrap();
        prop_assert_eq!(d.days_between(shifted), n);
        prop_assert_eq!(shifted.add_days(-n).unwrap(), d);
    }

    #[test]
    fn prop_add_months_clamps(serial in 10_000i32..100_000, n in 0i32..48) {
        let d = Date::from_serial(serial).unwrap();
        let shifted = d.add_months(n).unwrap();
        let months = (shifted.year() as i32 - d.year() as i32) * 12
            + shifted.month() as i32
            - d.month() as i32;
        prop_assert_eq!(months, n);
        prop_assert!(shifted.day_of_month() <= d.day_of_month());
        if shifted.day_of_month() < d.day_of_month() {
            prop_assert_eq!(shifted, shifted.end_of_month());
        }
    }
}
