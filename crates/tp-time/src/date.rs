//! `Date` type: a Colombian civil day.
//!
//! Dates are stored as a serial number of days since an epoch, so they carry
//! no time of day and day/month arithmetic can never drift across a day
//! boundary.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900.
//! * The valid date range is 1900-01-01 to 9999-12-31, i.e. every date a
//!   four-digit `YYYY-MM-DD` text can name from 1900 on.
//!
//! # Anchors
//! When a date has to be pinned to an instant (reading "today" from the
//! system clock, or parsing request text for a rule) the [`DayAnchor`] says
//! which wall-clock time and UTC offset the day is pinned at.

use crate::period::Period;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tp_core::errors::{Error, Result};
use tp_core::utilities::{days_in_month, is_leap_year, parse_iso_date};
use tp_core::Integer;

/// Offset of Colombian civil time from UTC, in seconds (UTC−5, no DST).
pub const COLOMBIA_UTC_OFFSET_SECS: i32 = -5 * 3600;

/// First year a [`Date`] can hold.
pub const MIN_YEAR: u16 = 1900;

/// Last year a [`Date`] can hold.
pub const MAX_YEAR: u16 = 9999;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(2_958_464);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse a strict `YYYY-MM-DD` string.
    pub fn parse_iso(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)
            .ok_or_else(|| Error::InvalidArgument(format!("\"{s}\" is not a YYYY-MM-DD date")))?;
        Date::from_ymd(y, m, d)
    }

    /// Parse a strict `YYYY-MM-DD` string by pinning the day to the instant
    /// given by `anchor` and reading the civil day back at the anchor's
    /// offset.
    pub fn parse_anchored(s: &str, anchor: DayAnchor) -> Result<Self> {
        let date = Date::parse_iso(s)?;
        let instant = anchor.instant(date)?;
        Date::from_instant(instant, anchor.utc_offset()?)
    }

    /// The civil date of `instant` at the given UTC offset.
    pub fn from_instant(instant: DateTime<Utc>, offset: FixedOffset) -> Result<Self> {
        Date::from_naive(instant.with_timezone(&offset).date_naive())
    }

    /// Convert from a `chrono` naive date.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        let year = u16::try_from(date.year())
            .map_err(|_| Error::Date(format!("year {} out of range", date.year())))?;
        // month() and day() are always 1–12 / 1–31
        Date::from_ymd(year, date.month() as u8, date.day() as u8)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1900-01-01 was a Monday: serial 1 → Monday, serial 2 → Tuesday, …
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Monday)
    }

    /// Convert to a `chrono` naive date.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let (y, m, d) = ymd_from_serial(self.0);
        NaiveDate::from_ymd_opt(y as i32, m as u32, d as u32)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Shift by `n` calendar days (negative `n` moves backwards).
    pub fn add_days(self, n: Integer) -> Result<Self> {
        let serial = self.0 + n;
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "{self} plus {n} day(s) leaves the supported range"
            )));
        }
        Ok(Date(serial))
    }

    /// Shift the month by `n`, clamping the day to the last day of the
    /// resulting month (e.g. January 31 + 1 month = February 28/29).
    pub fn add_months(self, n: Integer) -> Result<Self> {
        let (y, m, d) = ymd_from_serial(self.0);
        let total = (y as i32) * 12 + (m as i32 - 1) + n;
        let new_y = total.div_euclid(12);
        let new_m = (total.rem_euclid(12) + 1) as u8;
        if !(MIN_YEAR as i32..=MAX_YEAR as i32).contains(&new_y) {
            return Err(Error::Date(format!(
                "{self} plus {n} month(s) leaves the supported range"
            )));
        }
        let new_y = new_y as u16;
        let new_d = d.min(days_in_month(new_y, new_m));
        Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
    }

    /// Advance by a calendar [`Period`].
    pub fn advance(self, period: Period) -> Result<Self> {
        match period.unit {
            TimeUnit::Days => self.add_days(period.length),
            TimeUnit::Weeks => self.add_days(period.length * 7),
            TimeUnit::Months => self.add_months(period.length),
            TimeUnit::Years => self.add_months(period.length * 12),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Anchors ───────────────────────────────────────────────────────────────────

/// Wall-clock time and offset at which a civil day is pinned to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayAnchor {
    /// 12:00 in Colombia (17:00 UTC).
    ColombiaNoon,
    /// 00:00 UTC.
    UtcMidnight,
}

impl DayAnchor {
    /// The UTC offset the anchor's wall-clock time is expressed in.
    pub fn utc_offset(self) -> Result<FixedOffset> {
        let secs = match self {
            DayAnchor::ColombiaNoon => COLOMBIA_UTC_OFFSET_SECS,
            DayAnchor::UtcMidnight => 0,
        };
        FixedOffset::east_opt(secs).ok_or_else(|| Error::Date(format!("invalid offset {secs}s")))
    }

    /// Hour of the day (in [`DayAnchor::utc_offset`]) the day is pinned at.
    pub fn hour(self) -> u32 {
        match self {
            DayAnchor::ColombiaNoon => 12,
            DayAnchor::UtcMidnight => 0,
        }
    }

    /// The instant `date` is pinned to under this anchor.
    pub fn instant(self, date: Date) -> Result<DateTime<Utc>> {
        let naive = date
            .to_naive()
            .and_then(|d| d.and_hms_opt(self.hour(), 0, 0))
            .ok_or_else(|| Error::Date(format!("cannot anchor {date}")))?;
        self.utc_offset()?
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| Error::Date(format!("ambiguous anchor for {date}")))
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Date::parse_iso(s)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse_iso(&s).map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Convert (year, month, day) to a serial number. Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    // Days in whole years 1900..year, then leap days in [1900, year)
    let mut serial = (y - 1900) * 365;
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1900, 1, 1).serial(), 1);
        assert_eq!(date(1900, 1, 1), Date::MIN);
        assert_eq!(date(9999, 12, 31), Date::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29),
            (2100, 2, 28),
            (2024, 2, 29),
            (2025, 1, 2),
            (2199, 12, 31),
            (2400, 2, 29),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2025, 1, 2).weekday(), Weekday::Thursday);
        assert_eq!(date(2025, 1, 4).weekday(), Weekday::Saturday);
        assert_eq!(date(2025, 1, 5).weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_display_and_parse() {
        let d = date(2025, 3, 7);
        assert_eq!(d.to_string(), "2025-03-07");
        assert_eq!(Date::parse_iso("2025-03-07").unwrap(), d);
        assert_eq!("2025-03-07".parse::<Date>().unwrap(), d);
        assert!(matches!(Date::parse_iso("2025-3-7"), Err(Error::InvalidArgument(_))));
        assert!(Date::parse_iso("2025-02-30").is_err());
        assert_eq!(Date::parse_iso("2500-01-01").unwrap(), date(2500, 1, 1));
        assert_eq!(Date::parse_iso("9999-12-31").unwrap(), Date::MAX);
        assert_eq!(format!("{d:?}"), "Date(2025-03-07)");
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(date(2024, 1, 31).add_months(1).unwrap(), date(2024, 2, 29));
        assert_eq!(date(2025, 1, 31).add_months(1).unwrap(), date(2025, 2, 28));
        assert_eq!(date(2025, 3, 31).add_months(1).unwrap(), date(2025, 4, 30));
        assert_eq!(date(2025, 10, 31).add_months(4).unwrap(), date(2026, 2, 28));
        assert_eq!(date(2025, 11, 15).add_months(2).unwrap(), date(2026, 1, 15));
        assert_eq!(date(2025, 1, 15).add_months(-1).unwrap(), date(2024, 12, 15));
    }

    #[test]
    fn test_add_days() {
        assert_eq!(date(2024, 2, 28).add_days(1).unwrap(), date(2024, 2, 29));
        assert_eq!(date(2025, 2, 28).add_days(1).unwrap(), date(2025, 3, 1));
        assert_eq!(date(2025, 12, 31).add_days(1).unwrap(), date(2026, 1, 1));
        assert_eq!(date(2025, 1, 1).add_days(-1).unwrap(), date(2024, 12, 31));
        assert_eq!(date(2025, 2, 1) - date(2025, 1, 1), 31);
    }

    #[test]
    fn test_arithmetic_out_of_range_is_an_error() {
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(date(9999, 11, 30).add_months(2).is_err());
        assert_eq!(date(2199, 12, 31).add_days(1).unwrap(), date(2200, 1, 1));
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_serial(0).is_err());
    }

    #[test]
    fn test_advance_period() {
        let d = date(2025, 1, 31);
        assert_eq!(d.advance(Period::days(3)).unwrap(), date(2025, 2, 3));
        assert_eq!(d.advance(Period::new(1, TimeUnit::Weeks)).unwrap(), date(2025, 2, 7));
        assert_eq!(d.advance(Period::months(1)).unwrap(), date(2025, 2, 28));
        assert_eq!(d.advance(Period::new(1, TimeUnit::Years)).unwrap(), date(2026, 1, 31));
    }

    #[test]
    fn test_end_of_month() {
        assert_eq!(date(2024, 2, 15).end_of_month(), date(2024, 2, 29));
        assert_eq!(date(2025, 2, 15).end_of_month(), date(2025, 2, 28));
    }

    #[test]
    fn test_anchor_instants() {
        let d = date(2025, 1, 2);
        let noon = DayAnchor::ColombiaNoon.instant(d).unwrap();
        assert_eq!(noon.to_rfc3339(), "2025-01-02T17:00:00+00:00");
        let midnight = DayAnchor::UtcMidnight.instant(d).unwrap();
        assert_eq!(midnight.to_rfc3339(), "2025-01-02T00:00:00+00:00");
    }

    #[test]
    fn test_parse_anchored_keeps_the_civil_day() {
        for s in ["2024-02-29", "2024-12-31", "2025-01-01", "2026-06-30"] {
            let expected = Date::parse_iso(s).unwrap();
            assert_eq!(Date::parse_anchored(s, DayAnchor::ColombiaNoon).unwrap(), expected);
            assert_eq!(Date::parse_anchored(s, DayAnchor::UtcMidnight).unwrap(), expected);
        }
    }

    #[test]
    fn test_from_instant_uses_colombia_offset() {
        let offset = DayAnchor::ColombiaNoon.utc_offset().unwrap();
        // 03:00 UTC on Jan 3 is still Jan 2 in Bogotá
        let instant = Utc.with_ymd_and_hms(2025, 1, 3, 3, 0, 0).unwrap();
        assert_eq!(Date::from_instant(instant, offset).unwrap(), date(2025, 1, 2));
        let later = Utc.with_ymd_and_hms(2025, 1, 3, 5, 0, 0).unwrap();
        assert_eq!(Date::from_instant(later, offset).unwrap(), date(2025, 1, 3));
    }

    #[test]
    fn test_serde_as_iso_text() {
        let d = date(2025, 1, 23);
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"2025-01-23\"");
        let back: Date = serde_json::from_str("\"2025-01-23\"").unwrap();
        assert_eq!(back, d);
        assert!(serde_json::from_str::<Date>("\"23/01/2025\"").is_err());
    }
}
