//! Data parsing helpers.
//!
//! The wire format for dates is strictly `YYYY-MM-DD`: exactly four, two and
//! two ASCII digits separated by hyphens, no surrounding whitespace and no
//! time-zone suffix. [`parse_iso_date`] only checks that shape;
//! [`is_valid_iso_date`] additionally applies the calendar-sanity rules used
//! to accept a caller-supplied start date.

/// Earliest year accepted for a caller-supplied start date.
pub const MIN_INPUT_YEAR: u16 = 2000;

/// Whether a given year is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year. Returns 0 for a month outside 1–12.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Parse a date string of the exact shape `YYYY-MM-DD`.
///
/// Returns `(year, month, day)` on success. Only the shape is checked, so
/// `"2025-13-40"` parses to `(2025, 13, 40)`.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    let year: u16 = s[0..4].parse().ok()?;
    let month: u8 = s[5..7].parse().ok()?;
    let day: u8 = s[8..10].parse().ok()?;
    Some((year, month, day))
}

/// Return `true` if `s` is a well-formed, calendar-valid start date.
///
/// The year must be at least [`MIN_INPUT_YEAR`], the month 1–12 and the day
/// within the month's length (29 days for February of a leap year).
pub fn is_valid_iso_date(s: &str) -> bool {
    let Some((year, month, day)) = parse_iso_date(s) else {
        return false;
    };
    year >= MIN_INPUT_YEAR
        && (1..=12).contains(&month)
        && day >= 1
        && day <= days_in_month(year, month)
}
