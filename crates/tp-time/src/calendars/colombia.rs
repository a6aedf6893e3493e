//! Colombia calendar.
//!
//! Holidays are a fixed, pre-resolved list (Easter-relative and "Ley
//! Emiliani" Monday holidays already moved to their observed dates) for the
//! years 2024–2026. Dates outside that window are never holidays.

use crate::calendar::Calendar;
use crate::date::Date;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// First year covered by the holiday table.
pub const FIRST_YEAR: u16 = 2024;

/// Last year covered by the holiday table.
pub const LAST_YEAR: u16 = 2026;

#[rustfmt::skip]
const HOLIDAYS: [(u16, u8, u8); 53] = [
    // 2024
    (2024, 1, 1), (2024, 1, 8), (2024, 3, 25), (2024, 3, 28), (2024, 3, 29),
    (2024, 5, 1), (2024, 5, 13), (2024, 6, 3), (2024, 6, 10), (2024, 7, 1),
    (2024, 7, 20), (2024, 8, 7), (2024, 8, 19), (2024, 10, 14), (2024, 11, 4),
    (2024, 11, 11), (2024, 12, 8), (2024, 12, 25),
    // 2025
    (2025, 1, 1), (2025, 1, 6), (2025, 3, 24), (2025, 4, 17), (2025, 4, 18),
    (2025, 5, 1), (2025, 6, 2), (2025, 6, 23), (2025, 6, 30),
    (2025, 7, 20), (2025, 8, 7), (2025, 8, 18), (2025, 10, 13), (2025, 11, 3),
    (2025, 11, 17), (2025, 12, 8), (2025, 12, 25),
    // 2026
    (2026, 1, 1), (2026, 1, 12), (2026, 3, 23), (2026, 4, 2), (2026, 4, 3),
    (2026, 5, 1), (2026, 5, 18), (2026, 6, 8), (2026, 6, 15), (2026, 6, 29),
    (2026, 7, 20), (2026, 8, 7), (2026, 8, 17), (2026, 10, 12), (2026, 11, 2),
    (2026, 11, 16), (2026, 12, 8), (2026, 12, 25),
];

/// The immutable set of Colombian national holidays.
#[derive(Debug)]
pub struct HolidayTable {
    dates: BTreeSet<Date>,
}

static TABLE: OnceLock<HolidayTable> = OnceLock::new();

impl HolidayTable {
    /// Return the process-wide table, building it on first use.
    pub fn get() -> &'static HolidayTable {
        TABLE.get_or_init(|| HolidayTable {
            dates: HOLIDAYS
                .iter()
                .filter_map(|&(y, m, d)| Date::from_ymd(y, m, d).ok())
                .collect(),
        })
    }

    /// Return `true` if `date` is listed as a holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.contains(&date)
    }

    /// Iterate the listed holidays in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = Date> + '_ {
        self.dates.iter().copied()
    }

    /// Number of listed holidays.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the table lists no holidays.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Return `true` if `year` lies inside the compiled window.
    pub fn covers(&self, year: u16) -> bool {
        (FIRST_YEAR..=LAST_YEAR).contains(&year)
    }
}

/// Colombian business-day calendar.
///
/// Saturdays, Sundays and the dates in [`HolidayTable`] are non-business
/// days.
#[derive(Debug, Clone, Copy, Default)]
pub struct Colombia;

impl Colombia {
    /// Return `true` if `date` is listed in the holiday table.
    pub fn is_holiday(&self, date: Date) -> bool {
        HolidayTable::get().contains(date)
    }
}

impl Calendar for Colombia {
    fn name(&self) -> &str {
        "Colombia"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }
}
