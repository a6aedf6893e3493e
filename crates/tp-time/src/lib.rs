//! # tp-time
//!
//! Date, period, business-day calendar and the Colombian holiday table.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// Source of the evaluation date.
pub mod clock;

/// `Date` type and day anchors.
pub mod date;

/// `Period`: a time span in a `TimeUnit`.
pub mod period;

/// `TimeUnit`: days, weeks, months, years.
pub mod time_unit;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, WeekendsOnly};
pub use calendars::{Colombia, HolidayTable};
pub use clock::Clock;
pub use date::{Date, DayAnchor};
pub use period::Period;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
