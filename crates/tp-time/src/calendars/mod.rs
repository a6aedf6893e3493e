//! Concrete calendar implementations.

/// Colombia: weekends plus the compiled national holiday table.
pub mod colombia;

pub use colombia::{Colombia, HolidayTable};
