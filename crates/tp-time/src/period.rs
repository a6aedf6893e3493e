//! `Period`: a calendar time span expressed in a [`TimeUnit`].

use crate::time_unit::TimeUnit;
use tp_core::Integer;

/// A time span made up of an integer length and a [`TimeUnit`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// Number of units.
    pub length: Integer,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub const fn new(length: Integer, unit: TimeUnit) -> Self {
        Self { length, unit }
    }

    /// `n` calendar days.
    pub const fn days(n: Integer) -> Self {
        Self::new(n, TimeUnit::Days)
    }

    /// `n` calendar months.
    pub const fn months(n: Integer) -> Self {
        Self::new(n, TimeUnit::Months)
    }
}

impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        Period::new(-self.length, self.unit)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abbr = match self.unit {
            TimeUnit::Days => "D",
            TimeUnit::Weeks => "W",
            TimeUnit::Months => "M",
            TimeUnit::Years => "Y",
        };
        write!(f, "{}{abbr}", self.length)
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}
