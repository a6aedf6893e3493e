//! `TimeUnit`: units of calendar time used in a [`Period`](crate::Period).

/// A unit of calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Calendar months, clamped to the month's last day.
    Months,
    /// Calendar years (12 months).
    Years,
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Days => write!(f, "día(s)"),
            TimeUnit::Weeks => write!(f, "semana(s)"),
            TimeUnit::Months => write!(f, "mes(es)"),
            TimeUnit::Years => write!(f, "año(s)"),
        }
    }
}
