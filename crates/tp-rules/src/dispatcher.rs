//! Request-level entry point: normalizes the caller's action code and start
//! date text, then runs the matching rule.

use crate::action_type::ActionType;
use crate::rules::rule;
use crate::term_result::{Outcome, UnrecognizedAction};
use tp_core::errors::Result;
use tp_core::utilities::is_valid_iso_date;
use tp_time::{Calendar, Clock, Colombia, Date, DayAnchor};

/// Computes deadlines for raw `(action code, start date)` requests.
///
/// Holds no per-request state and is `Send + Sync`, so one instance can be
/// shared by every connection.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher<C: Calendar = Colombia> {
    calendar: C,
    clock: Clock,
    legacy_codes: bool,
}

impl Dispatcher<Colombia> {
    /// A dispatcher over the Colombian calendar and the system clock.
    pub fn new() -> Self {
        Self::with_calendar(Colombia)
    }
}

impl<C: Calendar> Dispatcher<C> {
    /// A dispatcher over `calendar` and the system clock.
    pub fn with_calendar(calendar: C) -> Self {
        Self { calendar, clock: Clock::System, legacy_codes: false }
    }

    /// Replace the clock used when no valid start date is given.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Also recognize legacy action codes (`SILENCIO`).
    pub fn with_legacy_codes(mut self, enabled: bool) -> Self {
        self.legacy_codes = enabled;
        self
    }

    /// The calendar deadlines are computed over.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Return `true` if legacy codes are recognized.
    pub fn legacy_codes(&self) -> bool {
        self.legacy_codes
    }

    /// Recognized action codes, in listing order.
    pub fn tipos(&self) -> Vec<ActionType> {
        if self.legacy_codes {
            ActionType::ALL.to_vec()
        } else {
            ActionType::CURRENT.to_vec()
        }
    }

    fn recognize(&self, code: &str) -> Option<ActionType> {
        ActionType::from_code(code).filter(|a| self.legacy_codes || !a.is_legacy())
    }

    /// Compute the deadlines for `action_text` starting on `date_text`.
    ///
    /// The action code is trimmed and upper-cased before lookup. A missing
    /// or malformed date falls back to today's civil date in Colombia. An
    /// unknown code is not an error: it yields [`Outcome::Unrecognized`].
    ///
    /// # Errors
    ///
    /// Fails when a valid date text lies outside the supported date range or
    /// when a deadline computation leaves it.
    pub fn calcular_terminos(&self, action_text: &str, date_text: Option<&str>) -> Result<Outcome> {
        let code = action_text.trim().to_uppercase();
        let Some(action) = self.recognize(&code) else {
            return Ok(Outcome::Unrecognized(UnrecognizedAction::new(action_text, &self.tipos())));
        };

        let rule = rule(action);
        let start = if rule.uses_start_date() {
            self.resolve_start(date_text, rule.anchor)?
        } else {
            // Never read; any date will do.
            Date::MIN
        };
        rule.compute(&self.calendar, start).map(Outcome::Terms)
    }

    fn resolve_start(&self, date_text: Option<&str>, anchor: DayAnchor) -> Result<Date> {
        match date_text {
            Some(text) if is_valid_iso_date(text) => Date::parse_anchored(text, anchor),
            _ => self.clock.today(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_time::WeekendsOnly;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn tipos_lists_legacy_only_when_enabled() {
        let d = Dispatcher::new();
        assert_eq!(d.tipos().len(), 12);
        assert!(!d.tipos().contains(&ActionType::Silencio));
        let d = d.with_legacy_codes(true);
        assert_eq!(d.tipos().len(), 13);
        assert_eq!(d.tipos()[8], ActionType::Silencio);
    }

    #[test]
    fn legacy_code_is_unrecognized_by_default() {
        let out = Dispatcher::new().calcular_terminos("SILENCIO", Some("2025-01-02")).unwrap();
        assert!(matches!(out, Outcome::Unrecognized(_)));
    }

    #[test]
    fn code_is_normalized() {
        let d = Dispatcher::new();
        let out = d.calcular_terminos("  tutela ", Some("2025-01-02")).unwrap();
        assert_eq!(out.terms().unwrap().tipo, ActionType::Tutela);
    }

    #[test]
    fn generic_over_calendar() {
        let d = Dispatcher::with_calendar(WeekendsOnly).with_clock(Clock::Fixed(date(2025, 1, 2)));
        let out = d.calcular_terminos("RECURSO_QUEJA", None).unwrap();
        let terms = out.terms().unwrap();
        assert_eq!(terms.milestone("fechaRechazoApelacion"), Some(date(2025, 1, 2)));
        assert_eq!(terms.milestone("fechaLimitePresentacionQueja"), Some(date(2025, 1, 8)));
    }
}
