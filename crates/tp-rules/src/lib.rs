//! # tp-rules
//!
//! The per-action deadline rules of Colombian administrative and judicial
//! procedure, and the dispatcher that turns a raw request into a result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `ActionType`: the recognized action codes.
pub mod action_type;

/// Request normalization and rule lookup.
pub mod dispatcher;

/// The rule table and its pipeline evaluator.
pub mod rules;

/// Result records.
pub mod term_result;

/// Legal description and citation texts.
pub mod texts;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use action_type::ActionType;
pub use dispatcher::Dispatcher;
pub use rules::{rule, TermRule};
pub use term_result::{Milestone, Outcome, TermResult, UnrecognizedAction};
