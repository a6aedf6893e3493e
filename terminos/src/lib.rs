//! # terminos
//!
//! Statutory deadline calculator for Colombian public-utility procedures.
//!
//! This crate is a **façade** over the workspace crates plus the HTTP
//! boundary that exposes the dispatcher to clients.
//!
//! ```rust
//! use terminos::rules::{Dispatcher, Outcome};
//!
//! let outcome = Dispatcher::new()
//!     .calcular_terminos("PETICION", Some("2025-01-02"))
//!     .unwrap();
//! let Outcome::Terms(result) = outcome else { panic!() };
//! assert_eq!(result.milestone("fechaLimiteRespuesta").unwrap().to_string(), "2025-01-23");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error type, aliases and input parsing.
pub use tp_core as core;

/// Dates, periods and the business-day calendar.
pub use tp_time as time;

/// Action types, the rule table and the dispatcher.
pub use tp_rules as rules;

/// Command-line and environment configuration of the server.
pub mod config;

/// JSON-over-HTTP service.
pub mod http;
