//! # tp-core
//!
//! Core types and error definitions for the terminos workspace.
//!
//! This crate provides the building blocks shared by the date, rule and
//! service crates: integer aliases, the error type with its `ensure!` /
//! `fail!` macros, and the strict parsing of `YYYY-MM-DD` input text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Input parsing utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed integer used for day and month offsets.
pub type Integer = i32;

/// Non-negative integer used for business-day counts.
pub type Natural = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
