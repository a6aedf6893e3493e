//! Miscellaneous utilities.

/// Parsing and validation of `YYYY-MM-DD` input text.
pub mod data_parsers;

pub use data_parsers::{days_in_month, is_leap_year, is_valid_iso_date, parse_iso_date};
