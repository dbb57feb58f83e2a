//! Parsing of raw menu input.
//!
//! Malformed input is rejected here with an [`InputError`] and never reaches
//! the box office service.

use chrono::NaiveDate;

use crate::domain::DATE_FORMAT;

/// Errors raised while parsing user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("invalid {field}: '{value}' is not a whole number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid date '{0}', use DD/MM/YYYY")]
    InvalidDate(String),
}

/// Parses a numeric entity ID.
pub fn parse_id(field: &'static str, raw: &str) -> Result<i64, InputError> {
    parse_number(field, raw)
}

/// Parses a ticket quantity.
///
/// Only the number format is checked; zero and negative values are left to
/// the service, which rejects them with its own error.
pub fn parse_quantity(raw: &str) -> Result<i64, InputError> {
    parse_number("quantity", raw)
}

fn parse_number(field: &'static str, raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })
}

/// Parses a `DD/MM/YYYY` date, returning `today` for blank input.
pub fn parse_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(today);
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(trimmed.to_string()))
}
