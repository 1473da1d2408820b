//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the rejected value so callers can report it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Contact ID is empty or longer than 10 characters.
    #[error("Invalid contact ID: {0:?}")]
    InvalidId(String),

    /// First name is empty or longer than 10 characters.
    #[error("Invalid first name: {0:?}")]
    InvalidFirstName(String),

    /// Last name is empty or longer than 10 characters.
    #[error("Invalid last name: {0:?}")]
    InvalidLastName(String),

    /// Phone number is not exactly 10 ASCII digits.
    #[error("Invalid phone number: {0:?}")]
    InvalidPhone(String),

    /// Address is empty or longer than 30 characters.
    #[error("Invalid address: {0:?}")]
    InvalidAddress(String),
}

/// Check that a value is non-empty and at most `max` characters long.
///
/// Length is counted in Unicode scalar values, not bytes.
pub(crate) fn within_length(value: &str, max: usize) -> bool {
    !value.is_empty() && value.chars().count() <= max
}
