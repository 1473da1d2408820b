//! PersonName value object.

use super::errors::{within_length, ValidationError};
use std::fmt;

/// Maximum length of a first or last name, in characters.
pub const MAX_NAME_LEN: usize = 10;

/// A validated first or last name.
///
/// Both name fields share one rule (non-empty, at most 10 characters) but
/// report different errors, so construction goes through
/// [`PersonName::first`] or [`PersonName::last`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a first name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidFirstName` if the value is empty or too long.
    pub fn first(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(name.into(), ValidationError::InvalidFirstName)
    }

    /// Create a last name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidLastName` if the value is empty or too long.
    pub fn last(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse(name.into(), ValidationError::InvalidLastName)
    }

    fn parse(
        name: String,
        err: impl FnOnce(String) -> ValidationError,
    ) -> Result<Self, ValidationError> {
        if !within_length(&name, MAX_NAME_LEN) {
            return Err(err(name));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
