//! StreetAddress value object.

use super::errors::{within_length, ValidationError};
use std::fmt;

/// Maximum length of a street address, in characters.
pub const MAX_ADDRESS_LEN: usize = 30;

/// A validated street address: non-empty, at most 30 characters.
///
/// # Example
///
/// ```
/// use contact_book::domain::StreetAddress;
///
/// let address = StreetAddress::new("1 Main St").unwrap();
/// assert_eq!(address.as_str(), "1 Main St");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StreetAddress(String);

impl StreetAddress {
    /// Create a new StreetAddress.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddress` if the value is empty or too long.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        if !within_length(&address, MAX_ADDRESS_LEN) {
            return Err(ValidationError::InvalidAddress(address));
        }
        Ok(Self(address))
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StreetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
