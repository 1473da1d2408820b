//! ContactId value object.

use super::errors::{within_length, ValidationError};
use std::borrow::Borrow;
use std::fmt;

/// Maximum length of a contact ID, in characters.
pub const MAX_ID_LEN: usize = 10;

/// A type-safe wrapper for contact IDs.
///
/// This ensures that contact IDs are validated at construction time:
/// non-empty and at most 10 characters.
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactId;
///
/// let id = ContactId::new("C001").unwrap();
/// assert_eq!(id.as_str(), "C001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    /// Create a new ContactId.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidId` if the ID is empty or too long.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if !within_length(&id, MAX_ID_LEN) {
            return Err(ValidationError::InvalidId(id));
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Lets a HashMap<ContactId, _> be queried with a plain &str.
impl Borrow<str> for ContactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
