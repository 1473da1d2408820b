//! Contact model representing one person in the contact book.

use crate::domain::{ContactId, PersonName, PhoneNumber, StreetAddress, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Plain field tuple used as the serde wire shape of a [`Contact`].
///
/// Deserializing a `Contact` goes through this struct and then
/// [`Contact::new`], so every field is validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: String,
}

/// A contact with a fixed ID and four individually validated fields.
///
/// Every field is checked at construction and in every setter, so a
/// `Contact` value is always valid. The ID cannot change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactRecord", into = "ContactRecord")]
pub struct Contact {
    id: ContactId,
    first_name: PersonName,
    last_name: PersonName,
    phone: PhoneNumber,
    address: StreetAddress,
}

impl Contact {
    /// Create a new contact.
    ///
    /// All fields are validated before the contact is built. The error
    /// reports the first invalid field in the order id, first name, last
    /// name, phone, address.
    ///
    /// # Example
    ///
    /// ```
    /// use contact_book::Contact;
    ///
    /// let c = Contact::new("C001", "Ann", "Lee", "5551234567", "1 Main St").unwrap();
    /// assert_eq!(c.first_name(), "Ann");
    /// assert!(Contact::new("C001", "Ann", "Lee", "555", "1 Main St").is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: ContactId::new(id)?,
            first_name: PersonName::first(first_name)?,
            last_name: PersonName::last(last_name)?,
            phone: PhoneNumber::new(phone)?,
            address: StreetAddress::new(address)?,
        })
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// The validated key, as stored in the directory.
    pub fn contact_id(&self) -> &ContactId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// Replace the first name. On error the contact is unchanged.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<(), ValidationError> {
        self.first_name = PersonName::first(first_name)?;
        Ok(())
    }

    /// Replace the last name. On error the contact is unchanged.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<(), ValidationError> {
        self.last_name = PersonName::last(last_name)?;
        Ok(())
    }

    /// Replace the phone number. On error the contact is unchanged.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phone = PhoneNumber::new(phone)?;
        Ok(())
    }

    /// Replace the address. On error the contact is unchanged.
    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), ValidationError> {
        self.address = StreetAddress::new(address)?;
        Ok(())
    }

    /// Field values in persisted order: id, first, last, phone, address.
    pub fn fields(&self) -> [&str; 5] {
        [
            self.id(),
            self.first_name(),
            self.last_name(),
            self.phone(),
            self.address(),
        ]
    }
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ValidationError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        Contact::new(
            record.id,
            record.first_name,
            record.last_name,
            record.phone,
            record.address,
        )
    }
}

impl From<Contact> for ContactRecord {
    fn from(contact: Contact) -> Self {
        ContactRecord {
            id: contact.id.into_inner(),
            first_name: contact.first_name.into_inner(),
            last_name: contact.last_name.into_inner(),
            phone: contact.phone.into_inner(),
            address: contact.address.into_inner(),
        }
    }
}

/// Single-line listing format used by the console.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | {} {} | Phone: {} | Street Address: {}",
            self.id, self.first_name, self.last_name, self.phone, self.address
        )
    }
}
