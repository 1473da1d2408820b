//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the contact fields: IDs,
//! names, phone numbers, and street addresses. Each value object validates
//! at construction time, so an invalid field can never be represented.

pub mod address;
pub mod contact_id;
pub mod errors;
pub mod name;
pub mod phone;

pub use address::StreetAddress;
pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use name::PersonName;
pub use phone::PhoneNumber;
