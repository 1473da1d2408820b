use crate::error::ContactBookResult;
use crate::models::Contact;

/// Persistence for the full set of contacts.
///
/// Stores deal in whole snapshots: `load` returns everything that was
/// persisted and `save` replaces it. This keeps the write-through book
/// independent of the storage format (flat file, in-memory mock).
pub trait ContactStore {
    /// Read every persisted contact.
    ///
    /// A store with nothing persisted yet returns an empty list.
    fn load(&self) -> ContactBookResult<Vec<Contact>>;

    /// Replace the persisted contacts with `contacts`.
    fn save(&self, contacts: &[Contact]) -> ContactBookResult<()>;
}
