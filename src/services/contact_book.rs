//! Write-through contact book.
//!
//! Pairs a [`ContactDirectory`] with a [`ContactStore`]: the directory is
//! loaded once on open, and the full directory is saved after every
//! mutation that succeeds. Failed mutations change nothing and save nothing.

use crate::error::ContactBookResult;
use crate::models::Contact;
use crate::repositories::ContactStore;
use crate::services::ContactDirectory;
use tracing::info;

/// A contact directory persisted through a store after each change.
///
/// Persistence is not transactional. If the directory change succeeds but
/// the save fails, the in-memory change stays and the `Io` error is
/// returned; the next successful save writes it out.
pub struct ContactBook<S: ContactStore> {
    directory: ContactDirectory,
    store: S,
}

impl<S: ContactStore> ContactBook<S> {
    /// Load everything from `store` into a fresh directory.
    pub fn open(store: S) -> ContactBookResult<Self> {
        let mut directory = ContactDirectory::new();
        directory.load_all(store.load()?)?;
        info!(count = directory.len(), "Contact book opened");
        Ok(Self { directory, store })
    }

    pub fn add(&mut self, contact: Contact) -> ContactBookResult<()> {
        self.directory.add(contact)?;
        self.persist()
    }

    pub fn delete(&mut self, id: &str) -> ContactBookResult<()> {
        self.directory.delete(id)?;
        self.persist()
    }

    pub fn update_first_name(&mut self, id: &str, first_name: &str) -> ContactBookResult<()> {
        self.directory.update_first_name(id, first_name)?;
        self.persist()
    }

    pub fn update_last_name(&mut self, id: &str, last_name: &str) -> ContactBookResult<()> {
        self.directory.update_last_name(id, last_name)?;
        self.persist()
    }

    pub fn update_phone(&mut self, id: &str, phone: &str) -> ContactBookResult<()> {
        self.directory.update_phone(id, phone)?;
        self.persist()
    }

    pub fn update_address(&mut self, id: &str, address: &str) -> ContactBookResult<()> {
        self.directory.update_address(id, address)?;
        self.persist()
    }

    pub fn get(&self, id: &str) -> ContactBookResult<Contact> {
        self.directory.get(id)
    }

    /// All contacts, sorted by ID.
    pub fn list(&self) -> Vec<Contact> {
        self.directory.get_all()
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self) -> ContactBookResult<()> {
        self.store.save(&self.directory.get_all())
    }
}
