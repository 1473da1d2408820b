//! In-memory contact directory.
//!
//! Holds the unique-by-ID collection of contacts and enforces the rules that
//! span more than one record: ID uniqueness and existence checks.

use crate::domain::ContactId;
use crate::error::{ContactBookError, ContactBookResult};
use crate::models::Contact;
use std::collections::HashMap;
use tracing::debug;

/// Unique-by-ID collection of contacts.
///
/// The directory owns its contacts. Reads hand out clones, so callers can
/// never mutate an entry behind the directory's back.
#[derive(Debug, Default, Clone)]
pub struct ContactDirectory {
    contacts: HashMap<ContactId, Contact>,
}

impl ContactDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with `records`.
    ///
    /// Existing entries are cleared first, then every record goes through
    /// [`add`](Self::add). A duplicate ID stops the load with
    /// `DuplicateKey` and leaves the records before it in place; the load
    /// is not rolled back.
    pub fn load_all<I>(&mut self, records: I) -> ContactBookResult<()>
    where
        I: IntoIterator<Item = Contact>,
    {
        self.contacts.clear();
        for contact in records {
            self.add(contact)?;
        }
        debug!(count = self.contacts.len(), "Loaded contacts into directory");
        Ok(())
    }

    /// Add a contact. Fails with `DuplicateKey` if the ID is taken.
    pub fn add(&mut self, contact: Contact) -> ContactBookResult<()> {
        if self.contacts.contains_key(contact.id()) {
            return Err(ContactBookError::DuplicateKey(contact.id().to_string()));
        }
        debug!(id = contact.id(), "Adding contact");
        self.contacts.insert(contact.contact_id().clone(), contact);
        Ok(())
    }

    /// Remove a contact. Fails with `NotFound` if the ID is unknown.
    pub fn delete(&mut self, id: &str) -> ContactBookResult<()> {
        match self.contacts.remove(id) {
            Some(_) => {
                debug!(id, "Deleted contact");
                Ok(())
            }
            None => Err(ContactBookError::NotFound(id.to_string())),
        }
    }

    pub fn update_first_name(&mut self, id: &str, first_name: &str) -> ContactBookResult<()> {
        self.find_mut(id)?.set_first_name(first_name)?;
        Ok(())
    }

    pub fn update_last_name(&mut self, id: &str, last_name: &str) -> ContactBookResult<()> {
        self.find_mut(id)?.set_last_name(last_name)?;
        Ok(())
    }

    pub fn update_phone(&mut self, id: &str, phone: &str) -> ContactBookResult<()> {
        self.find_mut(id)?.set_phone(phone)?;
        Ok(())
    }

    pub fn update_address(&mut self, id: &str, address: &str) -> ContactBookResult<()> {
        self.find_mut(id)?.set_address(address)?;
        Ok(())
    }

    /// Get a copy of one contact.
    pub fn get(&self, id: &str) -> ContactBookResult<Contact> {
        self.contacts
            .get(id)
            .cloned()
            .ok_or_else(|| ContactBookError::NotFound(id.to_string()))
    }

    /// Snapshot of every contact, sorted by ID.
    pub fn get_all(&self) -> Vec<Contact> {
        let mut all: Vec<Contact> = self.contacts.values().cloned().collect();
        all.sort_by(|a, b| a.contact_id().cmp(b.contact_id()));
        all
    }

    pub fn contains(&self, id: &str) -> bool {
        self.contacts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn find_mut(&mut self, id: &str) -> ContactBookResult<&mut Contact> {
        self.contacts
            .get_mut(id)
            .ok_or_else(|| ContactBookError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn contact(id: &str) -> Contact {
        Contact::new(id, "Ann", "Lee", "5551234567", "1 Main St").unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut dir = ContactDirectory::new();
        dir.add(contact("C001")).unwrap();

        assert_eq!(dir.len(), 1);
        assert!(dir.contains("C001"));
        assert_eq!(dir.get("C001").unwrap(), contact("C001"));
    }

    #[test]
    fn test_add_duplicate_keeps_one_entry() {
        let mut dir = ContactDirectory::new();
        dir.add(contact("C001")).unwrap();

        let other = Contact::new("C001", "Bob", "Ray", "1112223333", "9 Oak Rd").unwrap();
        let err = dir.add(other).unwrap_err();
        assert!(matches!(err, ContactBookError::DuplicateKey(ref id) if id == "C001"));

        assert_eq!(dir.len(), 1);
        assert_eq!(dir.get("C001").unwrap().first_name(), "Ann");
    }

    #[test]
    fn test_delete() {
        let mut dir = ContactDirectory::new();
        dir.add(contact("C001")).unwrap();
        dir.delete("C001").unwrap();
        assert!(dir.is_empty());
    }

    #[test]
    fn test_delete_missing_leaves_directory_unchanged() {
        let mut dir = ContactDirectory::new();
        dir.add(contact("C001")).unwrap();

        let err = dir.delete("C999").unwrap_err();
        assert!(matches!(err, ContactBookError::NotFound(_)));
        assert_eq!(dir.get_all(), vec![contact("C001")]);
    }

    #[test]
    fn test_update_phone_changes_only_phone() {
        let mut dir = ContactDirectory::new();
        dir.add(contact("C001")).unwrap();

        dir.update_phone("C001", "1234567890").unwrap();

        let c = dir.get("C001").unwrap();
        assert_eq!(c.phone(), "1234567890");
        assert_eq!(c.first_name(), "Ann");
        assert_eq!(c.last_name(), "Lee");
        assert_eq!(c.address(), "1 Main St");
    }

    #[test]
    fn test_update_each_field() {
        let mut dir = ContactDirectory::new();
        dir.add(contact("C001")).unwrap();

        dir.update_first_name("C001", "Bea").unwrap();
        dir.update_last_name("C001", "Kim").unwrap();
        dir.update_address("C001", "2 Elm Ave").unwrap();

        let c = dir.get("C001").unwrap();
        assert_eq!(c.fields(), ["C001", "Bea", "Kim", "5551234567", "2 Elm Ave"]);
    }

    #[test]
    fn test_update_missing_id() {
        let mut dir = ContactDirectory::new();
        assert!(matches!(
            dir.update_first_name("nope", "Bea"),
            Err(ContactBookError::NotFound(_))
        ));
        assert!(matches!(
            dir.update_address("nope", "2 Elm Ave"),
            Err(ContactBookError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_invalid_value_leaves_entry() {
        let mut dir = ContactDirectory::new();
        dir.add(contact("C001")).unwrap();

        let err = dir.update_phone("C001", "12345").unwrap_err();
        assert!(matches!(
            err,
            ContactBookError::Validation(ValidationError::InvalidPhone(_))
        ));
        assert_eq!(dir.get("C001").unwrap(), contact("C001"));
    }

    #[test]
    fn test_get_returns_snapshot() {
        let mut dir = ContactDirectory::new();
        dir.add(contact("C001")).unwrap();

        let mut copy = dir.get("C001").unwrap();
        copy.set_first_name("Zed").unwrap();

        assert_eq!(dir.get("C001").unwrap().first_name(), "Ann");
    }

    #[test]
    fn test_get_all_sorted_by_id() {
        let mut dir = ContactDirectory::new();
        dir.add(contact("C003")).unwrap();
        dir.add(contact("C001")).unwrap();
        dir.add(contact("C002")).unwrap();

        let ids: Vec<String> = dir.get_all().iter().map(|c| c.id().to_string()).collect();
        assert_eq!(ids, vec!["C001", "C002", "C003"]);
    }

    #[test]
    fn test_load_all_replaces_contents() {
        let mut dir = ContactDirectory::new();
        dir.add(contact("OLD")).unwrap();

        dir.load_all(vec![contact("C001"), contact("C002")]).unwrap();

        assert_eq!(dir.len(), 2);
        assert!(!dir.contains("OLD"));
    }

    #[test]
    fn test_load_all_empty() {
        let mut dir = ContactDirectory::new();
        dir.add(contact("OLD")).unwrap();
        dir.load_all(Vec::new()).unwrap();
        assert!(dir.is_empty());
    }

    #[test]
    fn test_load_all_duplicate_stops_partially_populated() {
        let mut dir = ContactDirectory::new();
        let result = dir.load_all(vec![
            contact("C001"),
            contact("C002"),
            contact("C001"),
            contact("C003"),
        ]);

        assert!(matches!(result, Err(ContactBookError::DuplicateKey(_))));
        assert_eq!(dir.len(), 2);
        assert!(dir.contains("C002"));
        assert!(!dir.contains("C003"));
    }
}
