use contact_book::error::{ContactBookError, ContactBookResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactStore;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps the last saved snapshot in memory, tracks method calls for
/// verification, and can be told to fail saves.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStore {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_saves: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that will return `contacts` from `load`.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let store = Self::new();
        *store.contacts.lock().unwrap() = contacts;
        store
    }

    /// The most recently saved (or seeded) snapshot.
    pub fn saved(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Make every following `save` fail with an I/O error.
    pub fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactStore for MockContactStore {
    fn load(&self) -> ContactBookResult<Vec<Contact>> {
        self.track_call("load");
        Ok(self.saved())
    }

    fn save(&self, contacts: &[Contact]) -> ContactBookResult<()> {
        self.track_call("save");

        if *self.fail_saves.lock().unwrap() {
            return Err(ContactBookError::Io {
                path: "mock".into(),
                source: io::Error::new(io::ErrorKind::Other, "save disabled"),
            });
        }

        *self.contacts.lock().unwrap() = contacts.to_vec();
        Ok(())
    }
}
