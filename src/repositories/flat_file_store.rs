//! Pipe-delimited flat-file storage.
//!
//! One contact per line, fields in the order `id|first|last|phone|address`.
//! There is no header and no escaping: a field containing `|` or a line
//! break will not survive a round trip. Such records are still written
//! verbatim, with a warning in the log.

use crate::error::{ContactBookError, ContactBookResult};
use crate::models::Contact;
use crate::repositories::traits::ContactStore;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Field separator on disk.
pub const DELIMITER: char = '|';

/// Number of fields per record line.
pub const FIELD_COUNT: usize = 5;

/// Contact store backed by a single delimited text file.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Create a store for `path`. The file need not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the path is empty.
    pub fn new(path: impl Into<PathBuf>) -> ContactBookResult<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(ContactBookError::InvalidArgument(
                "storage path cannot be empty".to_string(),
            ));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse one line into a contact.
    ///
    /// Returns `None` for a wrong field count or a field that fails
    /// validation. Trailing empty fields count toward the field total.
    pub fn parse_line(line: &str) -> Option<Contact> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return None;
        }
        Contact::new(fields[0], fields[1], fields[2], fields[3], fields[4]).ok()
    }

    /// Render one contact as a line, without the newline.
    pub fn format_line(contact: &Contact) -> String {
        contact.fields().join("|")
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        file.write_all(contents)?;
        file.sync_all()
    }
}

impl ContactStore for FlatFileStore {
    fn load(&self) -> ContactBookResult<Vec<Contact>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Storage file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(ContactBookError::io(&self.path, e)),
        };

        let mut contacts = Vec::new();
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match Self::parse_line(line) {
                Some(contact) => contacts.push(contact),
                None => warn!(
                    path = %self.path.display(),
                    line = index + 1,
                    "Skipping malformed contact record"
                ),
            }
        }

        debug!(path = %self.path.display(), count = contacts.len(), "Loaded contacts");
        Ok(contacts)
    }

    /// Overwrite the file with `contacts`.
    ///
    /// The data goes to a sibling `.tmp` file, is synced, and is then
    /// renamed over the target, so readers see either the old or the new
    /// contents in full.
    fn save(&self, contacts: &[Contact]) -> ContactBookResult<()> {
        let mut contents = String::new();
        for contact in contacts {
            if contact
                .fields()
                .iter()
                .any(|f| f.contains(DELIMITER) || f.contains(['\n', '\r']))
            {
                warn!(
                    id = contact.id(),
                    "Contact contains a delimiter or line break and will not load back intact"
                );
            }
            contents.push_str(&Self::format_line(contact));
            contents.push('\n');
        }

        let temp_path = self.temp_path();
        if let Err(e) = self.write_file(&temp_path, contents.as_bytes()) {
            let _ = fs::remove_file(&temp_path);
            return Err(ContactBookError::io(&temp_path, e));
        }
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            warn!(
                temp_path = %temp_path.display(),
                error = %e,
                "Rename failed, cleaning up temp file"
            );
            let _ = fs::remove_file(&temp_path);
            return Err(ContactBookError::io(&self.path, e));
        }

        debug!(path = %self.path.display(), count = contacts.len(), "Saved contacts");
        Ok(())
    }
}
