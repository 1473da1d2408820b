//! Interactive console menu.
//!
//! Reads choices and field values line by line and drives a
//! [`ContactBook`]. Input and output are generic so the menu can run over
//! stdin/stdout or over in-memory buffers in tests. Errors from the book
//! are printed and the loop continues; only I/O errors on the console
//! streams end it early.

use crate::error::ContactBookError;
use crate::models::Contact;
use crate::repositories::ContactStore;
use crate::services::ContactBook;
use std::io::{self, BufRead, Write};

/// Console front-end over a line-oriented reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the main menu until the user exits or input ends.
    pub fn run<S: ContactStore>(&mut self, book: &mut ContactBook<S>) -> io::Result<()> {
        loop {
            writeln!(self.output, "Contact Service Application")?;
            writeln!(self.output, "1. Add Contact")?;
            writeln!(self.output, "2. View Contacts")?;
            writeln!(self.output, "3. Update Contact information")?;
            writeln!(self.output, "4. Delete Contact")?;
            writeln!(self.output, "5. Exit")?;

            let Some(choice) = self.prompt("Select an option: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.handle_add(book)?,
                "2" => self.handle_view(book)?,
                "3" => self.handle_update(book)?,
                "4" => self.handle_delete(book)?,
                "5" => {
                    writeln!(self.output, "Goodbye.")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice")?,
            }

            writeln!(self.output)?;
        }
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `label` and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn handle_add<S: ContactStore>(&mut self, book: &mut ContactBook<S>) -> io::Result<()> {
        let labels = [
            "Contact ID (max 10): ",
            "First name (max 10): ",
            "Last name (max 10): ",
            "Phone (10 digits): ",
            "Street Address (max 30): ",
        ];
        let mut values = Vec::with_capacity(labels.len());
        for label in labels {
            match self.prompt(label)? {
                Some(value) => values.push(value),
                None => return Ok(()),
            }
        }

        let result = Contact::new(
            values[0].as_str(),
            values[1].as_str(),
            values[2].as_str(),
            values[3].as_str(),
            values[4].as_str(),
        )
        .map_err(ContactBookError::from)
        .and_then(|contact| book.add(contact));

        match result {
            Ok(()) => writeln!(self.output, "Contact added."),
            Err(e) => writeln!(self.output, "Could not add contact: {}", e),
        }
    }

    fn handle_view<S: ContactStore>(&mut self, book: &ContactBook<S>) -> io::Result<()> {
        let contacts = book.list();
        if contacts.is_empty() {
            return writeln!(self.output, "No contacts found.");
        }

        writeln!(self.output, "Contacts:")?;
        for contact in contacts {
            writeln!(self.output, "- {}", contact)?;
        }
        Ok(())
    }

    fn handle_update<S: ContactStore>(&mut self, book: &mut ContactBook<S>) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Contact ID to update: ")? else {
            return Ok(());
        };
        let contact = match book.get(&id) {
            Ok(contact) => contact,
            Err(e) => return writeln!(self.output, "Update failed: {}", e),
        };

        writeln!(self.output, "Update this contact:")?;
        writeln!(self.output, "- {}", contact)?;
        writeln!(self.output, "Select the attribute to update: ")?;
        writeln!(self.output, "1. First Name")?;
        writeln!(self.output, "2. Last Name")?;
        writeln!(self.output, "3. Phone Number")?;
        writeln!(self.output, "4. Street Address")?;
        writeln!(self.output, "5. Cancel")?;

        let Some(choice) = self.prompt("Select an option: ")? else {
            return Ok(());
        };

        let (label, done) = match choice.as_str() {
            "1" => ("Enter the new first name (max 10): ", "first name"),
            "2" => ("Enter the new last name (max 10): ", "last name"),
            "3" => ("Enter the new phone number (10 digits): ", "phone number"),
            "4" => ("Enter the new street address (max 30): ", "street address"),
            "5" => return writeln!(self.output, "Update canceled."),
            _ => return writeln!(self.output, "Invalid choice"),
        };

        let Some(value) = self.prompt(label)? else {
            return Ok(());
        };

        let result = match choice.as_str() {
            "1" => book.update_first_name(&id, &value),
            "2" => book.update_last_name(&id, &value),
            "3" => book.update_phone(&id, &value),
            _ => book.update_address(&id, &value),
        };

        match result {
            Ok(()) => writeln!(self.output, "Contact {} updated.", done),
            Err(e) => writeln!(self.output, "Update failed: {}", e),
        }
    }

    fn handle_delete<S: ContactStore>(&mut self, book: &mut ContactBook<S>) -> io::Result<()> {
        let Some(id) = self.prompt("Enter Contact ID to delete: ")? else {
            return Ok(());
        };
        let contact = match book.get(&id) {
            Ok(contact) => contact,
            Err(e) => return writeln!(self.output, "Delete failed: {}", e),
        };

        writeln!(self.output, "Delete this contact?")?;
        writeln!(self.output, "- {}", contact)?;

        loop {
            let Some(answer) = self.prompt("Are you sure? (y/n): ")? else {
                return Ok(());
            };
            match answer.to_lowercase().as_str() {
                "y" => {
                    return match book.delete(&id) {
                        Ok(()) => writeln!(self.output, "Contact deleted."),
                        Err(e) => writeln!(self.output, "Delete failed: {}", e),
                    };
                }
                "n" => return writeln!(self.output, "Delete canceled."),
                _ => writeln!(self.output, "Please enter 'y' or 'n'.")?,
            }
        }
    }
}
