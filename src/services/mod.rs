//! Application service layer.
//!
//! Services hold the contact collection and orchestrate persistence. The
//! directory enforces ID-level rules in memory; the book persists the
//! directory through a store after every successful mutation.

mod contact_book;
mod contact_directory;

pub use contact_book::ContactBook;
pub use contact_directory::ContactDirectory;
