//! Contact Book - a validated in-memory contact directory with flat-file persistence.
//!
//! This library keeps a unique-by-ID set of contacts whose fields are
//! validated on every write, persists them to a pipe-delimited text file,
//! and ships a console menu that drives the whole thing.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for each contact field
//! - **models**: The `Contact` entity
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: The `ContactStore` seam and the flat-file store
//! - **services**: The in-memory directory and the write-through book
//! - **console**: Interactive menu front-end

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use console::Console;
pub use domain::ValidationError;
pub use error::{ConfigError, ContactBookError, ContactBookResult};
pub use models::Contact;
pub use repositories::{ContactStore, FlatFileStore};
pub use services::{ContactBook, ContactDirectory};
