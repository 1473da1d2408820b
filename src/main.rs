//! Contact Book - Main entry point
//!
//! Loads the storage file named by the configuration and runs the
//! interactive console menu on stdin/stdout.

use anyhow::{Context, Result};
use contact_book::{Config, Console, ContactBook, FlatFileStore};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Logging is not up yet; report straight to stderr
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep the menu on stdout clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(path = %config.storage_path.display(), "Starting contact book");

    let store = FlatFileStore::new(config.storage_path.clone())?;
    let mut book = match ContactBook::open(store) {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to open contact book: {}", e);
            return Err(e).context("opening contact book");
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    console.run(&mut book)?;

    info!("Contact book shutdown complete");
    Ok(())
}
