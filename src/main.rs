//! Contact Book - Main entry point
//!
//! Starts the interactive shell on stdin/stdout. Logs go to stderr so they
//! never interleave with the shell's own output.

use anyhow::Result;
use contact_book::{shell, AddressBook, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the filter
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut book = AddressBook::with_page_size(config.page_size);
    info!(page_size = book.page_size(), "Starting contact book shell");

    let stdin = io::stdin();
    shell::run(&mut book, stdin.lock(), io::stdout(), &config.prompt)?;

    info!(contacts = book.len(), "Contact book shutdown complete");
    Ok(())
}
