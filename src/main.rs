//! Contact Book - Main entry point
//!
//! Wires the pieces together: logging on stderr, configuration from the
//! environment, and an interactive shell session over a fresh store on
//! stdin/stdout.

use anyhow::Result;
use contact_book::{Config, ContactStore, Session};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so it can pick the default log level
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so the table output on stdout stays clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(table_width = config.table_width, "Contact book starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        ContactStore::new(),
        stdin.lock(),
        stdout.lock(),
        config.table_width,
    );

    if let Err(e) = session.run() {
        error!("Session ended with I/O error: {}", e);
        return Err(e.into());
    }

    info!("Contact book exiting");
    Ok(())
}
