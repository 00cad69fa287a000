//! Contact Book - Main entry point
//!
//! Runs the interactive contact book menu on stdin/stdout.

use anyhow::Result;
use contact_book::{Config, ConsoleDriver, ContactStore};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can feed the log filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to keep the menu on stdout readable)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

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

    info!("Starting contact book with {:?} tables", config.table_style);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut driver = ConsoleDriver::new(
        stdin.lock(),
        stdout.lock(),
        ContactStore::new(),
        config.table_style,
    );
    driver.run()?;

    info!(
        "Contact book closed with {} contacts discarded",
        driver.store().len()
    );
    Ok(())
}
