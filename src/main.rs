//! Contact Book - main entry point
//!
//! Interactive, in-memory phone contact book.

use anyhow::Result;
use console_records::cli::{Console, ContactMenu};
use console_records::{init_logging, Config, ContactBook};
use std::io;
use tracing::{error, info};

fn main() -> Result<()> {
    // Configuration errors are reported before logging exists, so print them too
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    init_logging(&config.log_level);
    info!("Configuration loaded successfully");

    let mut book = if config.load_sample_contacts {
        ContactBook::with_sample_contacts()
    } else {
        ContactBook::new()
    };
    info!("Contact book ready with {} contacts", book.len());

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    if let Err(e) = ContactMenu::new(&mut book, console).run() {
        error!("Console I/O failed: {}", e);
        return Err(e.into());
    }

    info!("Contact book closed");
    Ok(())
}
