//! File Extension Info - main entry point
//!
//! Interactive lookup over a fixed catalog of file extensions.

use anyhow::{Context, Result};
use console_records::cli::{Console, ExtensionMenu};
use console_records::{init_logging, Config, ExtensionDatabase};
use std::io;
use tracing::{error, info};

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    init_logging(&config.log_level);

    let database = match &config.extension_catalog_path {
        Some(path) => {
            info!("Loading extension catalog from {}", path.display());
            ExtensionDatabase::from_path(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?
        }
        None => ExtensionDatabase::builtin(),
    };

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    if let Err(e) = ExtensionMenu::new(&database, console).run() {
        error!("Console I/O failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
