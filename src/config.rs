//! Configuration management for the console tools.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Nothing here is required: every setting has a default.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration shared by the contact book and extension lookup binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed the contact book with the sample contacts (default: true)
    pub load_sample_contacts: bool,

    /// JSON catalog replacing the built-in extension catalog (default: none)
    pub extension_catalog_path: Option<PathBuf>,

    /// Fallback log filter when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_SAMPLE_DATA`: `true`/`false` (default: true)
    /// - `EXTENSION_CATALOG_PATH`: path to a JSON extension catalog
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() does not print to stdout, which carries the menus
        let _ = dotenvy::dotenv();

        let load_sample_contacts = Self::parse_env_bool("CONTACT_BOOK_SAMPLE_DATA", true)?;

        let extension_catalog_path = env::var("EXTENSION_CATALOG_PATH")
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            load_sample_contacts,
            extension_catalog_path,
            log_level,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            load_sample_contacts: true,
            extension_catalog_path: None,
            log_level: "warn".to_string(),
        }
    }
}
