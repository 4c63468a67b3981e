//! Console Records - an in-memory contact book and a file extension lookup tool.
//!
//! Both tools are single-user terminal programs built around a small record
//! store. The stores own validated entities and expose plain operations; the
//! menus in [`cli`] read input, call those operations and render the results.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (ids, names, mobile numbers, emails, birthdates)
//! - **models**: Contact and ExtensionInfo records
//! - **contacts**: The contact book (add, get, search, update, delete)
//! - **extensions**: The read-only extension database with its category index
//! - **cli**: Menu loops and text rendering
//! - **config**: Configuration from environment variables
//! - **error**: Error types for each store

pub mod cli;
pub mod config;
pub mod contacts;
pub mod domain;
pub mod error;
pub mod extensions;
pub mod models;

pub use config::Config;
pub use contacts::{Confirmation, ContactBook, DeleteOutcome};
pub use error::{ConfigError, ContactBookError, ExtensionError};
pub use extensions::{CategorySummary, DatabaseStatistics, ExtensionDatabase};
pub use models::{Contact, ContactField, ExtensionInfo, NewContact};

/// Install the stderr tracing subscriber used by both binaries.
///
/// `RUST_LOG` wins when set; otherwise `fallback_level` is used.
pub fn init_logging(fallback_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));

    // Logs go to stderr so they never interleave with menu output on stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
