//! Error types for the contact book and the extension database.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! None of these errors is fatal: every one is reported at the boundary of the
//! operation that produced it and leaves the stores untouched.

use crate::domain::{ContactId, ValidationError};
use thiserror::Error;

/// Errors that can occur when operating on the contact book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactBookError {
    /// A field value violates its invariant
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No contact is stored under the identifier
    #[error("Contact with ID {0} not found")]
    NotFound(ContactId),

    /// Raw text could not be parsed for the field
    #[error("Invalid {field} format: '{value}'")]
    MalformedInput { field: &'static str, value: String },
}

/// Errors that can occur when building or querying the extension database.
#[derive(Error, Debug)]
pub enum ExtensionError {
    /// Extension is not in the database; `suggestions` may be empty
    #[error("Information about '{extension}' is not available")]
    UnknownExtension {
        extension: String,
        suggestions: Vec<String>,
    },

    /// No entries are filed under the category
    #[error("Category '{category}' not found. Available categories: {}", .known.join(", "))]
    UnknownCategory { category: String, known: Vec<String> },

    /// The same extension appears twice in a catalog
    #[error("Duplicate extension in catalog: {0}")]
    DuplicateExtension(String),

    /// A catalog entry carries an unusable extension
    #[error("Invalid extension in catalog: '{0}'")]
    InvalidExtension(String),

    /// Catalog file is not valid JSON
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Catalog file could not be read
    #[error("Catalog read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactBookError
pub type ContactBookResult<T> = Result<T, ContactBookError>;

/// Convenience type alias for Results with ExtensionError
pub type ExtensionResult<T> = Result<T, ExtensionError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
