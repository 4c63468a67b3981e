//! EmailAddress value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Local part, '@', and a dotted domain, none of which may hold whitespace or '@'.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// A type-safe wrapper for email addresses.
///
/// The address is trimmed before it is checked and stored.
///
/// # Example
///
/// ```
/// use console_records::domain::EmailAddress;
///
/// let email = EmailAddress::new("  emily.blackwell@dbs.ie ").unwrap();
/// assert_eq!(email.as_str(), "emily.blackwell@dbs.ie");
/// assert!(EmailAddress::new("a@b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the trimmed address does not
    /// match `local@domain.tld`.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = email.as_ref();
        let trimmed = raw.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidEmail(raw.to_string()));
        }

        Ok(Self(trimmed.to_string()))
    }

    fn is_valid(email: &str) -> bool {
        !email.is_empty() && EMAIL_PATTERN.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
