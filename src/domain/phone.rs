//! MobileNumber value object.

use super::errors::ValidationError;
use std::fmt;

/// Number of digits a mobile number must have once separators are removed.
pub const MOBILE_DIGITS: usize = 9;

/// A type-safe wrapper for mobile numbers.
///
/// Spaces and dashes are ignored while validating, but the stored value is
/// the trimmed input with its separators intact.
///
/// # Example
///
/// ```
/// use console_records::domain::MobileNumber;
///
/// let mobile = MobileNumber::new("123 456 789").unwrap();
/// assert_eq!(mobile.as_str(), "123 456 789");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Create a new MobileNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Spaces and dashes are stripped before checking
    /// - Exactly nine ASCII digits must remain
    /// - The first digit must not be `0`
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is invalid.
    pub fn new(mobile: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = mobile.as_ref();

        if !Self::is_valid(raw) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(Self(raw.trim().to_string()))
    }

    fn is_valid(mobile: &str) -> bool {
        if mobile.trim().is_empty() {
            return false;
        }

        let clean: String = mobile.chars().filter(|c| *c != ' ' && *c != '-').collect();

        clean.len() == MOBILE_DIGITS
            && clean.chars().all(|c| c.is_ascii_digit())
            && !clean.starts_with('0')
    }

    /// Get the mobile number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
