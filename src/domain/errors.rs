//! Domain validation errors.

use chrono::NaiveDate;
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required name field is empty or whitespace only.
    EmptyName(&'static str),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided mobile number is invalid.
    InvalidPhone(String),

    /// The provided birthdate lies after today.
    FutureBirthdate(NaiveDate),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName(field) => write!(f, "{} cannot be empty", field),
            Self::InvalidEmail(email) => write!(f, "Invalid email format: {}", email),
            Self::InvalidPhone(phone) => write!(
                f,
                "Mobile number must be 9 digits without a leading zero: {}",
                phone
            ),
            Self::FutureBirthdate(date) => {
                write!(f, "Birthdate cannot be in the future: {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
