//! Name and company value objects.

use super::errors::ValidationError;
use std::fmt;

/// Stored in place of a blank company.
pub const NO_COMPANY: &str = "N/A";

/// A required, trimmed, non-empty name component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName for the given field.
    ///
    /// `field` only appears in the error message ("First name", "Last name").
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the value is empty or whitespace only.
    pub fn new(field: &'static str, name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName(field));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A company name. Never fails: blank input becomes [`NO_COMPANY`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Company(String);

impl Company {
    pub fn new(company: impl AsRef<str>) -> Self {
        let trimmed = company.as_ref().trim();
        if trimmed.is_empty() {
            Self(NO_COMPANY.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_name_trims() {
        let name = PersonName::new("First name", "  Aoife ").unwrap();
        assert_eq!(name.as_str(), "Aoife");
    }

    #[test]
    fn test_person_name_rejects_blank() {
        assert_eq!(
            PersonName::new("Last name", " \t "),
            Err(ValidationError::EmptyName("Last name"))
        );
        assert!(PersonName::new("First name", "").is_err());
    }

    #[test]
    fn test_company_defaults_when_blank() {
        assert_eq!(Company::new("").as_str(), NO_COMPANY);
        assert_eq!(Company::new("   ").as_str(), NO_COMPANY);
        assert_eq!(Company::new(" Travel Agency ").as_str(), "Travel Agency");
    }
}
