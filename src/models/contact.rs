//! Contact model representing a person in the contact book.

use crate::domain::{
    today, Birthdate, Company, ContactId, EmailAddress, MobileNumber, PersonName,
    ValidationError,
};
use chrono::NaiveDate;
use std::fmt;

/// Unvalidated field values for a new contact, as collected from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub mobile: String,
    pub email: String,
    pub birthdate: NaiveDate,
}

impl NewContact {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        company: impl Into<String>,
        mobile: impl Into<String>,
        email: impl Into<String>,
        birthdate: NaiveDate,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            company: company.into(),
            mobile: mobile.into(),
            email: email.into(),
            birthdate,
        }
    }
}

/// Editable contact fields, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Company,
    Mobile,
    Email,
    Birthdate,
}

impl ContactField {
    /// All fields in menu order.
    pub const ALL: [ContactField; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Company,
        Self::Mobile,
        Self::Email,
        Self::Birthdate,
    ];

    /// Human-readable label for prompts and messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Company => "Company",
            Self::Mobile => "Mobile number",
            Self::Email => "Email",
            Self::Birthdate => "Birthdate",
        }
    }
}

/// A contact whose fields always satisfy their validation rules.
///
/// Every setter re-validates its input and leaves the stored value untouched
/// on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    first_name: PersonName,
    last_name: PersonName,
    company: Company,
    mobile: MobileNumber,
    email: EmailAddress,
    birthdate: Birthdate,
}

impl Contact {
    /// Validate every field and build the contact.
    ///
    /// Fields are checked in order (first name, last name, mobile, email,
    /// birthdate) and the first failure is returned.
    pub fn new(id: ContactId, fields: NewContact) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            first_name: PersonName::new(ContactField::FirstName.label(), &fields.first_name)?,
            last_name: PersonName::new(ContactField::LastName.label(), &fields.last_name)?,
            company: Company::new(&fields.company),
            mobile: MobileNumber::new(&fields.mobile)?,
            email: EmailAddress::new(&fields.email)?,
            birthdate: Birthdate::new(fields.birthdate)?,
        })
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn company(&self) -> &str {
        self.company.as_str()
    }

    pub fn mobile(&self) -> &str {
        self.mobile.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate.date()
    }

    /// First and last name separated by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years as of the local date.
    pub fn age(&self) -> u32 {
        self.age_on(today())
    }

    pub fn age_on(&self, today: NaiveDate) -> u32 {
        self.birthdate.age_on(today)
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.first_name = PersonName::new(ContactField::FirstName.label(), value)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.last_name = PersonName::new(ContactField::LastName.label(), value)?;
        Ok(())
    }

    /// Blank input resets the company to `N/A`.
    pub fn set_company(&mut self, value: &str) {
        self.company = Company::new(value);
    }

    pub fn set_mobile(&mut self, value: &str) -> Result<(), ValidationError> {
        self.mobile = MobileNumber::new(value)?;
        Ok(())
    }

    pub fn set_email(&mut self, value: &str) -> Result<(), ValidationError> {
        self.email = EmailAddress::new(value)?;
        Ok(())
    }

    pub fn set_birthdate(&mut self, value: NaiveDate) -> Result<(), ValidationError> {
        self.birthdate = Birthdate::new(value)?;
        Ok(())
    }

    /// Case-insensitive substring match against the full name.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn name_contains(&self, needle: &str) -> bool {
        self.full_name().to_lowercase().contains(needle)
    }

    /// Case-insensitive substring match against full name, company or email.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn any_field_contains(&self, needle: &str) -> bool {
        self.name_contains(needle)
            || self.company().to_lowercase().contains(needle)
            || self.email().to_lowercase().contains(needle)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.id, self.full_name(), self.mobile)
    }
}
