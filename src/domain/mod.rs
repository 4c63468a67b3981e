//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the validated contact fields:
//! identifiers, names, companies, mobile numbers, email addresses and
//! birthdates. Each value object checks its input at construction time, so an
//! invalid value can never be stored in a contact.

pub mod birthdate;
pub mod contact_id;
pub mod email;
pub mod errors;
pub mod person_name;
pub mod phone;

pub use birthdate::{parse_date, today, Birthdate};
pub use contact_id::ContactId;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use person_name::{Company, PersonName, NO_COMPANY};
pub use phone::MobileNumber;
