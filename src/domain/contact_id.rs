//! ContactId value object.

use std::fmt;
use std::str::FromStr;

/// A type-safe wrapper for contact book identifiers.
///
/// Identifiers are handed out by the contact book, starting at 1, and are
/// never reused after a deletion.
///
/// # Example
///
/// ```
/// use console_records::domain::ContactId;
///
/// let id = ContactId::FIRST;
/// assert_eq!(id.get(), 1);
/// assert_eq!(id.next(), ContactId::new(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactId(u32);

impl ContactId {
    /// The first identifier a fresh contact book assigns.
    pub const FIRST: ContactId = ContactId(1);

    /// Wrap a raw identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The identifier that follows this one.
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for ContactId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for ContactId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
