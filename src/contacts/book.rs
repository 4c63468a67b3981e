//! In-memory contact book.
//!
//! The book owns every contact, keyed by the identifier it assigned. Identifiers
//! start at 1, only ever grow, and are never handed out twice, even after the
//! contact that held one is deleted.

use crate::domain::{parse_date, ContactId};
use crate::error::{ContactBookError, ContactBookResult};
use crate::models::{Contact, ContactField, NewContact};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Answer from the collaborator asked to confirm a deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// `yes` or `y` in any case confirms; every other reply declines.
    pub fn from_reply(reply: &str) -> Self {
        match reply.trim().to_lowercase().as_str() {
            "yes" | "y" => Self::Confirmed,
            _ => Self::Declined,
        }
    }
}

/// Result of a delete request on an existing contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The contact was removed and is handed back to the caller.
    Deleted(Contact),
    /// Confirmation was not given; nothing changed.
    Cancelled,
}

/// Keyed store of validated contacts.
#[derive(Debug, Clone)]
pub struct ContactBook {
    contacts: BTreeMap<ContactId, Contact>,
    next_id: ContactId,
}

impl ContactBook {
    /// Create an empty contact book.
    pub fn new() -> Self {
        Self {
            contacts: BTreeMap::new(),
            next_id: ContactId::FIRST,
        }
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The identifier the next successful add will receive.
    pub fn next_id(&self) -> ContactId {
        self.next_id
    }

    /// Validate `fields` into a new contact and store it under the next identifier.
    ///
    /// On a validation failure nothing is stored and the identifier counter
    /// does not move.
    pub fn add(&mut self, fields: NewContact) -> ContactBookResult<ContactId> {
        let id = self.next_id;
        let contact = Contact::new(id, fields).map_err(|e| {
            warn!(error = %e, "Rejected new contact");
            ContactBookError::from(e)
        })?;

        self.contacts.insert(id, contact);
        self.next_id = id.next();
        debug!(id = %id, "Added contact");
        Ok(id)
    }

    /// Store an already built contact under the next identifier.
    ///
    /// The contact keeps whatever identifier it was built with; the key it is
    /// filed under is the returned identifier, and the two may differ.
    pub fn add_contact(&mut self, contact: Contact) -> ContactId {
        let id = self.next_id;
        if contact.id() != id {
            debug!(key = %id, contact_id = %contact.id(), "Storing contact under a different key");
        }
        self.contacts.insert(id, contact);
        self.next_id = id.next();
        id
    }

    /// Look up a contact by identifier.
    pub fn get(&self, id: ContactId) -> ContactBookResult<&Contact> {
        self.contacts.get(&id).ok_or(ContactBookError::NotFound(id))
    }

    pub fn exists(&self, id: ContactId) -> bool {
        self.contacts.contains_key(&id)
    }

    /// Contacts in identifier (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    /// Every contact, sorted by last name ascending. Equal last names keep
    /// identifier order.
    pub fn list_sorted(&self) -> Vec<&Contact> {
        let mut all: Vec<&Contact> = self.contacts.values().collect();
        all.sort_by_cached_key(|c| c.last_name().to_lowercase());
        all
    }

    /// Contacts whose full name contains `text`, ignoring case, in insertion order.
    pub fn find_by_name(&self, text: &str) -> Vec<&Contact> {
        let needle = text.to_lowercase();
        self.contacts
            .values()
            .filter(|c| c.name_contains(&needle))
            .collect()
    }

    /// Contacts whose full name, company or email contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        let needle = term.to_lowercase();
        self.contacts
            .values()
            .filter(|c| c.any_field_contains(&needle))
            .collect()
    }

    /// Replace one field of a stored contact with `value`.
    ///
    /// The value goes through the same validation as construction. Birthdates
    /// are parsed from text first; text that is not a date is a
    /// [`ContactBookError::MalformedInput`]. On any failure the contact is unchanged.
    pub fn update(&mut self, id: ContactId, field: ContactField, value: &str) -> ContactBookResult<()> {
        let contact = self
            .contacts
            .get_mut(&id)
            .ok_or(ContactBookError::NotFound(id))?;

        let result = match field {
            ContactField::FirstName => contact.set_first_name(value),
            ContactField::LastName => contact.set_last_name(value),
            ContactField::Company => {
                contact.set_company(value);
                Ok(())
            }
            ContactField::Mobile => contact.set_mobile(value),
            ContactField::Email => contact.set_email(value),
            ContactField::Birthdate => {
                let date = parse_date(value).ok_or_else(|| ContactBookError::MalformedInput {
                    field: "birthdate",
                    value: value.to_string(),
                })?;
                contact.set_birthdate(date)
            }
        };

        match result {
            Ok(()) => {
                debug!(id = %id, field = field.label(), "Updated contact");
                Ok(())
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Rejected contact update");
                Err(e.into())
            }
        }
    }

    /// Remove a contact once `confirm` approves it.
    ///
    /// `confirm` sees the contact about to be removed. Anything other than
    /// [`Confirmation::Confirmed`] leaves the book unchanged.
    pub fn delete<F>(&mut self, id: ContactId, confirm: F) -> ContactBookResult<DeleteOutcome>
    where
        F: FnOnce(&Contact) -> Confirmation,
    {
        let contact = self.get(id)?;
        if confirm(contact) != Confirmation::Confirmed {
            debug!(id = %id, "Deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self
            .contacts
            .remove(&id)
            .ok_or(ContactBookError::NotFound(id))?;
        debug!(id = %id, "Deleted contact");
        Ok(DeleteOutcome::Deleted(removed))
    }
}

impl Default for ContactBook {
    fn default() -> Self {
        Self::new()
    }
}
