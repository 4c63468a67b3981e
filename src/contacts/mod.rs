//! Contact book: the keyed record store for contacts.

pub mod book;
mod samples;

pub use book::{Confirmation, ContactBook, DeleteOutcome};
