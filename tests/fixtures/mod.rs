//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use console_records::{ContactBook, NewContact};

/// Build a date, panicking on impossible input.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// A valid contact with the given name, company and email.
pub fn sample_contact(first_name: &str, last_name: &str, company: &str, email: &str) -> NewContact {
    NewContact::new(
        first_name,
        last_name,
        company,
        "871111111",
        email,
        date(1990, 1, 1),
    )
}

/// A book holding three contacts with ids 1, 2 and 3.
pub fn book_with_three() -> ContactBook {
    let mut book = ContactBook::new();
    for fields in [
        sample_contact("Emily", "Blackwell", "Dublin Business School", "emily.blackwell@dbs.ie"),
        sample_contact("James", "Murphy", "TechCorp Ltd", "james.murphy@techcorp.ie"),
        sample_contact("Sarah", "O'Connor", "Green Energy Solutions", "sarah.oconnor@greenenergy.ie"),
    ] {
        book.add(fields).expect("fixture contact is valid");
    }
    book
}

/// Names of the given contacts, in order.
pub fn full_names<'a>(contacts: impl IntoIterator<Item = &'a console_records::Contact>) -> Vec<String> {
    contacts.into_iter().map(|c| c.full_name()).collect()
}
