//! Scripted sessions against the contact and extension menus.
//!
//! Each test feeds a fixed script of lines through the console and checks
//! both the printed output and the resulting store state.

use console_records::cli::{Console, ContactMenu, ExtensionMenu};
use console_records::domain::ContactId;
use console_records::{ContactBook, ExtensionDatabase};
use std::io::Cursor;

mod fixtures;
use fixtures::*;

fn run_contacts(book: &mut ContactBook, script: &str) -> String {
    let console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let console = ContactMenu::new(book, console).run().unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

fn run_extensions(db: &ExtensionDatabase, script: &str) -> String {
    let console = Console::new(Cursor::new(script.to_string()), Vec::new());
    let console = ExtensionMenu::new(db, console).run().unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_add_contact_session() {
    let mut book = ContactBook::new();
    let out = run_contacts(
        &mut book,
        "1\nNiamh\nCollins\nArt Gallery Dublin\n874 567 890\nniamh.collins@artgallery.ie\n28/01/1990\n0\n",
    );

    assert!(out.contains("[✓] Contact added successfully with ID 1."));
    assert!(out.contains("Goodbye!"));
    let contact = book.get(ContactId::FIRST).unwrap();
    assert_eq!(contact.full_name(), "Niamh Collins");
    assert_eq!(contact.birthdate(), date(1990, 1, 28));
}

#[test]
fn test_add_contact_with_bad_date_is_not_added() {
    let mut book = ContactBook::new();
    let out = run_contacts(
        &mut book,
        "1\nNiamh\nCollins\n\n874567890\nniamh@artgallery.ie\nsometime\n0\n",
    );

    assert!(out.contains("Invalid date format. Contact not added."));
    assert!(book.is_empty());
    assert_eq!(book.next_id(), ContactId::FIRST);
}

#[test]
fn test_add_contact_with_invalid_mobile_reports_error() {
    let mut book = ContactBook::new();
    let out = run_contacts(
        &mut book,
        "1\nNiamh\nCollins\n\n074567890\nniamh@artgallery.ie\n28/01/1990\n0\n",
    );

    assert!(out.contains("[!] Error adding contact: Mobile number must be 9 digits"));
    assert!(book.is_empty());
}

#[test]
fn test_list_and_show_details() {
    let mut book = book_with_three();
    let out = run_contacts(&mut book, "2\n3\n2\n3\nsarah\n3\nzzz\n0\n");

    assert!(out.contains("All Contacts (3 total)"));
    assert!(out.contains("Contact ID: 2"));
    assert!(out.contains("Name: Sarah O'Connor"));
    assert!(out.contains("No contacts found matching 'zzz'"));
}

#[test]
fn test_show_details_with_several_matches_uses_brief_lines() {
    let mut book = book_with_three();
    let out = run_contacts(&mut book, "3\na\n0\n");

    assert!(out.contains("Found 3 contacts matching 'a'"));
    assert!(out.contains("[1] Emily Blackwell"));
    assert!(out.contains("[3] Sarah O'Connor"));
}

#[test]
fn test_update_session() {
    let mut book = book_with_three();
    let out = run_contacts(&mut book, "4\n1\n3\nNew Company\n4\n1\n5\nbroken\n0\n");

    assert!(out.contains("[✓] Company updated successfully."));
    assert!(out.contains("[!] Error updating contact: Invalid email format"));
    let contact = book.get(ContactId::FIRST).unwrap();
    assert_eq!(contact.company(), "New Company");
    assert_eq!(contact.email(), "emily.blackwell@dbs.ie");
}

#[test]
fn test_update_unknown_id_and_cancel() {
    let mut book = book_with_three();
    let out = run_contacts(&mut book, "4\n99\n4\n2\n0\n4\nabc\n0\n");

    assert!(out.contains("Contact with ID 99 not found"));
    assert!(out.contains("[i] Update cancelled."));
    assert!(out.contains("[!] Invalid ID format."));
}

#[test]
fn test_delete_requires_yes() {
    let mut book = book_with_three();
    let out = run_contacts(&mut book, "5\n2\nno\n5\n2\nY\n0\n");

    assert!(out.contains("[i] Deletion cancelled."));
    assert!(out.contains("[✓] Contact deleted successfully."));
    assert_eq!(book.len(), 2);
    assert!(!book.exists(ContactId::new(2)));
}

#[test]
fn test_search_session_and_invalid_choice() {
    let mut book = book_with_three();
    let out = run_contacts(&mut book, "9\n6\ntechcorp\n");

    assert!(out.contains("Invalid choice. Please select 0-6."));
    assert!(out.contains("Found 1 contact(s)"));
    assert!(out.contains("[2] James Murphy"));
}

#[test]
fn test_extension_search_session() {
    let db = ExtensionDatabase::builtin();
    let out = run_extensions(&db, "1\nMKV\n1\n.mkx\n1\nxyz\n6\n");

    assert!(out.contains("Extension: .mkv"));
    assert!(out.contains("information about '.mkx' is not available"));
    assert!(out.contains("  - .mkv (Video)"));
    assert!(out.contains("information about '.xyz' is not available"));
    assert!(out.contains("Thank you for using File Extension Information System!"));
}

#[test]
fn test_unknown_extension_echoes_input_casing() {
    let db = ExtensionDatabase::builtin();
    let out = run_extensions(&db, "1\nMPX\n6\n");

    assert!(out.contains("information about '.MPX' is not available"));
    assert!(out.contains("  - .mp4 (Video)\n  - .mp3 (Audio)"));
}

#[test]
fn test_extension_browse_and_statistics_session() {
    let db = ExtensionDatabase::builtin();
    let out = run_extensions(&db, "2\nCompressed\n2\nvideo\n4\n5\n3\n");

    assert!(out.contains("=== Compressed File Extensions ==="));
    assert!(out.contains(".rar - RAR Archive"));
    assert!(out.contains("Category 'video' not found."));
    assert!(out.contains("  Video (5 extensions)"));
    assert!(out.contains("Total Extensions: 25"));
    assert!(out.contains("=== All Supported File Extensions ==="));
}
