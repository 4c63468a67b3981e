//! Text rendering for contacts and extensions.

use crate::extensions::{CategoryListing, CategorySummary, DatabaseStatistics};
use crate::models::{Contact, ExtensionInfo};
use chrono::NaiveDate;
use std::fmt::Write;

/// How much of a contact to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFormat {
    /// Every field plus the derived age, framed by rules
    Full,
    /// A single `[id] name | mobile | email` line
    Brief,
}

fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Render a contact; `today` is used for the age.
pub fn render_contact(contact: &Contact, format: DisplayFormat, today: NaiveDate) -> String {
    match format {
        DisplayFormat::Brief => format!(
            "[{}] {:<25} | {:<12} | {}",
            contact.id(),
            contact.full_name(),
            contact.mobile(),
            contact.email()
        ),
        DisplayFormat::Full => {
            let mut out = String::new();
            let border = rule('═', 60);
            let _ = writeln!(out, "{}", border);
            let _ = writeln!(out, "Contact ID: {}", contact.id());
            let _ = writeln!(out, "Name: {}", contact.full_name());
            let _ = writeln!(out, "Company: {}", contact.company());
            let _ = writeln!(out, "Mobile: {}", contact.mobile());
            let _ = writeln!(out, "Email: {}", contact.email());
            let _ = writeln!(out, "Birthdate: {}", contact.birthdate().format("%d %b %Y"));
            let _ = writeln!(out, "Age: {} years", contact.age_on(today));
            out.push_str(&border);
            out
        }
    }
}

/// Render the full contact listing as a table.
pub fn render_contact_table(contacts: &[&Contact]) -> String {
    let mut out = String::new();
    let border = rule('═', 80);
    let _ = writeln!(out, "{}", border);
    let _ = writeln!(out, "  All Contacts ({} total)", contacts.len());
    let _ = writeln!(out, "{}", border);
    let _ = writeln!(out, "{:<5} {:<25} {:<12} Email", "ID", "Name", "Mobile");
    let _ = writeln!(out, "{}", rule('─', 80));
    for contact in contacts {
        let _ = writeln!(
            out,
            "{:<5} {:<25} {:<12} {}",
            contact.id().to_string(),
            contact.full_name(),
            contact.mobile(),
            contact.email()
        );
    }
    out.push_str(&border);
    out
}

pub fn render_extension(info: &ExtensionInfo) -> String {
    let mut out = String::new();
    let border = rule('=', 50);
    let _ = writeln!(out, "{}", border);
    let _ = writeln!(out, "Extension: {}", info.extension);
    let _ = writeln!(out, "Category: {}", info.category);
    let _ = writeln!(out, "Description: {}", info.description);
    let _ = writeln!(out, "Common Use: {}", info.common_use);
    let _ = writeln!(
        out,
        "Associated Applications: {}",
        info.applications.join(", ")
    );
    out.push_str(&border);
    out
}

pub fn render_category(category: &str, members: &[&ExtensionInfo]) -> String {
    let mut out = format!("=== {} File Extensions ===\n", category);
    for info in members {
        let _ = writeln!(out, "{} - {}", info.extension, info.description);
    }
    out
}

pub fn render_listing(listings: &[CategoryListing<'_>]) -> String {
    let mut out = String::from("=== All Supported File Extensions ===\n");
    for listing in listings {
        let _ = writeln!(out, "\n{}:", listing.category);
        for info in &listing.extensions {
            let _ = writeln!(out, "  {}", info.extension);
        }
    }
    out
}

pub fn render_categories(categories: &[CategorySummary]) -> String {
    let mut out = String::from("=== Available Categories ===\n");
    for summary in categories {
        let _ = writeln!(out, "  {} ({} extensions)", summary.name, summary.count);
    }
    out
}

pub fn render_statistics(stats: &DatabaseStatistics) -> String {
    let mut out = String::from("=== Database Statistics ===\n");
    let _ = writeln!(out, "Total Extensions: {}", stats.total_extensions);
    let _ = writeln!(out, "Total Categories: {}", stats.total_categories);
    out.push_str("\nBreakdown by Category:\n");
    for summary in &stats.categories {
        let _ = writeln!(out, "  {}: {} extensions", summary.name, summary.count);
    }
    out
}
