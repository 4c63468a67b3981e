//! Interactive menu for the contact book.

use super::console::Console;
use super::render::{render_contact, render_contact_table, DisplayFormat};
use crate::contacts::{Confirmation, ContactBook, DeleteOutcome};
use crate::domain::{parse_date, today, ContactId};
use crate::models::{ContactField, NewContact};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactCommand {
    Add,
    ListAll,
    ShowDetails,
    Update,
    Delete,
    Search,
    Exit,
}

impl ContactCommand {
    /// Parse a menu choice code (`0` to `6`).
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::ListAll),
            "3" => Some(Self::ShowDetails),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Search),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

const MAIN_MENU: &str = "\
─────────────────────────────────────────────────
                   Main Menu
─────────────────────────────────────────────────
  1: Add Contact
  2: Show All Contacts
  3: Show Contact Details
  4: Update Contact
  5: Delete Contact
  6: Search Contacts
  0: Exit
─────────────────────────────────────────────────";

/// Drives a [`ContactBook`] from console input until exit or end of input.
pub struct ContactMenu<'a, R, W> {
    book: &'a mut ContactBook,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> ContactMenu<'a, R, W> {
    pub fn new(book: &'a mut ContactBook, console: Console<R, W>) -> Self {
        Self { book, console }
    }

    /// Run the menu loop. Operation failures are reported and the loop goes on;
    /// only I/O errors end it early.
    pub fn run(mut self) -> io::Result<Console<R, W>> {
        self.console.say("╔════════════════════════════════════════════════╗")?;
        self.console.say("║       Phone Contact Book Application           ║")?;
        self.console.say("╚════════════════════════════════════════════════╝")?;

        loop {
            self.console.say(MAIN_MENU)?;
            let Some(choice) = self.console.read_line("Enter your choice: ")? else {
                break;
            };

            let Some(command) = ContactCommand::parse(&choice) else {
                self.console.say("\n[!] Invalid choice. Please select 0-6.\n")?;
                continue;
            };
            debug!(?command, "Menu command");

            match command {
                ContactCommand::Add => self.add_contact()?,
                ContactCommand::ListAll => self.list_all()?,
                ContactCommand::ShowDetails => self.show_details()?,
                ContactCommand::Update => self.update_contact()?,
                ContactCommand::Delete => self.delete_contact()?,
                ContactCommand::Search => self.search()?,
                ContactCommand::Exit => {
                    self.console
                        .say("\n[✓] Thank you for using Contact Book. Goodbye!\n")?;
                    break;
                }
            }
        }

        Ok(self.console)
    }

    fn read_id(&mut self, prompt: &str) -> io::Result<Option<ContactId>> {
        let Some(raw) = self.console.read_line(prompt)? else {
            return Ok(None);
        };
        match raw.parse::<ContactId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.console.say("\n[!] Invalid ID format.\n")?;
                Ok(None)
            }
        }
    }

    fn add_contact(&mut self) -> io::Result<()> {
        self.console.say("\n═══ Add New Contact ═══\n")?;

        let prompts = [
            "First Name: ",
            "Last Name: ",
            "Company: ",
            "Mobile Number (9 digits, no leading zero): ",
            "Email: ",
            "Birthdate (dd/mm/yyyy): ",
        ];
        let mut answers = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            match self.console.read_line(prompt)? {
                Some(answer) => answers.push(answer),
                None => return Ok(()),
            }
        }

        let Some(birthdate) = parse_date(&answers[5]) else {
            self.console
                .say("\n[!] Invalid date format. Contact not added.\n")?;
            return Ok(());
        };

        let mut answers = answers.into_iter();
        let mut next = || answers.next().unwrap_or_default();
        let fields = NewContact::new(next(), next(), next(), next(), next(), birthdate);

        match self.book.add(fields) {
            Ok(id) => self
                .console
                .say(format!("\n[✓] Contact added successfully with ID {}.\n", id)),
            Err(e) => self
                .console
                .say(format!("\n[!] Error adding contact: {}\n", e)),
        }
    }

    fn list_all(&mut self) -> io::Result<()> {
        if self.book.is_empty() {
            return self.console.say("\n[!] No contacts available.\n");
        }
        let table = render_contact_table(&self.book.list_sorted());
        self.console.say(table)
    }

    fn show_details(&mut self) -> io::Result<()> {
        let Some(query) = self.console.read_line("\nEnter Contact ID or name: ")? else {
            return Ok(());
        };
        let query = query.trim();
        let today = today();

        if let Ok(id) = query.parse::<ContactId>() {
            return match self.book.get(id) {
                Ok(contact) => {
                    let text = render_contact(contact, DisplayFormat::Full, today);
                    self.console.say(text)
                }
                Err(e) => self.console.say(format!("\n[!] {}.\n", e)),
            };
        }

        let matches = self.book.find_by_name(query);
        match matches.as_slice() {
            [] => self
                .console
                .say(format!("\n[!] No contacts found matching '{}'.\n", query)),
            [only] => {
                let text = render_contact(only, DisplayFormat::Full, today);
                self.console.say(text)
            }
            many => {
                let mut text = format!(
                    "\n[i] Found {} contacts matching '{}':",
                    many.len(),
                    query
                );
                for contact in many {
                    text.push('\n');
                    text.push_str(&render_contact(contact, DisplayFormat::Brief, today));
                }
                self.console.say(text)
            }
        }
    }

    fn update_contact(&mut self) -> io::Result<()> {
        let Some(id) = self.read_id("\nEnter Contact ID to update: ")? else {
            return Ok(());
        };
        let current = match self.book.get(id) {
            Ok(contact) => render_contact(contact, DisplayFormat::Full, today()),
            Err(e) => return self.console.say(format!("\n[!] {}.\n", e)),
        };

        self.console.say("\nCurrent contact details:")?;
        self.console.say(current)?;
        self.console.say("What would you like to update?")?;
        for (n, field) in ContactField::ALL.iter().enumerate() {
            self.console.say(format!("  {}. {}", n + 1, field.label()))?;
        }
        self.console.say("  0. Cancel")?;

        let Some(choice) = self.console.read_line("\nEnter choice: ")? else {
            return Ok(());
        };
        let field = match choice.trim() {
            "0" => return self.console.say("[i] Update cancelled."),
            other => match other
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|n| ContactField::ALL.get(n))
            {
                Some(field) => *field,
                None => return self.console.say("[!] Invalid choice."),
            },
        };

        let prompt = match field {
            ContactField::Mobile => "Enter new Mobile Number (9 digits): ".to_string(),
            ContactField::Birthdate => "Enter new Birthdate (dd/mm/yyyy): ".to_string(),
            other => format!("Enter new {}: ", other.label()),
        };
        let Some(value) = self.console.read_line(&prompt)? else {
            return Ok(());
        };

        match self.book.update(id, field, &value) {
            Ok(()) => self
                .console
                .say(format!("[✓] {} updated successfully.", field.label())),
            Err(e) => self
                .console
                .say(format!("[!] Error updating contact: {}", e)),
        }
    }

    fn delete_contact(&mut self) -> io::Result<()> {
        let Some(id) = self.read_id("\nEnter Contact ID to delete: ")? else {
            return Ok(());
        };
        let summary = match self.book.get(id) {
            Ok(contact) => render_contact(contact, DisplayFormat::Brief, today()),
            Err(e) => return self.console.say(format!("\n[!] {}.\n", e)),
        };

        self.console.say("\nContact to be deleted:")?;
        self.console.say(summary)?;
        let reply = self
            .console
            .read_line("\nAre you sure you want to delete this contact? (yes/no): ")?
            .unwrap_or_default();
        let answer = Confirmation::from_reply(&reply);

        match self.book.delete(id, |_| answer) {
            Ok(DeleteOutcome::Deleted(_)) => {
                self.console.say("[✓] Contact deleted successfully.\n")
            }
            Ok(DeleteOutcome::Cancelled) => self.console.say("[i] Deletion cancelled.\n"),
            Err(e) => self.console.say(format!("\n[!] {}.\n", e)),
        }
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(term) = self
            .console
            .read_line("\nSearch by name, company or email: ")?
        else {
            return Ok(());
        };
        let term = term.trim();
        let results = self.book.search(term);

        if results.is_empty() {
            return self
                .console
                .say(format!("\n[!] No contacts found matching '{}'.\n", term));
        }

        let today = today();
        let mut text = format!("\n[i] Found {} contact(s):\n", results.len());
        for contact in results {
            text.push('\n');
            text.push_str(&render_contact(contact, DisplayFormat::Brief, today));
        }
        self.console.say(text)
    }
}
