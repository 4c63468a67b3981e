//! Interactive menu for the extension database.

use super::console::Console;
use super::render::{
    render_categories, render_category, render_extension, render_listing, render_statistics,
};
use crate::error::ExtensionError;
use crate::extensions::ExtensionDatabase;
use std::io::{self, BufRead, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionCommand {
    Search,
    BrowseCategory,
    ListAll,
    ShowCategories,
    ShowStatistics,
    Exit,
}

impl ExtensionCommand {
    /// Parse a menu choice code (`1` to `6`).
    pub fn parse(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Search),
            "2" => Some(Self::BrowseCategory),
            "3" => Some(Self::ListAll),
            "4" => Some(Self::ShowCategories),
            "5" => Some(Self::ShowStatistics),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

const OPTIONS: &str = "\
Choose an option:
  1. Search for a file Extension
  2. Browse by Category
  3. List all Extensions
  4. Show Categories
  5. Show Statistics
  6. Exit";

/// Drives an [`ExtensionDatabase`] from console input until exit or end of input.
pub struct ExtensionMenu<'a, R, W> {
    database: &'a ExtensionDatabase,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> ExtensionMenu<'a, R, W> {
    pub fn new(database: &'a ExtensionDatabase, console: Console<R, W>) -> Self {
        Self { database, console }
    }

    pub fn run(mut self) -> io::Result<Console<R, W>> {
        self.console.say("╔════════════════════════════════════════════════╗")?;
        self.console.say("║   File Extension Info System                   ║")?;
        self.console.say("║   Guide containing info of File Formats        ║")?;
        self.console.say("╚════════════════════════════════════════════════╝")?;

        loop {
            self.console.say(OPTIONS)?;
            let Some(choice) = self.console.read_line("\nEnter your choice (1-6): ")? else {
                break;
            };

            let Some(command) = ExtensionCommand::parse(&choice) else {
                self.console
                    .say("\nInvalid choice. Please enter a number between 1 and 6.\n")?;
                continue;
            };
            debug!(?command, "Menu command");

            match command {
                ExtensionCommand::Search => self.search()?,
                ExtensionCommand::BrowseCategory => self.browse_category()?,
                ExtensionCommand::ListAll => {
                    let text = render_listing(&self.database.list_all());
                    self.console.say(text)?;
                }
                ExtensionCommand::ShowCategories => {
                    let text = render_categories(&self.database.categories());
                    self.console.say(text)?;
                }
                ExtensionCommand::ShowStatistics => {
                    let text = render_statistics(&self.database.statistics());
                    self.console.say(text)?;
                }
                ExtensionCommand::Exit => {
                    self.console
                        .say("\nThank you for using File Extension Information System!\n")?;
                    break;
                }
            }
        }

        Ok(self.console)
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(input) = self
            .console
            .read_line("\nEnter file extension (e.g., .mp3 or .mp4 or .docx): ")?
        else {
            return Ok(());
        };
        let input = input.trim();
        if input.is_empty() {
            return self
                .console
                .say("\nInvalid input. Please enter a valid extension.\n");
        }

        match self.database.lookup(input) {
            Ok(info) => self.console.say(render_extension(info)),
            Err(ExtensionError::UnknownExtension {
                extension,
                suggestions,
            }) => {
                self.console.say(format!(
                    "\nSorry, information about '{}' is not available in this database.",
                    extension
                ))?;
                self.console.say(
                    "Would you like to search for a different extension or browse categories.\n",
                )?;

                if !suggestions.is_empty() {
                    let database = self.database;
                    self.console.say("Do you mean one of these?")?;
                    for info in suggestions.iter().filter_map(|s| database.lookup(s).ok()) {
                        self.console
                            .say(format!("  - {} ({})", info.extension, info.category))?;
                    }
                    self.console.blank()?;
                }
                Ok(())
            }
            Err(e) => self.console.say(format!("\n[!] {}\n", e)),
        }
    }

    fn browse_category(&mut self) -> io::Result<()> {
        let text = render_categories(&self.database.categories());
        self.console.say(text)?;

        let Some(category) = self.console.read_line("Enter category name: ")? else {
            return Ok(());
        };
        let category = category.trim();
        if category.is_empty() {
            return Ok(());
        }

        match self.database.list_by_category(category) {
            Ok(members) => self.console.say(render_category(category, &members)),
            Err(e) => self.console.say(format!("\n[!] {}\n", e)),
        }
    }
}
