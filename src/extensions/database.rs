//! Read-only extension database with a category index.
//!
//! The database is built once from a catalog and never changes afterwards.
//! Extensions are matched case-insensitively and a missing leading dot is
//! tolerated; category names are matched exactly.

use super::catalog;
use crate::error::{ExtensionError, ExtensionResult};
use crate::models::ExtensionInfo;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info};

/// Maximum number of suggestions offered for an unknown extension.
pub const MAX_SUGGESTIONS: usize = 3;

/// Characters (leading dot included) an extension must share with the query
/// to be suggested.
const SUGGESTION_PREFIX_LEN: usize = 3;

/// Entries filed under one category, sorted by extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing<'a> {
    pub category: &'a str,
    pub extensions: Vec<&'a ExtensionInfo>,
}

/// A category and how many extensions it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}

/// Totals over the whole database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseStatistics {
    pub total_extensions: usize,
    pub total_categories: usize,
    pub categories: Vec<CategorySummary>,
}

/// Extension database plus its secondary index from category to members.
#[derive(Debug, Clone)]
pub struct ExtensionDatabase {
    /// Entries in catalog order
    entries: Vec<ExtensionInfo>,

    /// Lowercased extension -> position in `entries`
    by_extension: HashMap<String, usize>,

    /// Category -> positions in `entries`, catalog order
    by_category: BTreeMap<String, Vec<usize>>,
}

/// Trim, lowercase and make sure the extension starts with a dot.
pub fn normalize_extension(input: &str) -> String {
    dotted_extension(input).to_lowercase()
}

/// Trim `input` and give it a leading dot, keeping its casing.
pub fn dotted_extension(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{}", trimmed)
    }
}

impl ExtensionDatabase {
    /// Build the database from the built-in catalog.
    pub fn builtin() -> Self {
        // The built-in catalog is covered by a test for unique, well-formed extensions.
        Self::from_entries(catalog::builtin_entries())
            .expect("built-in catalog has unique extensions")
    }

    /// Build the database from catalog entries.
    ///
    /// Extensions without a leading dot get one. Duplicate extensions
    /// (ignoring case) and blank extensions are rejected.
    pub fn from_entries(entries: impl IntoIterator<Item = ExtensionInfo>) -> ExtensionResult<Self> {
        let mut db = Self {
            entries: Vec::new(),
            by_extension: HashMap::new(),
            by_category: BTreeMap::new(),
        };

        for mut info in entries {
            let trimmed = info.extension.trim();
            if trimmed.trim_start_matches('.').is_empty() {
                return Err(ExtensionError::InvalidExtension(info.extension));
            }
            info.extension = if trimmed.starts_with('.') {
                trimmed.to_string()
            } else {
                format!(".{}", trimmed)
            };

            let key = normalize_extension(&info.extension);
            if db.by_extension.contains_key(&key) {
                return Err(ExtensionError::DuplicateExtension(info.extension));
            }

            let position = db.entries.len();
            db.by_extension.insert(key, position);
            db.by_category
                .entry(info.category.clone())
                .or_default()
                .push(position);
            db.entries.push(info);
        }

        info!(
            "Extension database ready: {} extensions in {} categories",
            db.entries.len(),
            db.by_category.len()
        );
        Ok(db)
    }

    /// Build the database from a JSON array of entries.
    pub fn from_json(json: &str) -> ExtensionResult<Self> {
        let entries: Vec<ExtensionInfo> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Build the database from a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> ExtensionResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "Loading extension catalog");
        Self::from_json(&json)
    }

    /// Number of extensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an extension, ignoring case and an optional leading dot.
    ///
    /// # Errors
    ///
    /// Returns `ExtensionError::UnknownExtension` carrying up to
    /// [`MAX_SUGGESTIONS`] similar extensions.
    pub fn lookup(&self, extension: &str) -> ExtensionResult<&ExtensionInfo> {
        let key = normalize_extension(extension);
        match self.by_extension.get(&key) {
            Some(&position) => Ok(&self.entries[position]),
            None => {
                let suggestions = self
                    .suggest(extension)
                    .into_iter()
                    .map(|info| info.extension.clone())
                    .collect();
                debug!(extension = %key, "Unknown extension");
                Err(ExtensionError::UnknownExtension {
                    extension: dotted_extension(extension),
                    suggestions,
                })
            }
        }
    }

    /// Extensions sharing the query's first three characters (dot included),
    /// in catalog order, at most [`MAX_SUGGESTIONS`].
    ///
    /// Queries shorter than three characters get no suggestions.
    pub fn suggest(&self, extension: &str) -> Vec<&ExtensionInfo> {
        let key = normalize_extension(extension);
        if key.chars().count() < SUGGESTION_PREFIX_LEN {
            return Vec::new();
        }
        let prefix: String = key.chars().take(SUGGESTION_PREFIX_LEN).collect();

        self.entries
            .iter()
            .filter(|info| {
                let candidate = info.extension.to_lowercase();
                candidate.chars().count() >= SUGGESTION_PREFIX_LEN
                    && candidate.starts_with(&prefix)
            })
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    /// Entries under `category` (exact, case-sensitive), sorted by extension.
    ///
    /// # Errors
    ///
    /// Returns `ExtensionError::UnknownCategory` with the known category names
    /// when nothing is filed under `category`.
    pub fn list_by_category(&self, category: &str) -> ExtensionResult<Vec<&ExtensionInfo>> {
        match self.by_category.get(category) {
            Some(positions) if !positions.is_empty() => Ok(self.sorted_members(positions)),
            _ => Err(ExtensionError::UnknownCategory {
                category: category.to_string(),
                known: self.category_names().map(str::to_string).collect(),
            }),
        }
    }

    /// Every category in alphabetical order, each with its extensions sorted.
    pub fn list_all(&self) -> Vec<CategoryListing<'_>> {
        self.by_category
            .iter()
            .map(|(category, positions)| CategoryListing {
                category: category.as_str(),
                extensions: self.sorted_members(positions),
            })
            .collect()
    }

    /// Category names in alphabetical order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.by_category.keys().map(String::as_str)
    }

    /// Categories with member counts, alphabetical by name.
    pub fn categories(&self) -> Vec<CategorySummary> {
        self.by_category
            .iter()
            .map(|(name, positions)| CategorySummary {
                name: name.clone(),
                count: positions.len(),
            })
            .collect()
    }

    pub fn statistics(&self) -> DatabaseStatistics {
        DatabaseStatistics {
            total_extensions: self.entries.len(),
            total_categories: self.by_category.len(),
            categories: self.categories(),
        }
    }

    fn sorted_members(&self, positions: &[usize]) -> Vec<&ExtensionInfo> {
        let mut members: Vec<&ExtensionInfo> =
            positions.iter().map(|&p| &self.entries[p]).collect();
        members.sort_by_key(|info| info.extension.to_lowercase());
        members
    }
}

impl Default for ExtensionDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}
