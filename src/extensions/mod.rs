//! File extension lookup: the built-in catalog and the read-only database
//! indexed by extension and by category.

pub mod catalog;
pub mod database;

pub use database::{
    dotted_extension, normalize_extension, CategoryListing, CategorySummary, DatabaseStatistics,
    ExtensionDatabase, MAX_SUGGESTIONS,
};
