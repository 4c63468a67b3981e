//! Data models for contacts and file extensions.

pub mod contact;
pub mod extension;

pub use contact::{Contact, ContactField, NewContact};
pub use extension::ExtensionInfo;
