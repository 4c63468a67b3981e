//! Console presentation layer.
//!
//! Menus read choices and field values through a [`Console`], call into the
//! stores, and render the results as text. They hold no state of their own
//! beyond the store they drive.

pub mod console;
pub mod contact_menu;
pub mod extension_menu;
pub mod render;

pub use console::Console;
pub use contact_menu::{ContactCommand, ContactMenu};
pub use extension_menu::{ExtensionCommand, ExtensionMenu};
pub use render::DisplayFormat;
