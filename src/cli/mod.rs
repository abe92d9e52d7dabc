//! CLI command definitions and handlers

pub mod items;
pub mod lists;

pub use items::{handle_item_command, ItemCommands};
pub use lists::{handle_lists_command, ListsCommands};
