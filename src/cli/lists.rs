//! List-level CLI commands
//!
//! Implements CLI commands for creating, viewing, deleting and sharing lists.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_list_details, format_overview, share_url};
use crate::error::{CarritoError, CarritoResult};
use crate::models::{ListKind, Money};
use crate::storage::{KeyValueStore, ListRepository};

/// List subcommands
#[derive(Subcommand)]
pub enum ListsCommands {
    /// Create a new list
    Create {
        /// List name
        name: String,
        /// List kind (simple, complex)
        #[arg(short, long, default_value = "simple")]
        kind: String,
        /// Budget in DOP, complex lists only (e.g. "1000" or "1000.50")
        #[arg(short, long)]
        budget: Option<String>,
    },
    /// Show all lists
    All,
    /// Show one list in detail
    Show {
        /// List name or ID
        list: String,
    },
    /// Delete a list
    Delete {
        /// List name or ID
        list: String,
    },
    /// Print the read-only share link for a list
    Share {
        /// List name or ID
        list: String,
    },
}

/// Handle a list command
pub fn handle_lists_command<S: KeyValueStore>(
    repo: &ListRepository<S>,
    settings: &Settings,
    cmd: ListsCommands,
) -> CarritoResult<()> {
    match cmd {
        ListsCommands::Create { name, kind, budget } => {
            let kind = ListKind::parse(&kind).ok_or_else(|| {
                CarritoError::Validation(format!(
                    "Invalid list kind: '{}'. Valid kinds: simple, complex",
                    kind
                ))
            })?;

            let budget = budget
                .map(|raw| {
                    Money::parse(&raw).map_err(|e| {
                        CarritoError::Validation(format!(
                            "Invalid budget format: '{}'. Use format like '1000' or '1000.50'. Error: {}",
                            raw, e
                        ))
                    })
                })
                .transpose()?;

            let list = repo.create(&name, kind, budget)?;

            println!("Created list: {}", list.name);
            println!("  Kind: {}", list.kind());
            if let Some(budget) = list.budget() {
                println!("  Budget: {}", budget);
            }
            println!("  ID: {}", list.id.as_uuid());
        }

        ListsCommands::All => {
            print!("{}", format_overview(&repo.list_all()));
        }

        ListsCommands::Show { list } => {
            let found = repo
                .find(&list)
                .ok_or_else(|| CarritoError::list_not_found(&list))?;
            print!("{}", format_list_details(&found));
        }

        ListsCommands::Delete { list } => {
            // Resolve first so a name typo reports not-found instead of
            // silently deleting nothing
            let found = repo
                .find(&list)
                .ok_or_else(|| CarritoError::list_not_found(&list))?;
            repo.delete(found.id)?;
            println!("Deleted list: {}", found.name);
        }

        ListsCommands::Share { list } => {
            let found = repo
                .find(&list)
                .ok_or_else(|| CarritoError::list_not_found(&list))?;
            println!("{}", share_url(&settings.share_base_url, &found));
        }
    }

    Ok(())
}
