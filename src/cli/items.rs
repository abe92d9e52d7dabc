//! Item-level CLI commands
//!
//! Each handler loads the list, applies a pure domain mutation, and persists
//! the new snapshot. Rejected input (blank name, non-positive price, unknown
//! item) leaves the snapshot unchanged; the handlers detect that and tell the
//! user instead of writing a no-op back to the store.

use clap::Subcommand;

use crate::display::format_list_details;
use crate::error::{CarritoError, CarritoResult};
use crate::models::{Category, ItemId, ListKind, Money, ShoppingList};
use crate::storage::{KeyValueStore, ListRepository};

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add an item to a list
    Add {
        /// List name or ID
        list: String,
        /// Item name
        name: String,
        /// Quantity (defaults to 1)
        #[arg(short, long)]
        quantity: Option<u32>,
        /// Category, complex lists only (e.g. "Lácteos" or "dairy")
        #[arg(short, long)]
        category: Option<String>,
        /// Unit price in DOP, required for complex lists
        #[arg(short, long)]
        price: Option<String>,
    },
    /// Toggle an item's completed state
    Toggle {
        /// List name or ID
        list: String,
        /// Item position (1-based), name, or ID
        item: String,
    },
    /// Remove an item from a list
    Remove {
        /// List name or ID
        list: String,
        /// Item position (1-based), name, or ID
        item: String,
    },
    /// Set an item's quantity
    Qty {
        /// List name or ID
        list: String,
        /// Item position (1-based), name, or ID
        item: String,
        /// New quantity (must be at least 1)
        quantity: u32,
    },
    /// Set an item's unit price (complex lists)
    Price {
        /// List name or ID
        list: String,
        /// Item position (1-based), name, or ID
        item: String,
        /// New unit price in DOP
        price: String,
    },
    /// Set the list's budget (complex lists)
    Budget {
        /// List name or ID
        list: String,
        /// New budget in DOP
        budget: String,
    },
}

/// Handle an item command
pub fn handle_item_command<S: KeyValueStore>(
    repo: &ListRepository<S>,
    cmd: ItemCommands,
) -> CarritoResult<()> {
    match cmd {
        ItemCommands::Add {
            list,
            name,
            quantity,
            category,
            price,
        } => {
            let found = find_list(repo, &list)?;

            let updated = match found.kind() {
                ListKind::Simple => found.add_item(&name, quantity),
                ListKind::Complex => {
                    let price = price.ok_or_else(|| {
                        CarritoError::Validation(
                            "Items on a complex list need a price (--price)".into(),
                        )
                    })?;
                    let price = parse_money(&price, "price")?;

                    let category = match category {
                        Some(raw) => Category::parse(&raw).ok_or_else(|| {
                            CarritoError::Validation(format!(
                                "Invalid category: '{}'. Valid categories: {}",
                                raw,
                                category_names()
                            ))
                        })?,
                        None => Category::default(),
                    };

                    found.add_priced_item(&name, quantity, category, price)
                }
            };

            apply(repo, &found, updated)
        }

        ItemCommands::Toggle { list, item } => {
            let found = find_list(repo, &list)?;
            let id = resolve_item(&found, &item)?;
            apply(repo, &found, found.toggle_item(id))
        }

        ItemCommands::Remove { list, item } => {
            let found = find_list(repo, &list)?;
            let id = resolve_item(&found, &item)?;
            apply(repo, &found, found.remove_item(id))
        }

        ItemCommands::Qty {
            list,
            item,
            quantity,
        } => {
            let found = find_list(repo, &list)?;
            let id = resolve_item(&found, &item)?;
            apply(repo, &found, found.set_quantity(id, quantity))
        }

        ItemCommands::Price { list, item, price } => {
            let found = find_list(repo, &list)?;
            let id = resolve_item(&found, &item)?;
            let price = parse_money(&price, "price")?;
            apply(repo, &found, found.set_price(id, price))
        }

        ItemCommands::Budget { list, budget } => {
            let found = find_list(repo, &list)?;
            let budget = parse_money(&budget, "budget")?;
            apply(repo, &found, found.set_budget(budget))
        }
    }
}

fn find_list<S: KeyValueStore>(
    repo: &ListRepository<S>,
    query: &str,
) -> CarritoResult<ShoppingList> {
    repo.find(query)
        .ok_or_else(|| CarritoError::list_not_found(query))
}

/// Resolve an item selector: 1-based position, full ID, or name
fn resolve_item(list: &ShoppingList, selector: &str) -> CarritoResult<ItemId> {
    if let Ok(pos) = selector.parse::<usize>() {
        if pos >= 1 {
            if let Some(id) = list.item_id_at(pos - 1) {
                return Ok(id);
            }
        }
    }

    if let Ok(id) = selector.parse::<ItemId>() {
        return Ok(id);
    }

    list.item_id_by_name(selector)
        .ok_or_else(|| CarritoError::item_not_found(selector))
}

fn parse_money(raw: &str, what: &str) -> CarritoResult<Money> {
    Money::parse(raw).map_err(|e| {
        CarritoError::Validation(format!(
            "Invalid {} format: '{}'. Use format like '50' or '50.25'. Error: {}",
            what, raw, e
        ))
    })
}

/// Persist and print the updated snapshot, or report a rejected mutation
fn apply<S: KeyValueStore>(
    repo: &ListRepository<S>,
    before: &ShoppingList,
    after: ShoppingList,
) -> CarritoResult<()> {
    if after == *before {
        println!("No change: the operation was rejected or matched nothing.");
        return Ok(());
    }

    repo.update(&after)?;
    print!("{}", format_list_details(&after));
    Ok(())
}

fn category_names() -> String {
    Category::ALL
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_item_by_position_and_name() {
        let list = ShoppingList::new("Colmado", ListKind::Simple, None)
            .add_item("Arroz", Some(1))
            .add_item("Café", Some(2));

        let first = list.item_id_at(0).unwrap();
        assert_eq!(resolve_item(&list, "1").unwrap(), first);
        assert_eq!(resolve_item(&list, "café").unwrap(), list.item_id_at(1).unwrap());
        assert_eq!(
            resolve_item(&list, &first.as_uuid().to_string()).unwrap(),
            first
        );
        assert!(resolve_item(&list, "pan").is_err());
        assert!(resolve_item(&list, "0").is_err());
    }

    #[test]
    fn test_parse_money_error_names_field() {
        let err = parse_money("abc", "budget").unwrap_err();
        assert!(err.to_string().contains("budget"));
    }
}
