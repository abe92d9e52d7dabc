//! List display formatting
//!
//! Formats lists for terminal output in overview and detail views, mirroring
//! what the presentation layer shows: item counts and budgets on the
//! overview, checkboxes, prices and the budget progress bar on the detail
//! view.

use crate::models::{ListBody, ShoppingList};

use super::format::{format_date, format_price};

const PROGRESS_WIDTH: usize = 20;

/// Format the collection overview, one block per list
pub fn format_overview(lists: &[ShoppingList]) -> String {
    if lists.is_empty() {
        return "No lists yet. Create one with `carrito create`.\n".to_string();
    }

    let mut output = String::new();
    for list in lists {
        output.push_str(&format!("{}  ({})\n", list.name, list.id));
        output.push_str(&format!(
            "  {} items  |  {}\n",
            list.item_count(),
            list.kind()
        ));
        if let Some(budget) = list.budget() {
            output.push_str(&format!("  Presupuesto: {}\n", format_price(budget)));
        }
        output.push_str(&format!("  Creada: {}\n\n", format_date(list.created_at)));
    }
    output
}

/// Format a single list in full detail
pub fn format_list_details(list: &ShoppingList) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}  ({})\n", list.name, list.kind()));
    output.push_str(&format!("Creada: {}\n\n", format_date(list.created_at)));

    match &list.body {
        ListBody::Simple { items } => {
            if items.is_empty() {
                output.push_str("No items.\n");
            }
            for (pos, item) in items.iter().enumerate() {
                let mark = if item.completed { "x" } else { " " };
                output.push_str(&format!(
                    "{:>3}. [{}] {}  x{}\n",
                    pos + 1,
                    mark,
                    item.name,
                    item.quantity
                ));
            }
        }
        ListBody::Complex { items, .. } => {
            if items.is_empty() {
                output.push_str("No items.\n");
            }
            for (pos, item) in items.iter().enumerate() {
                let mark = if item.completed { "x" } else { " " };
                output.push_str(&format!(
                    "{:>3}. [{}] {}  x{}  {}  ({}, total {})\n",
                    pos + 1,
                    mark,
                    item.name,
                    item.quantity,
                    item.category,
                    format_price(item.price),
                    format_price(item.line_total()),
                ));
            }

            output.push('\n');
            output.push_str(&format!(
                "Presupuesto: {}\n",
                format_price(list.budget().unwrap_or_default())
            ));
            if let Some(total) = list.total_spend() {
                output.push_str(&format!("Total:       {}\n", format_price(total)));
            }
            if let Some(remaining) = list.budget_remaining() {
                output.push_str(&format!("Disponible:  {}\n", format_price(remaining)));
            }
            output.push_str(&format!("{}\n", progress_bar(list.progress_ratio())));
        }
    }

    output
}

/// Read-only share URL for a list
pub fn share_url(base: &str, list: &ShoppingList) -> String {
    format!("{}/shared/{}", base.trim_end_matches('/'), list.id.as_uuid())
}

fn progress_bar(ratio: f64) -> String {
    let filled = (ratio * PROGRESS_WIDTH as f64).round() as usize;
    let filled = filled.min(PROGRESS_WIDTH);
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        ratio * 100.0
    )
}
