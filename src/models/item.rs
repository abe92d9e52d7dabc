//! Item models
//!
//! A list holds one of two item shapes depending on its kind: plain checklist
//! entries, or priced entries that also carry a category. The two shapes are
//! separate structs so a simple list's items can never acquire a price.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::ItemId;
use super::money::Money;

/// A plain checklist entry (simple lists)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleItem {
    /// Unique identifier within the list
    pub id: ItemId,

    /// Display text
    pub name: String,

    /// How many to buy (always >= 1)
    pub quantity: u32,

    /// Whether the item has been checked off
    #[serde(default)]
    pub completed: bool,
}

impl SimpleItem {
    /// Create a new unchecked item
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            quantity,
            completed: false,
        }
    }
}

/// A priced, categorized entry (complex lists)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedItem {
    /// Unique identifier within the list
    pub id: ItemId,

    /// Display text
    pub name: String,

    /// How many to buy (always >= 1)
    pub quantity: u32,

    /// Whether the item has been checked off
    #[serde(default)]
    pub completed: bool,

    /// Item category
    #[serde(default)]
    pub category: Category,

    /// Unit price in centavos
    pub price: Money,
}

impl PricedItem {
    /// Create a new unchecked priced item
    pub fn new(name: impl Into<String>, quantity: u32, category: Category, price: Money) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            quantity,
            completed: false,
            category,
            price,
        }
    }

    /// Line total: unit price times quantity
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_simple_item_is_unchecked() {
        let item = SimpleItem::new("Huevos", 12);
        assert_eq!(item.name, "Huevos");
        assert_eq!(item.quantity, 12);
        assert!(!item.completed);
    }

    #[test]
    fn test_line_total() {
        let item = PricedItem::new("Leche", 2, Category::Dairy, Money::from_pesos(50));
        assert_eq!(item.line_total(), Money::from_pesos(100));
    }

    #[test]
    fn test_priced_item_serialization() {
        let item = PricedItem::new("Pan", 1, Category::Bakery, Money::from_cents(3000));
        let json = serde_json::to_string(&item).unwrap();
        let back: PricedItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }

    #[test]
    fn test_missing_category_defaults_to_other() {
        let json = format!(
            r#"{{"id":"{}","name":"Algo","quantity":1,"price":500}}"#,
            ItemId::new().as_uuid()
        );
        let item: PricedItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item.category, Category::Other);
        assert!(!item.completed);
    }
}
