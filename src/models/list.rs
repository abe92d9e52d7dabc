//! Shopping list model and its mutation/aggregation rules
//!
//! A list is either simple (plain checklist) or complex (priced, categorized
//! items with an optional budget). The kind is fixed at creation and encoded
//! as a tagged variant, so the two item shapes cannot mix and a budget can
//! only exist on a complex list.
//!
//! Every mutation borrows the snapshot and returns a new one; nothing is
//! modified in place. Rejected input (blank name, non-positive price or
//! budget, zero quantity) and unknown ids are no-ops that return an unchanged
//! clone rather than errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{ItemId, ListId};
use super::item::{PricedItem, SimpleItem};
use super::money::Money;

/// Classification of a list, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// Plain checklist
    #[default]
    Simple,
    /// Priced items with budget tracking
    Complex,
}

impl ListKind {
    /// Parse a list kind from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Some(Self::Simple),
            "complex" | "compleja" => Some(Self::Complex),
            _ => None,
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "Simple"),
            Self::Complex => write!(f, "Compleja"),
        }
    }
}

/// The kind-dependent part of a list: its items, plus the budget for
/// complex lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListBody {
    /// Plain checklist entries
    Simple { items: Vec<SimpleItem> },
    /// Priced entries with an optional spend ceiling
    Complex {
        items: Vec<PricedItem>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        budget: Option<Money>,
    },
}

/// A shopping list snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Unique identifier
    pub id: ListId,

    /// Display name
    pub name: String,

    /// Items and, for complex lists, the budget
    #[serde(flatten)]
    pub body: ListBody,

    /// When the list was created
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Quantity defaults to 1 when unspecified or invalid (zero)
fn effective_quantity(quantity: Option<u32>) -> u32 {
    quantity.filter(|q| *q >= 1).unwrap_or(1)
}

impl ShoppingList {
    /// Create a new empty list
    ///
    /// The budget is honored only for complex lists and only when it is not
    /// negative; it is dropped otherwise.
    pub fn new(name: impl Into<String>, kind: ListKind, budget: Option<Money>) -> Self {
        let body = match kind {
            ListKind::Simple => ListBody::Simple { items: Vec::new() },
            ListKind::Complex => ListBody::Complex {
                items: Vec::new(),
                budget: budget.filter(|b| !b.is_negative()),
            },
        };

        Self {
            id: ListId::new(),
            name: name.into(),
            body,
            created_at: Utc::now(),
        }
    }

    /// The list's kind
    pub fn kind(&self) -> ListKind {
        match self.body {
            ListBody::Simple { .. } => ListKind::Simple,
            ListBody::Complex { .. } => ListKind::Complex,
        }
    }

    /// Number of items on the list
    pub fn item_count(&self) -> usize {
        match &self.body {
            ListBody::Simple { items } => items.len(),
            ListBody::Complex { items, .. } => items.len(),
        }
    }

    /// The budget, if this is a complex list with one set
    pub fn budget(&self) -> Option<Money> {
        match &self.body {
            ListBody::Simple { .. } => None,
            ListBody::Complex { budget, .. } => *budget,
        }
    }

    /// Id of the item at a zero-based position, regardless of kind
    pub fn item_id_at(&self, index: usize) -> Option<ItemId> {
        match &self.body {
            ListBody::Simple { items } => items.get(index).map(|i| i.id),
            ListBody::Complex { items, .. } => items.get(index).map(|i| i.id),
        }
    }

    /// Id of the first item whose name matches (case-insensitive)
    pub fn item_id_by_name(&self, name: &str) -> Option<ItemId> {
        let wanted = name.trim().to_lowercase();
        match &self.body {
            ListBody::Simple { items } => items
                .iter()
                .find(|i| i.name.to_lowercase() == wanted)
                .map(|i| i.id),
            ListBody::Complex { items, .. } => items
                .iter()
                .find(|i| i.name.to_lowercase() == wanted)
                .map(|i| i.id),
        }
    }

    fn with_body(&self, body: ListBody) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            body,
            created_at: self.created_at,
        }
    }

    /// Append a plain item (simple lists)
    ///
    /// Rejected (unchanged snapshot) when the name is blank or the list is
    /// complex — priced items need a price, see [`Self::add_priced_item`].
    /// A missing or zero quantity defaults to 1.
    pub fn add_item(&self, name: &str, quantity: Option<u32>) -> Self {
        let name = name.trim();
        if name.is_empty() {
            return self.clone();
        }

        match &self.body {
            ListBody::Simple { items } => {
                let mut items = items.clone();
                items.push(SimpleItem::new(name, effective_quantity(quantity)));
                self.with_body(ListBody::Simple { items })
            }
            ListBody::Complex { .. } => self.clone(),
        }
    }

    /// Append a priced item (complex lists)
    ///
    /// Rejected when the name is blank, the price is not positive, or the
    /// list is simple. A missing or zero quantity defaults to 1.
    pub fn add_priced_item(
        &self,
        name: &str,
        quantity: Option<u32>,
        category: Category,
        price: Money,
    ) -> Self {
        let name = name.trim();
        if name.is_empty() || !price.is_positive() {
            return self.clone();
        }

        match &self.body {
            ListBody::Complex { items, budget } => {
                let mut items = items.clone();
                items.push(PricedItem::new(
                    name,
                    effective_quantity(quantity),
                    category,
                    price,
                ));
                self.with_body(ListBody::Complex {
                    items,
                    budget: *budget,
                })
            }
            ListBody::Simple { .. } => self.clone(),
        }
    }

    /// Flip an item's completed flag; unknown ids are a no-op
    pub fn toggle_item(&self, id: ItemId) -> Self {
        match &self.body {
            ListBody::Simple { items } => {
                let items = items
                    .iter()
                    .cloned()
                    .map(|mut item| {
                        if item.id == id {
                            item.completed = !item.completed;
                        }
                        item
                    })
                    .collect();
                self.with_body(ListBody::Simple { items })
            }
            ListBody::Complex { items, budget } => {
                let items = items
                    .iter()
                    .cloned()
                    .map(|mut item| {
                        if item.id == id {
                            item.completed = !item.completed;
                        }
                        item
                    })
                    .collect();
                self.with_body(ListBody::Complex {
                    items,
                    budget: *budget,
                })
            }
        }
    }

    /// Drop an item; unknown ids are a no-op
    pub fn remove_item(&self, id: ItemId) -> Self {
        match &self.body {
            ListBody::Simple { items } => {
                let items = items.iter().filter(|i| i.id != id).cloned().collect();
                self.with_body(ListBody::Simple { items })
            }
            ListBody::Complex { items, budget } => {
                let items = items.iter().filter(|i| i.id != id).cloned().collect();
                self.with_body(ListBody::Complex {
                    items,
                    budget: *budget,
                })
            }
        }
    }

    /// Replace an item's quantity
    ///
    /// Zero is rejected, not clamped: the snapshot is returned unchanged.
    /// Callers decrementing past 1 therefore see no effect.
    pub fn set_quantity(&self, id: ItemId, quantity: u32) -> Self {
        if quantity == 0 {
            return self.clone();
        }

        match &self.body {
            ListBody::Simple { items } => {
                let items = items
                    .iter()
                    .cloned()
                    .map(|mut item| {
                        if item.id == id {
                            item.quantity = quantity;
                        }
                        item
                    })
                    .collect();
                self.with_body(ListBody::Simple { items })
            }
            ListBody::Complex { items, budget } => {
                let items = items
                    .iter()
                    .cloned()
                    .map(|mut item| {
                        if item.id == id {
                            item.quantity = quantity;
                        }
                        item
                    })
                    .collect();
                self.with_body(ListBody::Complex {
                    items,
                    budget: *budget,
                })
            }
        }
    }

    /// Replace an item's unit price (complex lists)
    ///
    /// Rejected when the price is not positive or the list is simple.
    pub fn set_price(&self, id: ItemId, price: Money) -> Self {
        if !price.is_positive() {
            return self.clone();
        }

        match &self.body {
            ListBody::Complex { items, budget } => {
                let items = items
                    .iter()
                    .cloned()
                    .map(|mut item| {
                        if item.id == id {
                            item.price = price;
                        }
                        item
                    })
                    .collect();
                self.with_body(ListBody::Complex {
                    items,
                    budget: *budget,
                })
            }
            ListBody::Simple { .. } => self.clone(),
        }
    }

    /// Replace the budget (complex lists)
    ///
    /// Rejected when the budget is not positive or the list is simple.
    pub fn set_budget(&self, budget: Money) -> Self {
        if !budget.is_positive() {
            return self.clone();
        }

        match &self.body {
            ListBody::Complex { items, .. } => self.with_body(ListBody::Complex {
                items: items.clone(),
                budget: Some(budget),
            }),
            ListBody::Simple { .. } => self.clone(),
        }
    }

    /// Sum of `price * quantity` over all items; `None` for simple lists
    pub fn total_spend(&self) -> Option<Money> {
        match &self.body {
            ListBody::Simple { .. } => None,
            ListBody::Complex { items, .. } => {
                Some(items.iter().map(PricedItem::line_total).sum())
            }
        }
    }

    /// Budget minus total spend; negative when over budget, never clamped.
    /// An unset budget counts as zero. `None` for simple lists.
    pub fn budget_remaining(&self) -> Option<Money> {
        match &self.body {
            ListBody::Simple { .. } => None,
            ListBody::Complex { items, budget } => {
                let spend: Money = items.iter().map(PricedItem::line_total).sum();
                Some(budget.unwrap_or_default() - spend)
            }
        }
    }

    /// Spend-to-budget fraction in `[0, 1]`
    ///
    /// Exactly `0.0` when the budget is absent or zero (guards the division),
    /// and for simple lists, which track no spend at all.
    pub fn progress_ratio(&self) -> f64 {
        match (self.total_spend(), self.budget()) {
            (Some(spend), Some(budget)) if budget.is_positive() => {
                (spend.cents() as f64 / budget.cents() as f64).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple_list() -> ShoppingList {
        ShoppingList::new("Colmado", ListKind::Simple, None)
    }

    fn complex_list(budget: Option<Money>) -> ShoppingList {
        ShoppingList::new("Supermercado", ListKind::Complex, budget)
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = simple_list();
        assert_eq!(list.item_count(), 0);
        assert_eq!(list.kind(), ListKind::Simple);
        assert_eq!(list.budget(), None);
    }

    #[test]
    fn test_add_item_appends_unchecked() {
        let list = simple_list();
        let updated = list.add_item("Huevos", Some(12));

        assert_eq!(updated.item_count(), 1);
        assert_eq!(list.item_count(), 0, "input snapshot is untouched");

        match &updated.body {
            ListBody::Simple { items } => {
                assert_eq!(items[0].name, "Huevos");
                assert_eq!(items[0].quantity, 12);
                assert!(!items[0].completed);
            }
            _ => panic!("expected simple body"),
        }
    }

    #[test]
    fn test_add_item_blank_name_rejected() {
        let list = simple_list();
        assert_eq!(list.add_item("", Some(1)).item_count(), 0);
        assert_eq!(list.add_item("   ", Some(1)).item_count(), 0);
    }

    #[test]
    fn test_add_item_quantity_defaults_to_one() {
        let list = simple_list().add_item("Arroz", None).add_item("Café", Some(0));
        match &list.body {
            ListBody::Simple { items } => {
                assert_eq!(items[0].quantity, 1);
                assert_eq!(items[1].quantity, 1);
            }
            _ => panic!("expected simple body"),
        }
    }

    #[test]
    fn test_add_item_noop_on_complex_list() {
        let list = complex_list(None);
        assert_eq!(list.add_item("Leche", Some(1)).item_count(), 0);
    }

    #[test]
    fn test_add_priced_item() {
        let list = complex_list(Some(Money::from_pesos(500)));
        let updated =
            list.add_priced_item("Leche", Some(2), Category::Dairy, Money::from_pesos(50));

        assert_eq!(updated.item_count(), 1);
        match &updated.body {
            ListBody::Complex { items, .. } => {
                assert_eq!(items[0].category, Category::Dairy);
                assert_eq!(items[0].price, Money::from_pesos(50));
            }
            _ => panic!("expected complex body"),
        }
    }

    #[test]
    fn test_add_priced_item_rejects_non_positive_price() {
        let list = complex_list(None);
        assert_eq!(
            list.add_priced_item("Leche", Some(1), Category::Dairy, Money::zero())
                .item_count(),
            0
        );
        assert_eq!(
            list.add_priced_item("Leche", Some(1), Category::Dairy, Money::from_cents(-100))
                .item_count(),
            0
        );
    }

    #[test]
    fn test_add_priced_item_noop_on_simple_list() {
        let list = simple_list();
        assert_eq!(
            list.add_priced_item("Leche", Some(1), Category::Dairy, Money::from_pesos(50))
                .item_count(),
            0
        );
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let list = simple_list().add_item("Huevos", Some(12));
        let id = list.item_id_at(0).unwrap();

        let toggled = list.toggle_item(id);
        match &toggled.body {
            ListBody::Simple { items } => {
                assert!(items[0].completed);
                assert_eq!(items[0].quantity, 12, "quantity unaffected by toggling");
            }
            _ => panic!("expected simple body"),
        }

        let back = toggled.toggle_item(id);
        assert_eq!(back, list);
    }

    #[test]
    fn test_toggle_unknown_id_noop() {
        let list = simple_list().add_item("Huevos", Some(1));
        assert_eq!(list.toggle_item(ItemId::new()), list);
    }

    #[test]
    fn test_add_then_remove_round_trips() {
        let list = simple_list().add_item("Arroz", Some(2));
        let added = list.add_item("Habichuelas", Some(1));
        let id = added.item_id_by_name("Habichuelas").unwrap();

        assert_eq!(added.remove_item(id), list);
    }

    #[test]
    fn test_remove_unknown_id_noop() {
        let list = simple_list().add_item("Arroz", Some(1));
        assert_eq!(list.remove_item(ItemId::new()), list);
    }

    #[test]
    fn test_set_quantity_zero_rejected() {
        let list = simple_list().add_item("Arroz", Some(3));
        let id = list.item_id_at(0).unwrap();

        assert_eq!(list.set_quantity(id, 0), list);

        let updated = list.set_quantity(id, 5);
        match &updated.body {
            ListBody::Simple { items } => assert_eq!(items[0].quantity, 5),
            _ => panic!("expected simple body"),
        }
    }

    #[test]
    fn test_set_price() {
        let list = complex_list(None).add_priced_item(
            "Pan",
            Some(1),
            Category::Bakery,
            Money::from_pesos(30),
        );
        let id = list.item_id_at(0).unwrap();

        assert_eq!(list.set_price(id, Money::zero()), list);
        assert_eq!(list.set_price(id, Money::from_cents(-500)), list);

        let updated = list.set_price(id, Money::from_pesos(35));
        assert_eq!(updated.total_spend(), Some(Money::from_pesos(35)));
    }

    #[test]
    fn test_set_budget_rejects_non_positive() {
        let list = complex_list(Some(Money::from_pesos(100)));

        // setBudget("-5") parses to a negative amount and is rejected
        let negative = Money::parse("-5").unwrap();
        assert_eq!(list.set_budget(negative), list);
        assert_eq!(list.set_budget(Money::zero()), list);
        assert_eq!(list.budget(), Some(Money::from_pesos(100)));

        let updated = list.set_budget(Money::from_pesos(200));
        assert_eq!(updated.budget(), Some(Money::from_pesos(200)));
    }

    #[test]
    fn test_set_budget_noop_on_simple_list() {
        let list = simple_list();
        assert_eq!(list.set_budget(Money::from_pesos(100)), list);
        assert_eq!(list.budget(), None);
    }

    #[test]
    fn test_negative_budget_dropped_at_creation() {
        let list = complex_list(Some(Money::from_cents(-1)));
        assert_eq!(list.budget(), None);
    }

    #[test]
    fn test_budget_scenario_milk_and_bread() {
        // Budget RD$1000, Milk RD$50 x2, Bread RD$30 x1
        let list = complex_list(Some(Money::from_pesos(1000)))
            .add_priced_item("Leche", Some(2), Category::Dairy, Money::from_pesos(50))
            .add_priced_item("Pan", Some(1), Category::Bakery, Money::from_pesos(30));

        assert_eq!(list.total_spend(), Some(Money::from_pesos(130)));
        assert_eq!(list.budget_remaining(), Some(Money::from_pesos(870)));
        assert!((list.progress_ratio() - 0.13).abs() < 1e-9);
    }

    #[test]
    fn test_budget_remaining_may_go_negative() {
        let list = complex_list(Some(Money::from_pesos(100))).add_priced_item(
            "Carne",
            Some(3),
            Category::Meat,
            Money::from_pesos(50),
        );

        assert_eq!(list.budget_remaining(), Some(Money::from_pesos(-50)));
        assert_eq!(list.progress_ratio(), 1.0, "ratio clamps at 1");
    }

    #[test]
    fn test_progress_ratio_zero_without_budget() {
        let no_budget = complex_list(None).add_priced_item(
            "Pan",
            Some(1),
            Category::Bakery,
            Money::from_pesos(30),
        );
        assert_eq!(no_budget.progress_ratio(), 0.0);

        // Unset budget still counts as zero in the remaining computation
        assert_eq!(no_budget.budget_remaining(), Some(Money::from_pesos(-30)));

        assert_eq!(simple_list().progress_ratio(), 0.0);
    }

    #[test]
    fn test_simple_list_has_no_spend() {
        let list = simple_list().add_item("Huevos", Some(12));
        assert_eq!(list.total_spend(), None);
        assert_eq!(list.budget_remaining(), None);
    }

    #[test]
    fn test_item_ids_are_unique() {
        let list = simple_list().add_item("Pan", Some(1)).add_item("Pan", Some(1));
        assert_ne!(list.item_id_at(0), list.item_id_at(1));
    }

    #[test]
    fn test_serialization_round_trip() {
        let list = complex_list(Some(Money::from_pesos(1000))).add_priced_item(
            "Leche",
            Some(2),
            Category::Dairy,
            Money::from_pesos(50),
        );

        let json = serde_json::to_string(&list).unwrap();
        let back: ShoppingList = serde_json::from_str(&json).unwrap();
        assert_eq!(list, back);
        assert_eq!(list.created_at, back.created_at);
    }

    #[test]
    fn test_serialization_kind_tag() {
        let list = simple_list();
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.contains(r#""kind":"simple""#));
        assert!(json.contains(r#""createdAt""#));

        let list = complex_list(None);
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.contains(r#""kind":"complex""#));
        assert!(!json.contains("budget"), "unset budget is omitted");
    }
}
