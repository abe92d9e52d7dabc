//! Core data models for carrito
//!
//! This module contains the data structures that represent the shopping-list
//! domain: lists, the two item variants, categories, ids, and money.

pub mod category;
pub mod ids;
pub mod item;
pub mod list;
pub mod money;

pub use category::Category;
pub use ids::{ItemId, ListId};
pub use item::{PricedItem, SimpleItem};
pub use list::{ListBody, ListKind, ShoppingList};
pub use money::Money;
