//! Item categories for priced (complex) lists
//!
//! The set is fixed; labels follow the original Spanish UI so data written by
//! earlier versions of the app deserializes unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a priced shopping item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    /// Fruits and vegetables
    #[serde(rename = "Frutas y Verduras")]
    Produce,
    /// Dairy products
    #[serde(rename = "Lácteos")]
    Dairy,
    /// Meat and poultry
    #[serde(rename = "Carnes")]
    Meat,
    /// Bread and baked goods
    #[serde(rename = "Panadería")]
    Bakery,
    /// Cleaning supplies
    #[serde(rename = "Limpieza")]
    Cleaning,
    /// Everything else
    #[default]
    #[serde(rename = "Otros")]
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 6] = [
        Self::Produce,
        Self::Dairy,
        Self::Meat,
        Self::Bakery,
        Self::Cleaning,
        Self::Other,
    ];

    /// Parse a category from a string (accepts English keys and Spanish labels)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "produce" | "frutas y verduras" | "frutas" | "verduras" => Some(Self::Produce),
            "dairy" | "lácteos" | "lacteos" => Some(Self::Dairy),
            "meat" | "carnes" => Some(Self::Meat),
            "bakery" | "panadería" | "panaderia" => Some(Self::Bakery),
            "cleaning" | "limpieza" => Some(Self::Cleaning),
            "other" | "otros" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Produce => write!(f, "Frutas y Verduras"),
            Self::Dairy => write!(f, "Lácteos"),
            Self::Meat => write!(f, "Carnes"),
            Self::Bakery => write!(f, "Panadería"),
            Self::Cleaning => write!(f, "Limpieza"),
            Self::Other => write!(f, "Otros"),
        }
    }
}
