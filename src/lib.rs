//! carrito - Terminal-based shopping list manager
//!
//! This library provides the core functionality for carrito: shopping lists
//! that are either plain checklists (simple) or budget-tracked lists of
//! priced, categorized items (complex), persisted locally as JSON.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (lists, items, categories, money)
//! - `storage`: Key-value store boundary and the list repository
//! - `display`: Terminal rendering and es-DO formatting
//! - `cli`: Command definitions and handlers
//!
//! Lists are value snapshots: every mutation returns a new `ShoppingList`
//! and the repository rewrites the whole persisted collection per write.
//! Concurrent writers to the same backing store are not coordinated; the
//! last writer wins.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{CarritoError, CarritoResult};
