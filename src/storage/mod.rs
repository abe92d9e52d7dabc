//! Storage layer for carrito
//!
//! A key-value store boundary (file-backed in production, in-memory for
//! tests) and the list repository that serializes the whole collection
//! through it.

pub mod file_io;
pub mod file_store;
pub mod repository;
pub mod store;

pub use file_io::{read_string, write_string_atomic};
pub use file_store::FileStore;
pub use repository::{ListRepository, STORAGE_KEY};
pub use store::{KeyValueStore, MemoryStore};
