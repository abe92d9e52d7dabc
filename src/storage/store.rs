//! Key-value persistence boundary
//!
//! The repository talks to a string key-value store and treats it as a black
//! box. The store is injected at construction so tests can run against an
//! in-memory fake instead of the filesystem.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{CarritoError, CarritoResult};

/// A string key-value store
///
/// `get` returning `Ok(None)` means the key has never been written, which
/// callers treat as an empty collection.
pub trait KeyValueStore {
    /// Read the value stored under a key, if any
    fn get(&self, key: &str) -> CarritoResult<Option<String>>;

    /// Store a value under a key, replacing any previous value
    fn set(&self, key: &str, value: &str) -> CarritoResult<()>;
}

/// In-memory store for tests and ephemeral use
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> CarritoResult<Option<String>> {
        let data = self
            .data
            .lock()
            .map_err(|e| CarritoError::Storage(format!("Failed to acquire lock: {}", e)))?;
        Ok(data.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CarritoResult<()> {
        let mut data = self
            .data
            .lock()
            .map_err(|e| CarritoError::Storage(format!("Failed to acquire lock: {}", e)))?;
        data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
