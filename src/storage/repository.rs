//! List repository
//!
//! Durable mapping from list id to list snapshot, backed by an injected
//! key-value store. The whole collection lives under a single key as a JSON
//! array and is rewritten on every mutation; there is no in-memory cache, so
//! every operation sees whatever the store currently holds.
//!
//! Known limitation: two processes sharing the same backing store are not
//! coordinated. The last writer wins the full-collection overwrite and can
//! silently discard the other side's changes.

use crate::error::{CarritoError, CarritoResult};
use crate::models::{ListId, ListKind, Money, ShoppingList};

use super::store::KeyValueStore;

/// Store key holding the serialized collection
pub const STORAGE_KEY: &str = "shopping-lists";

/// Repository for shopping lists over an injected key-value store
pub struct ListRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ListRepository<S> {
    /// Create a repository over the given store
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: STORAGE_KEY.to_string(),
        }
    }

    /// Load the whole collection, degrading to empty on any read problem
    ///
    /// An absent key, an unreadable store, and malformed JSON all yield an
    /// empty collection. The next successful write replaces whatever was
    /// there, so a corrupt store heals itself at the cost of its contents.
    fn load(&self) -> Vec<ShoppingList> {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            Ok(None) | Err(_) => Vec::new(),
        }
    }

    /// Persist the whole collection synchronously
    fn save(&self, lists: &[ShoppingList]) -> CarritoResult<()> {
        let raw = serde_json::to_string(lists)?;
        self.store.set(&self.key, &raw)
    }

    /// All lists, in stored order; never fails
    pub fn list_all(&self) -> Vec<ShoppingList> {
        self.load()
    }

    /// Look up a list by id
    pub fn get(&self, id: ListId) -> Option<ShoppingList> {
        self.load().into_iter().find(|list| list.id == id)
    }

    /// Resolve a list from user input: a full id, or a name match
    /// (case-insensitive)
    pub fn find(&self, query: &str) -> Option<ShoppingList> {
        let lists = self.load();

        if let Ok(id) = query.parse::<ListId>() {
            if let Some(list) = lists.iter().find(|l| l.id == id) {
                return Some(list.clone());
            }
        }

        let wanted = query.trim().to_lowercase();
        lists
            .into_iter()
            .find(|l| l.name.to_lowercase() == wanted)
    }

    /// Create a new empty list and persist it before returning
    ///
    /// The name must not be blank. The budget is honored only for complex
    /// lists; a negative budget is dropped.
    pub fn create(
        &self,
        name: &str,
        kind: ListKind,
        budget: Option<Money>,
    ) -> CarritoResult<ShoppingList> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CarritoError::Validation(
                "List name must not be empty".into(),
            ));
        }

        let list = ShoppingList::new(name, kind, budget);

        let mut lists = self.load();
        lists.push(list.clone());
        self.save(&lists)?;

        Ok(list)
    }

    /// Replace the stored list with a matching id by the given snapshot
    ///
    /// Unknown ids are silently skipped (idempotent replace, not an error),
    /// and nothing is written in that case.
    pub fn update(&self, updated: &ShoppingList) -> CarritoResult<()> {
        let mut lists = self.load();

        if let Some(slot) = lists.iter_mut().find(|l| l.id == updated.id) {
            *slot = updated.clone();
            self.save(&lists)?;
        }

        Ok(())
    }

    /// Remove a list by id; absent ids are a no-op
    pub fn delete(&self, id: ListId) -> CarritoResult<()> {
        let mut lists = self.load();
        let before = lists.len();
        lists.retain(|l| l.id != id);

        if lists.len() != before {
            self.save(&lists)?;
        }

        Ok(())
    }
}
