//! File-backed key-value store
//!
//! Each key maps to a `<key>.json` file in the store's directory, written
//! atomically so a crash mid-write never leaves a half-serialized collection
//! behind.

use std::path::{Path, PathBuf};

use crate::error::CarritoResult;

use super::file_io::{read_string, write_string_atomic};
use super::store::KeyValueStore;

/// Key-value store backed by one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the store's files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CarritoResult<Option<String>> {
        read_string(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> CarritoResult<()> {
        write_string_atomic(self.path_for(key), value)
    }
}
