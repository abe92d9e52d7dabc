//! User settings for carrito
//!
//! A small persisted settings file next to the data directory. Currently this
//! holds the base URL that share links are built from.

use serde::{Deserialize, Serialize};

use crate::error::CarritoError;
use crate::storage::{read_string, write_string_atomic};

use super::paths::CarritoPaths;

/// User settings for carrito
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL that read-only share links are built from
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_share_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            share_base_url: default_share_base_url(),
        }
    }
}

impl Settings {
    /// Load settings, creating the file with defaults if it doesn't exist
    pub fn load_or_create(paths: &CarritoPaths) -> Result<Self, CarritoError> {
        match read_string(paths.settings_file())? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| CarritoError::Config(format!("Failed to parse settings: {}", e))),
            None => {
                let settings = Self::default();
                settings.save(paths)?;
                Ok(settings)
            }
        }
    }

    /// Persist settings to disk
    pub fn save(&self, paths: &CarritoPaths) -> Result<(), CarritoError> {
        let raw = serde_json::to_string_pretty(self)?;
        write_string_atomic(paths.settings_file(), &raw)
    }
}
