//! Path management for carrito
//!
//! Provides XDG-compliant path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `CARRITO_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/carrito-cli` or `~/.config/carrito-cli`
//! 3. Windows: `%APPDATA%\carrito-cli`

use std::path::PathBuf;

use crate::error::CarritoError;

/// Manages all paths used by carrito
#[derive(Debug, Clone)]
pub struct CarritoPaths {
    /// Base directory for all carrito data
    base_dir: PathBuf,
}

impl CarritoPaths {
    /// Create a new CarritoPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CarritoError> {
        let base_dir = if let Ok(custom) = std::env::var("CARRITO_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CarritoPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/carrito-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/carrito-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), CarritoError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CarritoError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CarritoError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CarritoError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| CarritoError::Config("HOME environment variable not set".into()))
        })?;

    Ok(config_base.join("carrito-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CarritoError> {
    let appdata = std::env::var("APPDATA")
        .map(PathBuf::from)
        .map_err(|_| CarritoError::Config("APPDATA environment variable not set".into()))?;

    Ok(appdata.join("carrito-cli"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let paths = CarritoPaths::with_base_dir(PathBuf::from("/tmp/carrito-test"));
        assert_eq!(paths.base_dir(), &PathBuf::from("/tmp/carrito-test"));
        assert_eq!(paths.data_dir(), PathBuf::from("/tmp/carrito-test/data"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/carrito-test/config.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CarritoPaths::with_base_dir(temp_dir.path().join("carrito"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}
