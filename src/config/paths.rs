//! Path management for Homekeeper
//!
//! Only the settings file lives on disk; dashboard data is seeded in memory.
//!
//! ## Path Resolution Order
//!
//! 1. `HOMEKEEPER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/homekeeper` or `~/.config/homekeeper`
//! 3. Windows: `%APPDATA%\homekeeper`

use std::path::PathBuf;

use crate::error::HomekeeperError;

/// Manages all paths used by Homekeeper
#[derive(Debug, Clone)]
pub struct HomekeeperPaths {
    base_dir: PathBuf,
}

impl HomekeeperPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if neither an override nor a home directory is available.
    pub fn new() -> Result<Self, HomekeeperError> {
        let base_dir = if let Ok(custom) = std::env::var("HOMEKEEPER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create HomekeeperPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), HomekeeperError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HomekeeperError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, HomekeeperError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                HomekeeperError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("homekeeper"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, HomekeeperError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| HomekeeperError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("homekeeper"))
}
