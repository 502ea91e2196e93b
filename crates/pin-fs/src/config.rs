//! TOML configuration loading

use serde::de::DeserializeOwned;

use crate::{Error, NormalizedPath, Result, io};

/// Loads TOML configuration files.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a TOML file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    /// Load configuration, falling back to `T::default()` when the file does
    /// not exist. Parse errors and other I/O errors are still reported.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, path: &NormalizedPath) -> Result<T> {
        match self.load(path) {
            Ok(value) => Ok(value),
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %path, "no config file, using defaults");
                Ok(T::default())
            }
            Err(e) => Err(e),
        }
    }
}
