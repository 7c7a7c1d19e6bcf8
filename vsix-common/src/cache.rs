// vsix-common/src/cache.rs
// Handles the on-disk store of downloaded .vsix artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;
use crate::model::ExtensionId;
use crate::Config;

/// Cache struct managing the extensions directory.
pub struct Cache {
    cache_dir: PathBuf,
}

impl Cache {
    /// Create a new Cache over the config's extensions directory,
    /// creating the directory if it does not exist.
    pub fn new(config: &Config) -> Result<Self> {
        let cache_dir = config.extensions_dir().to_path_buf();
        if !cache_dir.exists() {
            fs::create_dir_all(&cache_dir)?;
        }

        Ok(Self { cache_dir })
    }

    /// Gets the cache directory path
    pub fn get_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Deterministic artifact path for an identifier/version pair:
    /// `<dir>/<publisher>.<name>-<version>.vsix`.
    pub fn artifact_path(&self, id: &ExtensionId, version: &str) -> PathBuf {
        self.cache_dir.join(format!("{id}-{version}.vsix"))
    }
}
