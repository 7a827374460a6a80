//! On-disk persistence for the search term cache
//!
//! The whole [`Cache`] lives in a single pretty-printed JSON file in the
//! system temporary directory and is rewritten in full on every save.

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::Cache;

/// Name of the cache file inside the temporary directory
pub const CACHE_FILE_NAME: &str = "city_cache.json";

/// Errors that can occur while loading or saving the cache
///
/// A missing or unreadable file is not an error; it loads as an empty cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The file exists but does not hold a valid cache object
    #[error("Error unmarshalling cache data: {0}")]
    Parse(#[source] serde_json::Error),

    /// The cache could not be serialized
    #[error("Error marshalling cache data: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The serialized cache could not be written
    #[error("Error writing cache data to file: {0}")]
    Write(#[source] io::Error),
}

/// Reads and writes the cache file
#[derive(Debug, Clone)]
pub struct CacheStore {
    /// Location of the cache file
    path: PathBuf,
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore {
    /// Creates a store for `city_cache.json` in the system temporary directory
    pub fn new() -> Self {
        Self {
            path: std::env::temp_dir().join(CACHE_FILE_NAME),
        }
    }

    /// Creates a store backed by a specific file
    ///
    /// Useful for testing or when a specific cache location is needed.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted cache
    ///
    /// # Returns
    /// * `Ok(Cache)` with the stored entries, or an empty cache if the file is
    ///   missing or cannot be read
    /// * `Err(CacheError::Parse)` if the file content is malformed; no partial
    ///   state is returned
    pub fn load(&self) -> Result<Cache, CacheError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("no usable cache at {}: {}", self.path.display(), e);
                return Ok(Cache::new());
            }
        };

        let cache: Cache = serde_json::from_slice(&content).map_err(CacheError::Parse)?;
        debug!("loaded {} cached entries from {}", cache.len(), self.path.display());
        Ok(cache)
    }

    /// Writes the full cache, replacing the previous file
    ///
    /// The file is pretty-printed with two-space indentation.
    pub fn save(&self, cache: &Cache) -> Result<(), CacheError> {
        let json = serde_json::to_string_pretty(cache).map_err(CacheError::Serialize)?;
        fs::write(&self.path, json).map_err(CacheError::Write)?;
        debug!("saved {} cached entries to {}", cache.len(), self.path.display());
        Ok(())
    }
}
