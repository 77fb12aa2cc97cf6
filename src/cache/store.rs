use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

/// Cache schema version. Bump when the envelope or entity layout changes;
/// entries written under an older version are treated as misses.
const CACHE_VERSION: u32 = 1;

/// Fixed cache keys, one per entity collection plus the hero singleton.
pub mod keys {
    pub const HERO: &str = "hero";
    pub const PROJECTS: &str = "projects";
    pub const SKILLS: &str = "skills";
    pub const EXPERIENCES: &str = "experiences";
}

/// Versioned envelope around a cached value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub version: u32,
    pub data: T,
    pub cached_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T) -> Self {
        Self {
            version: CACHE_VERSION,
            data,
            cached_at: Utc::now(),
        }
    }
}

/// File-backed key-value cache for the last-known-good content.
///
/// `read` never fails: anything wrong with a stored entry (missing file,
/// unreadable file, corrupt JSON, stale schema version) is a logged miss.
/// `write` is best-effort: a storage failure is logged and swallowed so the
/// in-memory render state stays correct even when persistence does not.
pub struct CacheStore {
    cache_dir: PathBuf,
}

impl CacheStore {
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache directory: {}", cache_dir.display()))?;
        Ok(Self { cache_dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    /// Read a cached value, treating every failure as a miss.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.try_read(key) {
            Ok(value) => value,
            Err(e) => {
                debug!(cache = key, error = %e, "Cache read failed, treating as miss");
                None
            }
        }
    }

    fn try_read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache file: {}", key))?;

        let entry: CacheEntry<T> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", key))?;

        if entry.version != CACHE_VERSION {
            debug!(
                cache = key,
                found = entry.version,
                expected = CACHE_VERSION,
                "Cache entry has stale schema version"
            );
            return Ok(None);
        }

        Ok(Some(entry.data))
    }

    /// Write a value through to disk, logging and swallowing any failure.
    pub fn write<T: Serialize>(&self, key: &str, data: &T) {
        if let Err(e) = self.try_write(key, data) {
            warn!(cache = key, error = %e, "Failed to persist cache entry");
        }
    }

    fn try_write<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let entry = CacheEntry::new(data);
        let contents = serde_json::to_string_pretty(&entry)?;
        std::fs::write(self.entry_path(key), contents)
            .with_context(|| format!("Failed to write cache file: {}", key))?;
        Ok(())
    }

    /// Whether an entry exists for the key, corrupt or not.
    ///
    /// Used to detect a genuinely first-ever visit: a corrupt hero entry
    /// still proves the site has rendered here before.
    pub fn contains(&self, key: &str) -> bool {
        self.entry_path(key).exists()
    }
}

// ============================================================================
// Tests
// ============================================================================
