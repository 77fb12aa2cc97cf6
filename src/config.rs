//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which includes the content API endpoint, its key, and the admin
//! credential.
//!
//! Configuration is stored at `~/.config/foliosync/config.json`. Each field
//! can also be supplied through an environment variable, which takes
//! precedence over the file:
//!
//! - `FOLIOSYNC_API_URL`
//! - `FOLIOSYNC_API_KEY`
//! - `FOLIOSYNC_ADMIN_PASSWORD`

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "foliosync";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_base_url: Option<String>,
    pub api_key: Option<String>,
    pub admin_password: Option<String>,
    /// Optional override for the on-disk cache location.
    pub cache_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.cache_dir {
            return Ok(dir.clone());
        }
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("FOLIOSYNC_API_URL") {
            self.api_base_url = Some(url);
        }
        if let Ok(key) = std::env::var("FOLIOSYNC_API_KEY") {
            self.api_key = Some(key);
        }
        if let Ok(password) = std::env::var("FOLIOSYNC_ADMIN_PASSWORD") {
            self.admin_password = Some(password);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
