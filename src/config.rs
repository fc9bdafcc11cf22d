//! Application configuration management.
//!
//! Configuration is stored at `~/.config/sigo-auth/config.json` and covers
//! the service base URL, the request timeout, and an optional override for
//! the token data directory. Environment variables `SIGO_BASE_URL` and
//! `SIGO_TIMEOUT_SECS` take precedence over the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "sigo-auth";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Published address of the SIGO service
const DEFAULT_BASE_URL: &str = "http://189.206.96.198:8080";

/// HTTP request timeout in seconds.
/// The controller itself enforces no timeout; this is the transport default.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// Where the file token store keeps its data. `None` means the platform
    /// config directory.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: None,
        }
    }
}

impl Config {
    /// Load from disk, falling back to defaults when no file exists, then
    /// apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("SIGO_BASE_URL") {
            self.base_url = url;
        }
        if let Ok(secs) = std::env::var("SIGO_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                self.request_timeout_secs = secs;
            }
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for locally persisted state (the token file).
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
