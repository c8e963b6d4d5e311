//! Configuration handling for the address book

use crate::lookup::DEFAULT_BASE_URL;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the lookup base URL
pub const LOOKUP_URL_ENV: &str = "ADDRESS_BOOK_LOOKUP_URL";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the zipcode lookup service
    pub lookup_base_url: Option<String>,
    /// Request timeout for lookups; transport default when unset
    pub lookup_timeout_secs: Option<u64>,
    /// Whether the form shelf starts expanded
    pub form_open_on_start: Option<bool>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("br", "address-book", "address-book")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Lookup base URL: environment, then file, then the public service
    pub fn lookup_base_url(&self) -> String {
        self.resolve_lookup_base_url(std::env::var(LOOKUP_URL_ENV).ok())
    }

    fn resolve_lookup_base_url(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.lookup_base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout_secs.map(Duration::from_secs)
    }

    pub fn form_open_on_start(&self) -> bool {
        self.form_open_on_start.unwrap_or(true)
    }
}
