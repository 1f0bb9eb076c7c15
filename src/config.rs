use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, StaylistError};

/// Global staylist configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Google Places API key (STAYLIST_API_KEY env var takes precedence)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Region code for place searches (e.g., "IN", "US")
    #[serde(default = "default_region")]
    pub region_code: String,

    /// Language code for place searches
    #[serde(default = "default_language")]
    pub language_code: String,

    /// Retry policy for page field extraction
    #[serde(default)]
    pub detect_retry: RetryPolicy,
}

/// Bounded retry policy for detection, expressed as data so it can be
/// tuned from config and driven by a fake clock in tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts including the first (minimum 1)
    #[serde(default = "default_attempts")]
    pub max_attempts: u32,

    /// Delay between attempts in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl RetryPolicy {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_attempts(),
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_region() -> String {
    "IN".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_attempts() -> u32 {
    2
}

fn default_delay_ms() -> u64 {
    700
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            region_code: default_region(),
            language_code: default_language(),
            detect_retry: RetryPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| StaylistError::ConfigError(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Resolve the Places API key: environment variable wins over config file
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var("STAYLIST_API_KEY") {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .map(String::from)
            .ok_or_else(|| StaylistError::ConfigError("No Places API key configured".into()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "staylist").ok_or_else(|| {
            StaylistError::ConfigError("Could not determine config directory".into())
        })?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "staylist").ok_or_else(|| {
            StaylistError::ConfigError("Could not determine data directory".into())
        })?;
        Ok(dirs.data_dir().to_path_buf())
    }

    /// Get the shortlist file path
    ///
    /// Supports STAYLIST_SHORTLIST environment variable for test isolation
    pub fn shortlist_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("STAYLIST_SHORTLIST") {
            return Ok(PathBuf::from(path));
        }
        Ok(Self::data_dir()?.join("shortlist.json"))
    }
}
