//! User settings for the expense tracker
//!
//! Manages the currency symbol, which store backs the expense list, the
//! hosted backend connection and logging verbosity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::paths::AppPaths;
use crate::error::ExpenseError;
use crate::models::money::DEFAULT_CURRENCY_SYMBOL;

/// Which expense store commands use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreMode {
    /// Remote when a backend is configured and a session exists, else local
    #[default]
    Auto,
    /// Always the local JSON slot
    Local,
    /// Always the hosted backend
    Remote,
}

impl fmt::Display for StoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Local => write!(f, "local"),
            Self::Remote => write!(f, "remote"),
        }
    }
}

impl FromStr for StoreMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "local" | "offline" => Ok(Self::Local),
            "remote" | "online" => Ok(Self::Remote),
            other => Err(format!(
                "unknown store mode '{}' (expected auto, local or remote)",
                other
            )),
        }
    }
}

/// Connection details for the hosted backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub api_url: String,

    /// Public (anon) API key sent as the `apikey` header
    pub api_key: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl BackendSettings {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Validate that both the URL and key are usable
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if self.api_key.trim().is_empty() {
            return Err(ExpenseError::Config("Backend API key is empty".into()));
        }
        reqwest::Url::parse(&self.api_url)
            .map_err(|e| ExpenseError::Config(format!("Invalid backend URL '{}': {}", self.api_url, e)))?;
        Ok(())
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    #[serde(default)]
    pub store_mode: StoreMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendSettings>,

    /// Months shown in the analytics chart
    #[serde(default = "default_analytics_months")]
    pub analytics_months: usize,

    /// Default tracing level when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_analytics_months() -> usize {
    6
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            store_mode: StoreMode::default(),
            backend: None,
            analytics_months: default_analytics_months(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &AppPaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            tracing::debug!("loading settings from {}", settings_path.display());
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ExpenseError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| ExpenseError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            tracing::debug!("no settings at {}, using defaults", settings_path.display());
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AppPaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ExpenseError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Apply command-line or environment overrides for the backend
    ///
    /// A URL and key given together replace the configured backend; either
    /// one alone patches the existing configuration.
    pub fn apply_backend_overrides(&mut self, api_url: Option<String>, api_key: Option<String>) {
        if let Some(backend) = self.backend.as_mut() {
            if let Some(url) = api_url {
                backend.api_url = url;
            }
            if let Some(key) = api_key {
                backend.api_key = key;
            }
            return;
        }

        match (api_url, api_key) {
            (None, None) => {}
            (Some(url), Some(key)) => self.backend = Some(BackendSettings::new(url, key)),
            _ => {
                tracing::warn!("ignoring partial backend override: both URL and API key are needed");
            }
        }
    }
}
