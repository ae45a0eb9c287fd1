//! Runtime configuration of the page enhancer.

use crate::error::ConfigError;
use crate::format::DEFAULT_DECIMALS;
use serde::{Deserialize, Serialize};

/// Settings the server may override through an inline JSON block.
/// Every field has a default, so `{}` is a complete config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UiConfig {
    /// Prefix of every API path
    pub api_base: String,
    /// Path of the stats endpoint under `api_base`
    pub stats_path: String,
    /// Local storage key of the theme preference
    pub theme_storage_key: String,
    /// Delay before flash alerts are hidden, in milliseconds
    pub alert_dismiss_ms: u32,
    /// Fractional digits of rendered byte sizes
    pub byte_decimals: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            stats_path: "/stats".to_string(),
            theme_storage_key: "theme".to_string(),
            alert_dismiss_ms: 5000,
            byte_decimals: DEFAULT_DECIMALS,
        }
    }
}

impl UiConfig {
    /// Parse the inline config block.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))
    }

    /// Full URL path of the stats endpoint.
    pub fn stats_url(&self) -> String {
        format!("{}{}", self.api_base, self.stats_path)
    }
}
