//! # Client configuration — `shareazade.toml`
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"   # REST API origin
//!
//! [list]
//! items_per_page = 20
//! ```
//!
//! All sections derive `Default` with the production defaults, so a missing
//! or empty file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::query::ITEMS_PER_PAGE;

/// Top-level configuration stored in `shareazade.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
}

/// REST API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin the `api/<entities>` paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// List screen settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u64,
}

fn default_items_per_page() -> u64 {
    ITEMS_PER_PAGE
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "shareazade.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_defaults() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.list.items_per_page, 20);
    }

    #[test]
    fn toml_round_trip() {
        let mut config = ClientConfig::default();
        config.api.base_url = "https://rides.example.org".to_string();
        config.list.items_per_page = 50;

        let text = config.to_toml().unwrap();
        let loaded = ClientConfig::from_toml(&text).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_sections_fall_back() {
        let config = ClientConfig::from_toml("[api]\nbase_url = \"http://api.local\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://api.local");
        assert_eq!(config.list.items_per_page, 20);
    }
}
