//! # Store configuration — `userdir.toml`
//!
//! Defines the TOML configuration consumed when constructing a store backend
//! (filename: [`StoreConfig::filename`] = `"userdir.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [collection]
//! name = "users"          # remote collection holding the records
//!
//! [remote]
//! base_url = "https://records.example.com"
//! timeout_secs = 0        # 0 = no request timeout
//! ```
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration (collection `"users"`, no base
//! URL, no timeout).

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `userdir.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub collection: CollectionConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Collection-specific configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Name of the remote collection holding user records.
    #[serde(default = "default_collection_name")]
    pub name: String,
}

fn default_collection_name() -> String {
    "users".to_string()
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            name: default_collection_name(),
        }
    }
}

/// Remote endpoint configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the document-collection API.
    /// Empty string means no remote is configured.
    #[serde(default)]
    pub base_url: String,
    /// Per-request timeout in seconds. 0 disables the timeout.
    #[serde(default)]
    pub timeout_secs: u32,
}

impl StoreConfig {
    /// Create a config pointing at the given remote base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            collection: CollectionConfig::default(),
            remote: RemoteConfig {
                base_url,
                timeout_secs: 0,
            },
        }
    }

    /// Builder method to set the collection name.
    pub fn with_collection(mut self, name: String) -> Self {
        self.collection.name = name;
        self
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, secs: u32) -> Self {
        self.remote.timeout_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "userdir.toml"
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
    fn empty_toml_is_default_config() {
        let config = StoreConfig::from_toml("").unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.collection.name, "users");
        assert_eq!(config.remote.timeout_secs, 0);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = StoreConfig::from_toml(
            "[remote]\nbase_url = \"https://records.example.com\"\n",
        )
        .unwrap();
        assert_eq!(config.remote.base_url, "https://records.example.com");
        assert_eq!(config.collection.name, "users");
    }
}
