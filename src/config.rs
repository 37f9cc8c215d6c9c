//! Dashboard Configuration
//!
//! Display limits, storage key and log level. Defaults can be overridden
//! by a JSON object stored under [`CONFIG_STORAGE_KEY`]; any field left
//! out keeps its default.

use serde::{Deserialize, Serialize};
use crate::repository::{KeyValueStore, FAVORITES_STORAGE_KEY};

/// Storage slot holding optional config overrides
pub const CONFIG_STORAGE_KEY: &str = "fashion-radar-config";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DashboardConfig {
    pub favorites_key: String,
    /// Rows shown in the trending list
    pub trending_limit: usize,
    /// Rows shown in the brand update list
    pub brand_update_limit: usize,
    /// Cards in the hot item grid before "view all"
    pub hot_item_count: usize,
    /// Trend drivers shown before expanding
    pub driver_initial_count: usize,
    pub curated_post_limit: usize,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            favorites_key: FAVORITES_STORAGE_KEY.to_string(),
            trending_limit: 10,
            brand_update_limit: 10,
            hot_item_count: 6,
            driver_initial_count: 6,
            curated_post_limit: 2,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Defaults merged with whatever override the store holds
    pub fn load(storage: &impl KeyValueStore) -> Self {
        let Some(raw) = storage.get(CONFIG_STORAGE_KEY) else {
            return Self::default();
        };
        // Logger is not up yet, so a bad override falls back quietly
        serde_json::from_str(&raw).unwrap_or_default()
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;

    #[test]
    fn test_missing_override_uses_defaults() {
        let config = DashboardConfig::load(&MemoryStore::new());
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.favorites_key, "fashion-favorites-v1");
        assert_eq!(config.hot_item_count, 6);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let storage = MemoryStore::with_value(CONFIG_STORAGE_KEY, r#"{"hot_item_count": 3, "log_level": "debug"}"#);
        let config = DashboardConfig::load(&storage);

        assert_eq!(config.hot_item_count, 3);
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.trending_limit, 10);
    }

    #[test]
    fn test_corrupt_override_falls_back() {
        let storage = MemoryStore::with_value(CONFIG_STORAGE_KEY, "{nope");
        assert_eq!(DashboardConfig::load(&storage), DashboardConfig::default());
    }

    #[test]
    fn test_unknown_log_level_is_info() {
        let config = DashboardConfig { log_level: "loud".to_string(), ..Default::default() };
        assert_eq!(config.log_level(), log::Level::Info);
    }
}
