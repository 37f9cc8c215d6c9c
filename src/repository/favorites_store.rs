//! Favorites Store
//!
//! Persists the whole favorites list as one JSON array under a single
//! storage key. Every save overwrites the full list.

use std::collections::HashSet;
use crate::domain::{FavoriteEntry, FavoriteKind};
use super::traits::KeyValueStore;

/// Storage slot used by the dashboard
pub const FAVORITES_STORAGE_KEY: &str = "fashion-favorites-v1";

pub struct FavoritesStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self { storage, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted list.
    ///
    /// Missing, unreadable or non-array data loads as an empty list.
    /// Array elements that do not decode are skipped, and only the first
    /// entry per (kind, id) is kept.
    pub fn load(&self) -> Vec<FavoriteEntry> {
        let Some(raw) = self.storage.get(&self.key) else {
            return Vec::new();
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(values) => values,
            Err(e) => {
                log::warn!("[FAVORITES] Ignoring unreadable '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        let mut seen: HashSet<(FavoriteKind, String)> = HashSet::new();
        let mut entries = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_value::<FavoriteEntry>(value) {
                Ok(entry) => {
                    if seen.insert((entry.kind(), entry.id().to_string())) {
                        entries.push(entry);
                    } else {
                        log::warn!("[FAVORITES] Dropping duplicate {} '{}'", entry.kind().as_str(), entry.id());
                    }
                }
                Err(e) => log::warn!("[FAVORITES] Skipping malformed entry: {}", e),
            }
        }
        entries
    }

    /// Write the full list. Failures are logged and otherwise ignored.
    pub fn save(&self, entries: &[FavoriteEntry]) {
        let json = match serde_json::to_string(entries) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("[FAVORITES] Failed to encode favorites: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, &json) {
            log::warn!("[FAVORITES] Dropped write of {} entries: {}", entries.len(), e);
        }
    }
}

/// True iff some entry matches both `kind` and `id`
pub fn is_favorited(entries: &[FavoriteEntry], kind: FavoriteKind, id: &str) -> bool {
    entries.iter().any(|entry| entry.refers_to(kind, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use chrono::{TimeZone, Utc};

    fn sample() -> Vec<FavoriteEntry> {
        let at = Utc.with_ymd_and_hms(2024, 5, 6, 8, 30, 0).unwrap();
        vec![
            FavoriteEntry::hot_item("h1", "The Row", "Margaux 15", "https://img/h1.jpg").with_created_at(at),
            FavoriteEntry::brand_update("b1", "Loewe", "Spring campaign").with_created_at(at),
            FavoriteEntry::trending("t1", "安静奢华", "Quiet Luxury").with_created_at(at),
        ]
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = FavoritesStore::new(MemoryStore::new(), FAVORITES_STORAGE_KEY);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_not_json_is_empty() {
        let store = FavoritesStore::new(MemoryStore::with_value(FAVORITES_STORAGE_KEY, "not json"), FAVORITES_STORAGE_KEY);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_non_array_is_empty() {
        let store = FavoritesStore::new(
            MemoryStore::with_value(FAVORITES_STORAGE_KEY, r#"{"kind":"trending","id":"t1"}"#),
            FAVORITES_STORAGE_KEY,
        );
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = FavoritesStore::new(MemoryStore::new(), FAVORITES_STORAGE_KEY);
        let entries = sample();

        store.save(&entries);
        assert_eq!(store.load(), entries);
    }

    #[test]
    fn test_save_overwrites_previous_list() {
        let store = FavoritesStore::new(MemoryStore::new(), FAVORITES_STORAGE_KEY);
        store.save(&sample());
        store.save(&sample()[..1]);

        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_save_failure_is_silent() {
        let storage = MemoryStore::with_value(FAVORITES_STORAGE_KEY, "[]");
        storage.set_fail_writes(true);
        let store = FavoritesStore::new(&storage, FAVORITES_STORAGE_KEY);

        store.save(&sample());
        assert_eq!(storage.raw(FAVORITES_STORAGE_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_skips_malformed_and_duplicate_entries() {
        let raw = r#"[
            {"kind":"trending","id":"t1","createdAt":"2024-05-06T08:30:00Z","titleZh":"A","titleEn":"A"},
            {"kind":"mystery","id":"x"},
            {"kind":"trending","id":"t1","createdAt":"2024-05-07T08:30:00Z","titleZh":"B","titleEn":"B"},
            {"kind":"hotItem","id":"t1","createdAt":"2024-05-06T08:30:00Z","brand":"X","name":"Y"}
        ]"#;
        let store = FavoritesStore::new(MemoryStore::with_value(FAVORITES_STORAGE_KEY, raw), FAVORITES_STORAGE_KEY);

        let entries = store.load();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title(), "A");
        assert_eq!(entries[1].kind(), FavoriteKind::HotItem);
    }

    #[test]
    fn test_is_favorited_ignores_other_fields() {
        let entries = sample();
        assert!(is_favorited(&entries, FavoriteKind::Trending, "t1"));
        assert!(is_favorited(&entries, FavoriteKind::HotItem, "h1"));
        assert!(!is_favorited(&entries, FavoriteKind::Trending, "h1"));
        assert!(!is_favorited(&[], FavoriteKind::Trending, "t1"));
    }
}
