//! Favorites Context
//!
//! Shares the favorites controller with components via the Leptos
//! Context API. The controller stays the only writer; components read
//! favorite state from the dashboard store, which the controller's
//! listener keeps in sync.

use std::rc::Rc;
use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::domain::{FavoriteEntry, FavoriteKind};
use crate::favorites::FavoritesController;
use crate::repository::{is_favorited, KeyValueStore};
use crate::store::{store_set_favorites, DashboardStore, DashboardStateStoreFields};

/// Storage handle the controller persists through
pub type SharedStorage = Rc<dyn KeyValueStore>;

#[derive(Clone, Copy)]
pub struct FavoritesContext {
    controller: StoredValue<FavoritesController<SharedStorage>, LocalStorage>,
    store: DashboardStore,
}

impl FavoritesContext {
    pub fn new(mut controller: FavoritesController<SharedStorage>, store: DashboardStore) -> Self {
        store_set_favorites(&store, controller.entries());
        controller.subscribe(move |entries| store_set_favorites(&store, entries));
        Self {
            controller: StoredValue::new_local(controller),
            store,
        }
    }

    /// Add or remove the entry's (kind, id)
    pub fn toggle(&self, entry: FavoriteEntry) {
        self.controller.update_value(|controller| {
            controller.toggle_favorite(entry);
        });
    }

    /// Reactive membership test
    pub fn is_favorited(&self, kind: FavoriteKind, id: &str) -> bool {
        is_favorited(&self.store.favorites().read(), kind, id)
    }

    /// Reactive snapshot, newest first
    pub fn entries(&self) -> Vec<FavoriteEntry> {
        self.store.favorites().get()
    }
}

/// Get the favorites context
pub fn use_favorites() -> FavoritesContext {
    expect_context::<FavoritesContext>()
}

/// Get the dashboard config
pub fn use_config() -> DashboardConfig {
    expect_context::<DashboardConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{FavoritesStore, MemoryStore, FAVORITES_STORAGE_KEY};
    use crate::store::DashboardState;
    use reactive_stores::Store;

    #[test]
    fn test_store_mirrors_controller() {
        let owner = Owner::new();
        owner.with(|| {
            let memory = Rc::new(MemoryStore::new());
            let storage: SharedStorage = memory.clone();
            let controller = FavoritesController::new(FavoritesStore::new(storage, FAVORITES_STORAGE_KEY));
            let store = Store::new(DashboardState::default());
            let favorites = FavoritesContext::new(controller, store);

            favorites.toggle(FavoriteEntry::trending("tr-001", "Met Gala 红毯造型", "Met Gala"));
            assert!(favorites.is_favorited(FavoriteKind::Trending, "tr-001"));
            assert_eq!(favorites.entries().len(), 1);
            assert!(memory.raw(FAVORITES_STORAGE_KEY).unwrap().contains("tr-001"));

            favorites.toggle(FavoriteEntry::trending("tr-001", "Met Gala 红毯造型", "Met Gala"));
            assert!(!favorites.is_favorited(FavoriteKind::Trending, "tr-001"));
            assert!(favorites.entries().is_empty());
        });
    }

    #[test]
    fn test_rehydrated_entries_visible_immediately() {
        let owner = Owner::new();
        owner.with(|| {
            let raw = r#"[{"kind":"hotItem","id":"hi-001","createdAt":"2024-05-06T08:30:00Z","brand":"The Row","name":"Margaux"}]"#;
            let storage: SharedStorage = Rc::new(MemoryStore::with_value(FAVORITES_STORAGE_KEY, raw));
            let controller = FavoritesController::new(FavoritesStore::new(storage, FAVORITES_STORAGE_KEY));
            let favorites = FavoritesContext::new(controller, Store::new(DashboardState::default()));

            assert!(favorites.is_favorited(FavoriteKind::HotItem, "hi-001"));
        });
    }
}
