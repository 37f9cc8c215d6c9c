//! Favorites Controller
//!
//! Owns the in-memory favorites list, mirrors every change to the
//! store and notifies subscribers after each mutation.

use chrono::{DateTime, Utc};
use crate::domain::{FavoriteEntry, FavoriteKind};
use crate::repository::{is_favorited, FavoritesStore, KeyValueStore};

type Listener = Box<dyn Fn(&[FavoriteEntry])>;

/// Handle returned by [`FavoritesController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

pub struct FavoritesController<S> {
    store: FavoritesStore<S>,
    entries: Vec<FavoriteEntry>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u32,
}

impl<S: KeyValueStore> FavoritesController<S> {
    /// Rehydrate from the store
    pub fn new(store: FavoritesStore<S>) -> Self {
        let entries = store.load();
        log::info!("[FAVORITES] Rehydrated {} entries from '{}'", entries.len(), store.key());
        Self {
            store,
            entries,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current list, newest first
    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn is_favorited(&self, kind: FavoriteKind, id: &str) -> bool {
        is_favorited(&self.entries, kind, id)
    }

    pub fn toggle_favorite(&mut self, entry: FavoriteEntry) -> ToggleOutcome {
        self.toggle_favorite_at(entry, Utc::now())
    }

    /// Remove the entry if its (kind, id) is present, otherwise prepend it
    /// stamped with `now`. The resulting list is saved immediately.
    pub fn toggle_favorite_at(&mut self, entry: FavoriteEntry, now: DateTime<Utc>) -> ToggleOutcome {
        let kind = entry.kind();
        let id = entry.id().to_string();

        let outcome = if self.is_favorited(kind, &id) {
            self.entries.retain(|existing| !existing.refers_to(kind, &id));
            ToggleOutcome::Removed
        } else {
            self.entries.insert(0, entry.with_created_at(now));
            ToggleOutcome::Added
        };
        log::debug!("[FAVORITES] {:?} {} '{}' ({} total)", outcome, kind.as_str(), id, self.entries.len());

        self.store.save(&self.entries);
        self.notify();
        outcome
    }

    /// Register a listener called with the full list after every mutation
    pub fn subscribe(&mut self, listener: impl Fn(&[FavoriteEntry]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MemoryStore, FAVORITES_STORAGE_KEY};
    use chrono::{Duration, TimeZone};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap()
    }

    fn controller(storage: &Rc<MemoryStore>) -> FavoritesController<Rc<MemoryStore>> {
        FavoritesController::new(FavoritesStore::new(storage.clone(), FAVORITES_STORAGE_KEY))
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let storage = Rc::new(MemoryStore::new());
        let mut favorites = controller(&storage);

        let entry = FavoriteEntry::trending("t1", "红色高跟鞋", "Red Heels");
        assert_eq!(favorites.toggle_favorite_at(entry.clone(), t0()), ToggleOutcome::Added);
        assert!(favorites.is_favorited(FavoriteKind::Trending, "t1"));

        assert_eq!(favorites.toggle_favorite_at(entry, t0()), ToggleOutcome::Removed);
        assert!(!favorites.is_favorited(FavoriteKind::Trending, "t1"));
        assert!(favorites.entries().is_empty());
    }

    #[test]
    fn test_double_toggle_restores_previous_list() {
        let storage = Rc::new(MemoryStore::new());
        let mut favorites = controller(&storage);
        favorites.toggle_favorite_at(FavoriteEntry::hot_item("h1", "Miu Miu", "Ballet flats", ""), t0());
        favorites.toggle_favorite_at(FavoriteEntry::brand_update("b1", "Gucci", "New creative director"), t0());
        let before = favorites.entries().to_vec();

        // Display fields may differ, only (kind, id) identifies the record
        favorites.toggle_favorite_at(FavoriteEntry::trending("t9", "A", "A"), t0());
        favorites.toggle_favorite_at(FavoriteEntry::trending("t9", "B", "B"), t0() + Duration::hours(1));

        assert_eq!(favorites.entries(), before.as_slice());
    }

    #[test]
    fn test_newest_first_and_stamped_at_toggle_time() {
        let storage = Rc::new(MemoryStore::new());
        let mut favorites = controller(&storage);

        favorites.toggle_favorite_at(FavoriteEntry::trending("t1", "A", "A"), t0());
        favorites.toggle_favorite_at(FavoriteEntry::trending("t2", "B", "B"), t0() + Duration::minutes(5));

        let ids: Vec<_> = favorites.entries().iter().map(|e| e.id().to_string()).collect();
        assert_eq!(ids, vec!["t2", "t1"]);
        assert_eq!(favorites.entries()[0].created_at(), t0() + Duration::minutes(5));
        assert_eq!(favorites.entries()[1].created_at(), t0());
    }

    #[test]
    fn test_same_id_different_kind_are_independent() {
        let storage = Rc::new(MemoryStore::new());
        let mut favorites = controller(&storage);

        favorites.toggle_favorite_at(FavoriteEntry::trending("1", "A", "A"), t0());
        favorites.toggle_favorite_at(FavoriteEntry::hot_item("1", "B", "C", ""), t0());

        assert_eq!(favorites.entries().len(), 2);
        assert!(favorites.is_favorited(FavoriteKind::Trending, "1"));
        assert!(favorites.is_favorited(FavoriteKind::HotItem, "1"));
        assert!(!favorites.is_favorited(FavoriteKind::BrandUpdate, "1"));
    }

    #[test]
    fn test_every_toggle_is_persisted_and_rehydrated() {
        let storage = Rc::new(MemoryStore::new());
        {
            let mut favorites = controller(&storage);
            favorites.toggle_favorite_at(FavoriteEntry::trending("t1", "A", "A"), t0());
            favorites.toggle_favorite_at(FavoriteEntry::brand_update("b1", "Dior", "Cruise"), t0());
        }

        let reloaded = controller(&storage);
        assert!(reloaded.is_favorited(FavoriteKind::Trending, "t1"));
        assert!(reloaded.is_favorited(FavoriteKind::BrandUpdate, "b1"));
        assert_eq!(reloaded.entries()[0].id(), "b1");
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let storage = Rc::new(MemoryStore::new());
        storage.set_fail_writes(true);
        let mut favorites = controller(&storage);

        favorites.toggle_favorite_at(FavoriteEntry::trending("t1", "A", "A"), t0());

        assert!(favorites.is_favorited(FavoriteKind::Trending, "t1"));
        assert_eq!(storage.raw(FAVORITES_STORAGE_KEY), None);
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let storage = Rc::new(MemoryStore::with_value(FAVORITES_STORAGE_KEY, "not json"));
        let favorites = controller(&storage);
        assert!(favorites.entries().is_empty());
    }

    #[test]
    fn test_listeners_notified_after_each_mutation() {
        let storage = Rc::new(MemoryStore::new());
        let mut favorites = controller(&storage);
        let seen: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let sub = favorites.subscribe(move |entries| sink.borrow_mut().push(entries.len()));

        favorites.toggle_favorite_at(FavoriteEntry::trending("t1", "A", "A"), t0());
        favorites.toggle_favorite_at(FavoriteEntry::trending("t2", "B", "B"), t0());
        favorites.toggle_favorite_at(FavoriteEntry::trending("t1", "A", "A"), t0());
        assert_eq!(*seen.borrow(), vec![1, 2, 1]);

        assert!(favorites.unsubscribe(sub));
        assert!(!favorites.unsubscribe(sub));
        favorites.toggle_favorite_at(FavoriteEntry::trending("t3", "C", "C"), t0());
        assert_eq!(seen.borrow().len(), 3);
    }
}
