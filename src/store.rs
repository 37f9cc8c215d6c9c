//! Global Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Fixture data is written once at startup; `favorites` is rewritten by
//! the favorites controller after every toggle.

use std::collections::HashMap;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::domain::{
    BrandUpdate, BrandUpdateDetail, FavoriteEntry, HotItem, StyleKeyword, TrendingDetail,
    TrendingTopic, TrendingTopicDetail,
};
use crate::fixtures::Fixtures;

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    pub trending: Vec<TrendingTopic>,
    /// Detail records keyed by topic id
    pub trending_details: HashMap<String, TrendingDetail>,
    pub brand_updates: Vec<BrandUpdate>,
    /// Detail records keyed by brand update id
    pub brand_details: HashMap<String, BrandUpdateDetail>,
    pub hot_items: Vec<HotItem>,
    pub keywords: Vec<StyleKeyword>,
    /// Mirror of the favorites controller, newest first
    pub favorites: Vec<FavoriteEntry>,
}

impl DashboardState {
    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        Self {
            trending: fixtures.trending,
            trending_details: fixtures.trending_details,
            brand_updates: fixtures.brand_updates,
            brand_details: fixtures.brand_details,
            hot_items: fixtures.hot_items,
            keywords: fixtures.keywords,
            favorites: Vec::new(),
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Join a trending row with its detail record, if it has one
pub fn store_trending_detail(store: &DashboardStore, topic: &TrendingTopic) -> Option<TrendingTopicDetail> {
    store
        .trending_details()
        .read()
        .get(&topic.id)
        .map(|detail| TrendingTopicDetail {
            topic: topic.clone(),
            detail: detail.clone(),
        })
}

/// Detail record for a brand update, if it has one
pub fn store_brand_detail(store: &DashboardStore, update_id: &str) -> Option<BrandUpdateDetail> {
    store.brand_details().read().get(update_id).cloned()
}

/// Replace the favorites mirror
pub fn store_set_favorites(store: &DashboardStore, entries: &[FavoriteEntry]) {
    *store.favorites().write() = entries.to_vec();
}
