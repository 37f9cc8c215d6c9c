//! Fashion Radar App
//!
//! Root component: loads fixtures, rehydrates favorites and lays out
//! the dashboard sections.

use std::rc::Rc;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    BrandUpdatesSection, DailyBriefing, FavoritesPanel, HotItemsSection, StyleWordCloud,
    TodayAngle, TrendingSection,
};
use crate::config::DashboardConfig;
use crate::context::{FavoritesContext, SharedStorage};
use crate::favorites::FavoritesController;
use crate::fixtures::Fixtures;
use crate::repository::{BrowserStorage, FavoritesStore};
use crate::store::DashboardState;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    // State
    let store = Store::new(DashboardState::from_fixtures(Fixtures::load()));

    if !BrowserStorage::is_available() {
        log::warn!("[APP] localStorage unavailable, favorites will not survive a reload");
    }
    let storage: SharedStorage = Rc::new(BrowserStorage);
    let controller = FavoritesController::new(FavoritesStore::new(storage, config.favorites_key.clone()));

    // Provide context to all children
    provide_context(store);
    provide_context(FavoritesContext::new(controller, store));
    provide_context(config);

    view! {
        <div class="min-h-screen bg-neutral-100/60 text-neutral-900">
            <main class="max-w-6xl mx-auto px-4 py-6 space-y-6">
                <div class="grid gap-6 lg:grid-cols-[2fr,1fr]">
                    <DailyBriefing />
                    <TodayAngle />
                </div>

                <div class="grid gap-6 lg:grid-cols-2">
                    <TrendingSection />
                    <BrandUpdatesSection />
                </div>

                <HotItemsSection />
                <StyleWordCloud />
                <FavoritesPanel />
            </main>
        </div>
    }
}
