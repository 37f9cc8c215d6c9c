//! Favorite Toggle Component
//!
//! ♥/♡ pill that adds or removes one entry from the favorites list.

use leptos::prelude::*;

use crate::context::use_favorites;
use crate::domain::FavoriteEntry;

/// The entry carries its own display fields; its timestamp is replaced
/// with the click time when it is added.
#[component]
pub fn FavoriteToggle(entry: FavoriteEntry) -> impl IntoView {
    let favorites = use_favorites();
    let kind = entry.kind();
    let id = entry.id().to_string();
    let active = Memo::new(move |_| favorites.is_favorited(kind, &id));

    view! {
        <button
            type="button"
            aria-pressed=move || active.get().to_string()
            class=move || if active.get() {
                "inline-flex items-center rounded-full border px-2.5 py-1 text-[11px] border-brand bg-brand text-white"
            } else {
                "inline-flex items-center rounded-full border px-2.5 py-1 text-[11px] border-neutral-300 text-neutral-500 hover:bg-neutral-100"
            }
            on:click=move |ev| {
                ev.stop_propagation();
                favorites.toggle(entry.clone());
            }
        >
            <span class="mr-1">{move || if active.get() { "♥" } else { "♡" }}</span>
            <span>"收藏"</span>
        </button>
    }
}
