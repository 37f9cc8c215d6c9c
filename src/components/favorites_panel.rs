//! Favorites Panel Component
//!
//! Everything the user has favorited, newest first, rendered from the
//! display fields each entry carries.

use chrono::Utc;
use leptos::prelude::*;

use crate::context::use_favorites;
use crate::domain::FavoriteEntry;
use crate::format::relative_time;

#[component]
fn FavoriteRow(entry: FavoriteEntry) -> impl IntoView {
    let favorites = use_favorites();
    let saved = relative_time(entry.created_at(), Utc::now());
    let thumbnail = match &entry {
        FavoriteEntry::HotItem(item) if !item.image_url.is_empty() => Some(item.image_url.clone()),
        FavoriteEntry::Trending(_) | FavoriteEntry::BrandUpdate(_) | FavoriteEntry::HotItem(_) => None,
    };
    let title = entry.title().to_string();
    let subtitle = entry.subtitle().to_string();
    let kind_label = entry.kind().label();

    view! {
        <li class="flex items-center gap-3 py-2">
            {thumbnail.map(|src| view! { <img src=src class="w-8 h-8 rounded object-cover bg-neutral-100" /> })}
            <div class="flex-1 min-w-0">
                <p class="text-sm text-neutral-900 truncate">{title}</p>
                <p class="text-[11px] text-neutral-500 truncate">
                    <span class="badge border-none bg-neutral-100 py-0 mr-1">{kind_label}</span>
                    {subtitle}
                </p>
            </div>
            <span class="text-[10px] text-neutral-400 whitespace-nowrap">{saved}</span>
            <button
                class="text-neutral-400 hover:text-rose-500 text-sm"
                title="取消收藏"
                on:click=move |_| favorites.toggle(entry.clone())
            >
                "♥"
            </button>
        </li>
    }
}

#[component]
pub fn FavoritesPanel() -> impl IntoView {
    let favorites = use_favorites();
    let entries = move || favorites.entries();

    view! {
        <section id="favorites" class="editor-card">
            <h2 class="section-title mb-2">
                "♥ 我的收藏"
                <span class="text-xs font-normal text-neutral-500 ml-1">
                    {move || format!("Favorites · {}", entries().len())}
                </span>
            </h2>
            <Show
                when=move || !entries().is_empty()
                fallback=|| view! {
                    <p class="py-6 text-center text-[11px] text-neutral-400">"还没有收藏，点击任意条目上的 ♡ 收藏"</p>
                }
            >
                <ul class="divide-y divide-neutral-100">
                    <For
                        each=entries
                        key=|entry| format!("{}:{}", entry.kind().as_str(), entry.id())
                        children=|entry| view! { <FavoriteRow entry=entry /> }
                    />
                </ul>
            </Show>
        </section>
    }
}
