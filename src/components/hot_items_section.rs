//! Hot Items Section Component
//!
//! Grid of best-selling items with a "view all" modal.

use leptos::prelude::*;

use crate::components::{FavoriteToggle, HotItemsModal};
use crate::context::use_config;
use crate::domain::{FavoriteEntry, HotItem};
use crate::format::price;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// One product card, shared by the grid and the modal
#[component]
pub fn HotItemCard(item: HotItem) -> impl IntoView {
    let entry = FavoriteEntry::hot_item(item.id.clone(), item.brand.clone(), item.name.clone(), item.image_url.clone());
    let price_label = format!("{} {}", item.currency, price(item.price));

    let picture = if item.image_url.is_empty() {
        view! {
            <div class="aspect-[4/3] bg-neutral-100 flex items-center justify-center text-[11px] text-neutral-400">
                {format!("图片占位 · {}", item.brand)}
            </div>
        }
        .into_any()
    } else {
        view! {
            <img src=item.image_url.clone() alt=item.name.clone() class="aspect-[4/3] w-full object-cover bg-neutral-100" loading="lazy" />
        }
        .into_any()
    };

    view! {
        <article class="bg-white border border-neutral-200 rounded-md overflow-hidden flex flex-col hover:shadow-md">
            {picture}
            <div class="px-3.5 py-3 flex-1 flex flex-col gap-2">
                <div class="flex items-start justify-between gap-2">
                    <div>
                        <p class="text-[11px] uppercase tracking-wide text-neutral-500">{item.brand}</p>
                        <h3 class="text-sm text-neutral-900 line-clamp-2">{item.name}</h3>
                    </div>
                    <FavoriteToggle entry=entry />
                </div>
                <div class="flex items-center justify-between text-[11px] text-neutral-600">
                    <span>{price_label}</span>
                    <span>{format!("热度指数 {}", item.score)}</span>
                </div>
                <a
                    href=item.buy_link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="mt-1 text-[11px] underline-offset-2 hover:underline text-neutral-800"
                >
                    "前往购买"
                </a>
            </div>
        </article>
    }
}

#[component]
pub fn HotItemsSection() -> impl IntoView {
    let store = use_dashboard_store();
    let display_count = use_config().hot_item_count;
    let (modal_open, set_modal_open) = signal(false);

    let shown = move || {
        store
            .hot_items()
            .read()
            .iter()
            .take(display_count)
            .cloned()
            .collect::<Vec<_>>()
    };
    let total = move || store.hot_items().read().len();

    view! {
        <section id="items" class="editor-card bg-neutral-50/60">
            <div class="flex items-center justify-between mb-3">
                <h2 class="section-title mb-0">
                    "👗 爆款单品"
                    <span class="text-xs font-normal text-neutral-500">"Hot Items · 模拟数据"</span>
                </h2>
            </div>

            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                <For
                    each=shown
                    key=|item| item.id.clone()
                    children=|item| view! { <HotItemCard item=item /> }
                />
            </div>

            <Show when=move || { total() > display_count }>
                <div class="mt-4 text-center">
                    <button
                        class="inline-flex items-center gap-2 px-4 py-2 text-sm text-neutral-700 bg-white border border-neutral-300 rounded-full hover:bg-neutral-50"
                        on:click=move |_| set_modal_open.set(true)
                    >
                        {move || format!("查看全部 {} 件单品 →", total())}
                    </button>
                </div>
            </Show>
        </section>

        <Show when=move || modal_open.get()>
            <HotItemsModal on_close=move || set_modal_open.set(false) />
        </Show>
    }
}
