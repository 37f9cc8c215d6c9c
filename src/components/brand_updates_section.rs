//! Brand Updates Section Component
//!
//! Runway and business news feed. Updates with a detail record open
//! the brand detail modal.

use leptos::prelude::*;

use crate::components::{BrandDetailModal, FavoriteToggle};
use crate::context::use_config;
use crate::domain::{BrandUpdate, BrandUpdateDetail, FavoriteEntry};
use crate::store::{store_brand_detail, use_dashboard_store, DashboardStateStoreFields};

#[component]
fn BrandUpdateRow(update: BrandUpdate, #[prop(into)] on_open: Callback<BrandUpdate>) -> impl IntoView {
    let entry = FavoriteEntry::brand_update(update.id.clone(), update.brand.clone(), update.title.clone());
    let initial = update.initial();
    let meta = format!("{} · {}", update.kind.list_label(), update.date);
    let row_update = update.clone();

    view! {
        <article
            class="border border-neutral-200 rounded-md px-3 py-2 bg-white/70 hover:bg-white cursor-pointer"
            on:click=move |_| on_open.run(row_update.clone())
        >
            <div class="flex items-center justify-between gap-2 mb-0.5">
                <div class="flex items-center gap-2">
                    <div class="h-6 w-6 rounded-full bg-neutral-900 text-[10px] text-white flex items-center justify-center flex-shrink-0">
                        {initial}
                    </div>
                    <div class="min-w-0">
                        <p class="truncate">
                            <span class="font-medium">{update.brand}</span>
                            <span class="text-neutral-400 mx-1">"·"</span>
                            <span class="text-neutral-500">{update.group}</span>
                        </p>
                        <p class="text-[10px] text-neutral-400">{meta}</p>
                    </div>
                </div>
                <FavoriteToggle entry=entry />
            </div>
            <p class="text-[11px] text-neutral-800 leading-snug line-clamp-1">{update.title}</p>
            <p class="text-[10px] text-neutral-500 leading-snug line-clamp-1 mt-0.5">{update.summary}</p>
        </article>
    }
}

#[component]
pub fn BrandUpdatesSection() -> impl IntoView {
    let store = use_dashboard_store();
    let limit = use_config().brand_update_limit;
    let (selected, set_selected) = signal(None::<(BrandUpdate, BrandUpdateDetail)>);

    let rows = move || {
        store
            .brand_updates()
            .read()
            .iter()
            .take(limit)
            .cloned()
            .collect::<Vec<_>>()
    };
    let shown = move || store.brand_updates().read().len().min(limit);

    let open_detail = move |update: BrandUpdate| match store_brand_detail(&store, &update.id) {
        Some(detail) => set_selected.set(Some((update, detail))),
        None => log::debug!("[BRANDS] No detail for {}", update.id),
    };

    view! {
        <div id="brands" class="editor-card h-full flex flex-col">
            <div class="flex items-center justify-between mb-2">
                <h2 class="section-title mb-0">
                    "🏢 品牌动态"
                    <span class="text-xs font-normal text-neutral-500 ml-1">"Brand Intelligence"</span>
                </h2>
            </div>
            <p class="text-[11px] text-neutral-500 mb-2">
                "汇总全球重点品牌的秀场发布与商业动向，按时间排序，帮助你快速浏览行业「今天在发生什么」。"
            </p>

            <div class="space-y-1.5 text-[11px] text-neutral-700 flex-1 overflow-y-auto max-h-[320px]">
                <For
                    each=rows
                    key=|update| update.id.clone()
                    children=move |update| view! { <BrandUpdateRow update=update on_open=open_detail /> }
                />
            </div>

            <div class="mt-2 pt-2 border-t border-neutral-100 text-center">
                <p class="text-[10px] text-neutral-400">
                    {move || format!("↕ 滚动查看全部 {} 条", shown())}
                </p>
            </div>
        </div>

        {move || selected.get().map(|(update, detail)| view! {
            <BrandDetailModal update=update detail=detail on_close=move || set_selected.set(None) />
        })}
    }
}
