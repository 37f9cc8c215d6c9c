//! Trending Section Component
//!
//! Ranked list of global trending topics. Rows that have a detail
//! record open the trend detail modal.

use leptos::prelude::*;

use crate::components::{FavoriteToggle, TrendDetailModal};
use crate::context::use_config;
use crate::domain::{FavoriteEntry, TrendingTopic, TrendingTopicDetail};
use crate::format::rank_label;
use crate::store::{store_trending_detail, use_dashboard_store, DashboardStateStoreFields};

#[component]
fn TrendingRow(
    index: usize,
    topic: TrendingTopic,
    #[prop(into)] on_open: Callback<TrendingTopic>,
) -> impl IntoView {
    let entry = FavoriteEntry::trending(topic.id.clone(), topic.title_zh.clone(), topic.title_en.clone());
    let direction = topic.direction;
    let row_topic = topic.clone();

    view! {
        <article
            class="py-2 flex items-start gap-3 sm:gap-4 cursor-pointer hover:bg-neutral-50 -mx-2 px-2 rounded"
            on:click=move |_| on_open.run(row_topic.clone())
        >
            <div class="w-7 text-xs text-neutral-400 pt-0.5">{rank_label(index)}</div>
            <div class="flex-1 min-w-0">
                <div class="flex items-center justify-between gap-3">
                    <h3 class="text-sm font-medium text-neutral-900 truncate">{topic.title_zh}</h3>
                    <div class="flex items-center gap-2 text-xs text-neutral-500 whitespace-nowrap">
                        <span class=direction.class()>{direction.glyph()}</span>
                        <span>{topic.score}</span>
                        <FavoriteToggle entry=entry />
                    </div>
                </div>
                <div class="mt-0.5 flex flex-wrap items-center gap-2 text-[11px] text-neutral-500">
                    <span class="badge border-none bg-neutral-100 py-0">{topic.source_label}</span>
                    <span>{topic.timestamp}</span>
                </div>
            </div>
        </article>
    }
}

#[component]
pub fn TrendingSection() -> impl IntoView {
    let store = use_dashboard_store();
    let limit = use_config().trending_limit;
    let (selected, set_selected) = signal(None::<TrendingTopicDetail>);

    let rows = move || {
        store
            .trending()
            .read()
            .iter()
            .take(limit)
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let shown = move || store.trending().read().len().min(limit);

    let open_detail = move |topic: TrendingTopic| match store_trending_detail(&store, &topic) {
        Some(detail) => set_selected.set(Some(detail)),
        None => log::debug!("[TRENDING] No detail for {}", topic.id),
    };

    view! {
        <div class="editor-card h-full flex flex-col">
            <div class="flex items-center justify-between mb-2">
                <h2 class="section-title mb-0 flex items-baseline gap-1">
                    <span>"🔥 全球时尚热榜"</span>
                    <span class="text-xs font-normal text-neutral-500">"Global Fashion Trending"</span>
                </h2>
            </div>
            <p class="text-[11px] text-neutral-500 mb-2">
                "过去 24 小时社交媒体与搜索平台上被频繁提及的时尚事件 / 人物 / 话题"
            </p>

            <div class="divide-y divide-neutral-100 flex-1 overflow-y-auto max-h-[320px]">
                <For
                    each=rows
                    key=|(_, topic)| topic.id.clone()
                    children=move |(index, topic)| view! {
                        <TrendingRow index=index topic=topic on_open=open_detail />
                    }
                />
            </div>

            <div class="mt-2 pt-2 border-t border-neutral-100 text-center">
                <p class="text-[10px] text-neutral-400">
                    {move || format!("↕ 滚动查看全部 {} 条 · 点击词条查看详情", shown())}
                </p>
            </div>
        </div>

        {move || selected.get().map(|detail| view! {
            <TrendDetailModal detail=detail on_close=move || set_selected.set(None) />
        })}
    }
}
