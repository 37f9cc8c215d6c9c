//! Trend Detail Modal Component
//!
//! Cross-platform breakdown, key insight, trend drivers and curated
//! posts for one trending topic.

use chrono::Utc;
use leptos::prelude::*;

use crate::components::{FavoriteToggle, Modal, ModalCloseButton};
use crate::context::use_config;
use crate::domain::{CuratedPost, FavoriteEntry, PlatformShare, TrendDriver, TrendingTopicDetail};
use crate::format::{compact_number, relative_time, thousands_tenths, thousands_whole};
use crate::markdown::parse_markdown_inline;

#[component]
fn SectionHeading(
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] title_en: String,
) -> impl IntoView {
    view! {
        <h3 class="flex items-center gap-2 text-sm font-medium text-neutral-900 mb-3">
            <span>{icon}</span>
            <span>{title}</span>
            <span class="text-xs font-normal text-neutral-400">{title_en}</span>
        </h3>
    }
}

#[component]
fn PlatformBreakdownChart(shares: Vec<PlatformShare>) -> impl IntoView {
    view! {
        <div class="space-y-2">
            {shares.into_iter().map(|share| view! {
                <div class="flex items-center gap-3">
                    <div class="w-16 text-[11px] text-neutral-600 truncate">{share.platform.label()}</div>
                    <div class="flex-1 h-5 bg-neutral-100 rounded-full overflow-hidden">
                        <div
                            class="h-full rounded-full"
                            style=format!("width: {}%; background-color: {};", share.percentage, share.platform.color())
                        ></div>
                    </div>
                    <div class="w-12 text-right text-[11px] text-neutral-600">{format!("{}%", share.percentage)}</div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn TrendDriverCard(driver: TrendDriver) -> impl IntoView {
    let first_post = relative_time(driver.first_post_time, Utc::now());

    view! {
        <div class="relative bg-white border border-neutral-200 rounded-lg p-3 hover:border-neutral-300">
            {driver.is_first_mover.then(|| view! {
                <div class="absolute -top-2 -right-2 bg-amber-400 text-white text-[10px] px-1.5 py-0.5 rounded-full font-medium">
                    "🥇首发"
                </div>
            })}
            <div class="flex items-start gap-3">
                <div class="relative flex-shrink-0">
                    <img src=driver.avatar alt=driver.name.clone() class="w-10 h-10 rounded-full bg-neutral-200 object-cover" />
                    <div
                        class="absolute -bottom-1 -right-1 w-5 h-5 rounded-full flex items-center justify-center text-[10px] bg-white border border-neutral-200"
                        title=driver.platform.label()
                    >
                        {driver.platform.icon()}
                    </div>
                </div>
                <div class="flex-1 min-w-0">
                    <div class="flex items-center gap-1.5">
                        <h4 class="font-medium text-sm text-neutral-900 truncate">{driver.name}</h4>
                        <span class="text-[10px] px-1.5 py-0.5 bg-neutral-100 text-neutral-500 rounded">
                            {driver.role.label()}
                        </span>
                    </div>
                    <p class="text-[11px] text-neutral-400 mt-0.5">{format!("{}首发", first_post)}</p>
                </div>
            </div>
            <div class="flex items-center gap-1 mt-3 pt-3 border-t border-neutral-100 text-[11px]">
                <span class="text-neutral-400">"粉丝"</span>
                <span class="font-semibold text-neutral-700">{compact_number(driver.followers)}</span>
            </div>
        </div>
    }
}

/// Drivers in first-mover order; only `initial_count` until expanded
#[component]
fn TrendDriverList(drivers: Vec<TrendDriver>, initial_count: usize) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let total = drivers.len();
    let has_more = total > initial_count;
    let drivers = StoredValue::new(drivers);

    let visible = move || {
        let count = if expanded.get() { total } else { initial_count };
        drivers.with_value(|all| all.iter().take(count).cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="space-y-3">
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                <For
                    each=visible
                    key=|driver| driver.id.clone()
                    children=|driver| view! { <TrendDriverCard driver=driver /> }
                />
            </div>
            <Show when=move || has_more>
                <button
                    class="w-full py-2 text-xs text-neutral-500 hover:text-neutral-700 hover:bg-neutral-50 rounded-lg"
                    on:click=move |_| set_expanded.update(|v| *v = !*v)
                >
                    {move || if expanded.get() {
                        "收起".to_string()
                    } else {
                        format!("展开全部 {} 位", total)
                    }}
                </button>
            </Show>
        </div>
    }
}

#[component]
fn CuratedPostCard(post: CuratedPost) -> impl IntoView {
    let has_engagement = post.likes > 0 || post.comments > 0;

    view! {
        <a
            href=post.external_url
            target="_blank"
            rel="noopener noreferrer"
            class="group block rounded-lg overflow-hidden border border-neutral-200 hover:border-neutral-300"
        >
            <div class="aspect-square bg-neutral-100 relative overflow-hidden">
                <img src=post.thumbnail alt=post.description.clone() class="w-full h-full object-cover" />
                <div
                    class="absolute top-2 left-2 px-2 py-0.5 rounded text-[10px] text-white"
                    style=format!("background-color: {};", post.platform.color())
                >
                    {post.platform.label()}
                </div>
            </div>
            <div class="p-2">
                <p class="text-[11px] text-neutral-600 line-clamp-2">{post.description}</p>
                {has_engagement.then(|| view! {
                    <div class="flex gap-3 mt-1 text-[10px] text-neutral-400">
                        {(post.likes > 0).then(|| view! { <span>{format!("❤ {}", thousands_whole(post.likes))}</span> })}
                        {(post.comments > 0).then(|| view! { <span>{format!("💬 {}", thousands_tenths(post.comments))}</span> })}
                    </div>
                })}
            </div>
        </a>
    }
}

#[component]
pub fn TrendDetailModal(
    detail: TrendingTopicDetail,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let config = use_config();
    let TrendingTopicDetail { topic, detail } = detail;

    let entry = FavoriteEntry::trending(topic.id.clone(), topic.title_zh.clone(), topic.title_en.clone());
    let breakdown = detail.sorted_breakdown();
    let drivers = detail.ordered_drivers();
    let driver_total = drivers.len();
    let posts: Vec<CuratedPost> = detail
        .curated_posts
        .iter()
        .take(config.curated_post_limit)
        .cloned()
        .collect();
    let insight = parse_markdown_inline(&detail.key_insight);

    view! {
        <Modal on_close=on_close>
            <div class="px-6 py-4 border-b border-neutral-100 flex-shrink-0">
                <div class="flex items-start justify-between gap-4">
                    <div class="flex-1 min-w-0">
                        <h2 class="font-display text-xl tracking-tight text-neutral-900">{topic.title_zh}</h2>
                        <p class="text-sm text-neutral-500 mt-0.5">{topic.title_en}</p>
                    </div>
                    <ModalCloseButton on_close=on_close />
                </div>
                <div class="flex items-center gap-3 mt-3 text-sm">
                    <div class="flex items-center gap-1.5 px-2.5 py-1 bg-neutral-900 text-white rounded-full">
                        <span class="font-semibold">{topic.score}</span>
                        <span class=topic.direction.class()>{topic.direction.glyph()}</span>
                    </div>
                    <span class="text-neutral-500">{topic.timestamp}</span>
                    <span class="px-2 py-0.5 bg-neutral-100 text-neutral-600 rounded text-xs">{topic.source_label}</span>
                </div>
            </div>

            <div class="flex-1 overflow-y-auto px-6 py-4 space-y-6">
                <section>
                    <SectionHeading icon="📊" title="跨平台热度分布" title_en="Cross-Platform Breakdown" />
                    <PlatformBreakdownChart shares=breakdown />
                </section>

                <section>
                    <SectionHeading icon="💡" title="关键洞察" title_en="Key Insight" />
                    <div class="bg-gradient-to-r from-amber-50 to-orange-50 border border-amber-100 rounded-lg p-4">
                        <p class="text-sm text-neutral-700 leading-relaxed" inner_html=insight></p>
                    </div>
                </section>

                {(driver_total > 0).then(|| view! {
                    <section>
                        <SectionHeading icon="👗" title="谁在带这个风" title_en="Trend Drivers" />
                        <p class="-mt-2 mb-3 text-[10px] text-neutral-400">{format!("共 {} 位参与者", driver_total)}</p>
                        <TrendDriverList drivers=drivers initial_count=config.driver_initial_count />
                    </section>
                })}

                {(!posts.is_empty()).then(|| view! {
                    <section>
                        <SectionHeading icon="📸" title="精选内容" title_en="Curated Posts" />
                        <div class="grid grid-cols-2 gap-3">
                            {posts.into_iter().map(|post| view! { <CuratedPostCard post=post /> }).collect_view()}
                        </div>
                    </section>
                })}
            </div>

            <div class="px-6 py-3 border-t border-neutral-100 bg-neutral-50 flex items-center justify-end gap-3 flex-shrink-0">
                <FavoriteToggle entry=entry />
            </div>
        </Modal>
    }
}
