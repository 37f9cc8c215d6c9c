//! Brand Detail Modal Component
//!
//! Latest news (markdown body), milestone timeline and financial
//! highlights for one brand update.

use leptos::prelude::*;

use crate::components::{CollapsibleCard, FavoriteToggle, MilestoneTimeline, Modal, ModalCloseButton};
use crate::domain::{BrandUpdate, BrandUpdateDetail, FavoriteEntry, Revenue};
use crate::format::{change_label, currency, Change};
use crate::markdown::parse_markdown;

#[component]
fn ChangeIndicator(value: f64) -> impl IntoView {
    view! {
        <span class=format!("text-xs font-medium {}", Change::of(value).class())>{change_label(value)}</span>
    }
}

#[component]
fn RevenueTile(#[prop(into)] period: String, revenue: Revenue) -> impl IntoView {
    view! {
        <div class="bg-neutral-50 rounded-lg p-3">
            <p class="text-[11px] text-neutral-500 mb-1">{period}</p>
            <p class="text-xl font-semibold text-neutral-900">
                {currency(revenue.value, &revenue.unit, &revenue.currency)}
            </p>
            <div class="mt-1">
                <ChangeIndicator value=revenue.yoy_change />
                <span class="text-[10px] text-neutral-400 ml-1">"同比"</span>
            </div>
        </div>
    }
}

#[component]
pub fn BrandDetailModal(
    update: BrandUpdate,
    detail: BrandUpdateDetail,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let entry = FavoriteEntry::brand_update(update.id.clone(), update.brand.clone(), update.title.clone());
    let news = detail.news_detail.clone();
    let financials = detail.financials.clone();
    let monogram = detail.monogram();

    let news_summary = format!("{}...", update.title.chars().take(20).collect::<String>());
    let milestone_summary = format!("近3年 {} 个关键事件", detail.milestones.len());
    let annual = financials.annual_revenue.clone();
    let quarterly = financials.quarterly_revenue.clone();
    let financial_summary = format!(
        "{}年营收 {}",
        annual.year,
        currency(annual.value, &annual.unit, &annual.currency)
    );
    let annual_period = format!("{} 年度营收", annual.year);
    let quarterly_period = format!(
        "{} {} 营收",
        quarterly.year,
        quarterly.quarter.clone().unwrap_or_default()
    );
    let news_html = parse_markdown(&news.content);

    view! {
        <Modal on_close=on_close>
            <div class="px-6 py-4 bg-white border-b border-neutral-100 flex-shrink-0">
                <div class="flex items-start justify-between gap-4">
                    <div class="flex items-start gap-3 min-w-0">
                        <div class="w-12 h-12 rounded-full bg-neutral-900 text-white flex items-center justify-center text-lg font-medium flex-shrink-0">
                            {monogram}
                        </div>
                        <div class="min-w-0">
                            <h2 class="font-display text-lg tracking-tight text-neutral-900">{detail.brand_name.clone()}</h2>
                            <div class="flex items-center gap-2 mt-0.5 text-sm">
                                <span class="text-neutral-500">{detail.brand_name_zh.clone()}</span>
                                <span class="text-neutral-300">"·"</span>
                                <span class="text-neutral-400">{detail.group.clone()}</span>
                            </div>
                        </div>
                    </div>
                    <ModalCloseButton on_close=on_close />
                </div>
            </div>

            <div class="flex-1 overflow-y-auto px-6 py-4 space-y-4 bg-neutral-50">
                <CollapsibleCard icon="📰" title="本次动态" title_en="Latest Update" summary=news_summary>
                    <div class="space-y-3">
                        <div class="flex items-center gap-2">
                            <span
                                class="px-2 py-0.5 text-[11px] rounded-full text-white"
                                style=format!("background-color: {};", update.kind.color())
                            >
                                {update.kind.badge_label()}
                            </span>
                            <span class="text-xs text-neutral-400">{update.date.clone()}</span>
                        </div>
                        <div>
                            <h3 class="text-base font-medium text-neutral-900">{news.title_zh.clone()}</h3>
                            <p class="text-sm text-neutral-500 mt-0.5">{news.title_en.clone()}</p>
                        </div>
                        {news.image_url.clone().map(|src| view! {
                            <div class="relative rounded-lg overflow-hidden bg-neutral-100">
                                <img src=src alt=news.title_zh.clone() class="w-full h-48 object-cover" />
                            </div>
                        })}
                        <div class="prose prose-sm text-neutral-700 leading-relaxed" inner_html=news_html></div>
                        <a
                            href=news.source_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="inline-flex items-center gap-1.5 text-sm text-brand hover:underline"
                        >
                            "阅读原文 ↗"
                        </a>
                    </div>
                </CollapsibleCard>

                <CollapsibleCard icon="📅" title="品牌大事记" title_en="Brand Milestones (3Y)" summary=milestone_summary>
                    <MilestoneTimeline detail=detail.clone() />
                </CollapsibleCard>

                <CollapsibleCard
                    icon="📊"
                    title="关键经营数据"
                    title_en="Financial Highlights"
                    default_expanded=false
                    summary=financial_summary
                >
                    <div class="space-y-4">
                        <div class="grid grid-cols-2 gap-4">
                            <RevenueTile period=annual_period revenue=annual.clone() />
                            <RevenueTile period=quarterly_period revenue=quarterly.clone() />
                        </div>
                        <div>
                            <p class="text-xs font-medium text-neutral-700 mb-2">"区域营收分布"</p>
                            <div class="space-y-2">
                                {financials.region_breakdown.clone().into_iter().map(|region| view! {
                                    <div class="flex items-center gap-3">
                                        <div class="w-24 text-xs text-neutral-600 truncate">{region.region}</div>
                                        <div class="flex-1 h-4 bg-neutral-100 rounded-full overflow-hidden">
                                            <div class="h-full bg-brand rounded-full" style=format!("width: {}%;", region.percentage)></div>
                                        </div>
                                        <div class="w-10 text-right text-xs text-neutral-600">{format!("{}%", region.percentage)}</div>
                                        <div class="w-14 text-right"><ChangeIndicator value=region.yoy_change /></div>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                        <div class="pt-2 border-t border-neutral-100 flex items-center justify-between text-[10px] text-neutral-400">
                            <span>{format!("数据来源: {}", financials.data_source)}</span>
                            <span>{format!("更新于 {}", financials.last_updated)}</span>
                        </div>
                    </div>
                </CollapsibleCard>
            </div>

            <div class="px-6 py-3 border-t border-neutral-100 bg-white flex items-center justify-end gap-3 flex-shrink-0">
                <FavoriteToggle entry=entry />
            </div>
        </Modal>
    }
}
