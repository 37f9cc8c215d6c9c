//! Daily Briefing Component
//!
//! Hero card summarising the day's headline signals.

use leptos::prelude::*;

pub struct BriefingData {
    pub hot_topic: &'static str,
    pub hot_topic_source: &'static str,
    pub style_keyword: &'static str,
    pub style_keyword_en: &'static str,
    pub hot_category: &'static str,
    pub focus_area: &'static str,
}

pub const TODAY_BRIEFING: BriefingData = BriefingData {
    hot_topic: "Met Gala 红毯造型",
    hot_topic_source: "Social / Search",
    style_keyword: "安静奢华",
    style_keyword_en: "Quiet Luxury",
    hot_category: "红色高跟鞋 · 轻奢包袋",
    focus_area: "奢侈品牌女装 / 包袋",
};

#[component]
fn BriefingTile(
    label: &'static str,
    value: &'static str,
    #[prop(optional)] note: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-neutral-50 rounded-md p-2.5">
            <p class="uppercase tracking-wide mb-1 text-neutral-400 text-[10px]">{label}</p>
            <p class="text-neutral-900 font-medium">{value}</p>
            {note.map(|n| view! { <p class="text-neutral-500 text-[10px] mt-0.5">{n}</p> })}
        </div>
    }
}

#[component]
pub fn DailyBriefing() -> impl IntoView {
    let data = TODAY_BRIEFING;

    view! {
        <div class="editor-card h-full flex flex-col">
            <div class="badge mb-3">"Daily Briefing · 当日总览"</div>
            <h1 class="font-display text-2xl sm:text-3xl tracking-tight leading-snug mb-3">
                "今天的全球时尚长什么样？"
            </h1>
            <p class="text-sm text-neutral-700 leading-relaxed mb-4">
                "基于过去 24 小时的社交讨论、搜索趋势与电商信号，我们为你汇总出今日最值得关注的时尚情报。"
            </p>
            <div class="flex-1 grid grid-cols-1 sm:grid-cols-2 gap-3 text-[11px] text-neutral-600 content-center">
                <BriefingTile label="🔥 今日最高热度话题" value=data.hot_topic note=data.hot_topic_source />
                <BriefingTile label="📈 上升最快风格关键词" value=data.style_keyword note=data.style_keyword_en />
                <BriefingTile label="🛒 电商侧爆发品类" value=data.hot_category />
                <BriefingTile label="✨ 适合你的今日焦点" value=data.focus_area />
            </div>
        </div>
    }
}
