//! Style Word Cloud Component
//!
//! Style / silhouette / color / material keywords sized and colored by
//! how often they came up, in a shuffled order.

use leptos::prelude::*;

use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::word_cloud::{keyword_tooltip, rotation_class, shuffle, weigh_keywords, WeightTier};

#[component]
pub fn StyleWordCloud() -> impl IntoView {
    let store = use_dashboard_store();

    // Shuffled once per keyword set, not on every render
    let cloud = Memo::new(move |_| {
        let mut weighted = weigh_keywords(&store.keywords().read());
        shuffle(&mut weighted, js_sys::Math::random);
        weighted
    });

    view! {
        <section id="keywords" class="editor-card bg-neutral-50/60">
            <div class="flex items-center justify-between mb-3">
                <h2 class="section-title mb-0">
                    "☁️ 风格关键词云"
                    <span class="text-xs font-normal text-neutral-500">"Style Keywords Cloud"</span>
                </h2>
            </div>
            <p class="text-[11px] text-neutral-500 mb-4">
                "按周维度聚合过去一段时间内反复出现的风格 / 廓形 / 颜色 / 材质关键词，热度越高，颜色越显眼。"
            </p>

            <div class="relative min-h-[280px] sm:min-h-[320px] border border-neutral-200 rounded-lg bg-white p-6 sm:p-8 flex flex-wrap items-center justify-center gap-x-4 gap-y-3 sm:gap-x-6 sm:gap-y-4">
                {move || cloud.get().into_iter().enumerate().map(|(index, (keyword, tier))| {
                    let class = format!(
                        "inline-block cursor-default hover:scale-110 hover:opacity-80 {} {} {}",
                        tier.color_class(),
                        tier.size_class(),
                        rotation_class(index)
                    );
                    let tooltip = keyword_tooltip(&keyword);
                    view! { <span class=class title=tooltip>{keyword.keyword_zh}</span> }
                }).collect_view()}
            </div>

            <div class="mt-4 flex flex-wrap items-center justify-center gap-4 text-[10px] text-neutral-500">
                {WeightTier::LEGEND.into_iter().map(|tier| view! {
                    <div class="flex items-center gap-1.5">
                        <span class=format!("w-3 h-3 rounded-full {}", tier.swatch_class())></span>
                        <span>{tier.legend_label()}</span>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
