//! Milestone Timeline Component
//!
//! Vertical brand event timeline, newest first, with a type filter.

use leptos::prelude::*;

use crate::domain::{BrandUpdateDetail, MilestoneType};
use crate::format::{full_date, month_stamp};

const FILTER_ACTIVE: &str = "flex items-center gap-1 px-2.5 py-1 text-[11px] rounded-full bg-neutral-900 text-white";
const FILTER_IDLE: &str = "flex items-center gap-1 px-2.5 py-1 text-[11px] rounded-full bg-neutral-100 text-neutral-600 hover:bg-neutral-200";

#[component]
fn FilterPill(
    value: Option<MilestoneType>,
    filter: ReadSignal<Option<MilestoneType>>,
    set_filter: WriteSignal<Option<MilestoneType>>,
) -> impl IntoView {
    view! {
        <button
            class=move || if filter.get() == value { FILTER_ACTIVE } else { FILTER_IDLE }
            on:click=move |_| set_filter.set(value)
        >
            {match value {
                Some(kind) => view! { <span>{kind.icon()}</span><span>{kind.label()}</span> }.into_any(),
                None => view! { <span>"全部"</span> }.into_any(),
            }}
        </button>
    }
}

#[component]
pub fn MilestoneTimeline(detail: BrandUpdateDetail) -> impl IntoView {
    let (filter, set_filter) = signal(None::<MilestoneType>);
    let detail = StoredValue::new(detail);

    let milestones = move || detail.with_value(|d| d.milestones_filtered(filter.get()));

    view! {
        <div class="space-y-3">
            <div class="flex flex-wrap gap-2">
                <FilterPill value=None filter=filter set_filter=set_filter />
                {MilestoneType::ALL
                    .into_iter()
                    .map(|kind| view! { <FilterPill value=Some(kind) filter=filter set_filter=set_filter /> })
                    .collect_view()}
            </div>

            <div class="relative pl-6">
                <div class="absolute left-[9px] top-2 bottom-2 w-0.5 bg-neutral-200"></div>
                <For
                    each=milestones
                    key=|milestone| milestone.id.clone()
                    children=|milestone| {
                        let kind = milestone.kind;
                        view! {
                            <div class="relative pb-4 last:pb-0">
                                <div
                                    class="absolute left-[-15px] top-1 w-3 h-3 rounded-full border-2 border-white shadow-sm"
                                    style=format!("background-color: {};", kind.color())
                                ></div>
                                <div class="flex items-center gap-2 mb-0.5">
                                    <span class="text-[10px] text-neutral-400 font-mono" title=full_date(milestone.date)>
                                        {month_stamp(milestone.date)}
                                    </span>
                                    <span
                                        class="text-[10px] px-1.5 py-0.5 rounded"
                                        style=format!("background-color: {}15; color: {};", kind.color(), kind.color())
                                    >
                                        {format!("{} {}", kind.icon(), kind.label())}
                                    </span>
                                </div>
                                <h4 class="text-sm font-medium text-neutral-900">{milestone.title}</h4>
                                <p class="text-xs text-neutral-500 mt-0.5">{milestone.description}</p>
                            </div>
                        }
                    }
                />
                <Show when=move || milestones().is_empty()>
                    <div class="py-4 text-center text-sm text-neutral-400">"暂无相关事件"</div>
                </Show>
            </div>
        </div>
    }
}
