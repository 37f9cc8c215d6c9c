//! Collapsible Card Component

use leptos::prelude::*;

/// Section card whose body folds away; `summary` is shown in the header while folded.
#[component]
pub fn CollapsibleCard(
    #[prop(into)] title: String,
    #[prop(into, optional)] title_en: Option<String>,
    #[prop(into)] icon: String,
    #[prop(default = true)] default_expanded: bool,
    #[prop(into, optional)] summary: Option<String>,
    children: Children,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(default_expanded);

    view! {
        <div class="border border-neutral-200 rounded-lg overflow-hidden bg-white">
            <button
                class="w-full px-4 py-3 flex items-center justify-between gap-3 hover:bg-neutral-50 text-left"
                on:click=move |_| set_expanded.update(|v| *v = !*v)
            >
                <div class="flex items-center gap-2 min-w-0">
                    <span class="text-base flex-shrink-0">{icon}</span>
                    <h3 class="font-medium text-sm text-neutral-900 truncate">{title}</h3>
                    {title_en.map(|en| view! { <span class="text-xs text-neutral-400 hidden sm:inline">{en}</span> })}
                </div>
                <div class="flex items-center gap-2 flex-shrink-0">
                    {summary.map(|text| view! {
                        <Show when=move || !expanded.get()>
                            <span class="text-xs text-neutral-500 max-w-[150px] truncate hidden sm:inline">
                                {text.clone()}
                            </span>
                        </Show>
                    })}
                    <span class="text-neutral-400">{move || if expanded.get() { "▲" } else { "▼" }}</span>
                </div>
            </button>

            <div class="px-4 pb-4 pt-1 border-t border-neutral-100" class:hidden=move || !expanded.get()>
                {children()}
            </div>
        </div>
    }
}
