//! Hot Items Modal Component

use leptos::prelude::*;

use crate::components::{HotItemCard, Modal, ModalCloseButton};
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

/// Every hot item, not just the section's first N
#[component]
pub fn HotItemsModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_dashboard_store();
    let items = move || store.hot_items().get();

    view! {
        <Modal on_close=on_close width_class="max-w-5xl">
            <div class="flex items-center justify-between px-6 py-4 border-b border-neutral-200">
                <div>
                    <h2 class="font-display text-xl tracking-wide">"👗 全部爆款单品"</h2>
                    <p class="text-[11px] text-neutral-500 mt-1">
                        {move || format!("共 {} 件单品", store.hot_items().read().len())}
                    </p>
                </div>
                <ModalCloseButton on_close=on_close />
            </div>
            <div class="flex-1 overflow-y-auto p-6">
                <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                    <For
                        each=items
                        key=|item| item.id.clone()
                        children=|item| view! { <HotItemCard item=item /> }
                    />
                </div>
            </div>
        </Modal>
    }
}
