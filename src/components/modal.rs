//! Modal Component
//!
//! Overlay dialog shell shared by the detail views. Closes on overlay
//! click, Escape, or the close button; page scrolling is locked while
//! it is mounted.

use leptos::ev;
use leptos::prelude::*;

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Err(err) = body.style().set_property("overflow", value) {
        log::warn!("[MODAL] Failed to set body overflow: {:?}", err);
    }
}

/// Overlay + panel. Render it only while open; unmounting restores scrolling.
#[component]
pub fn Modal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into, default = "max-w-2xl".to_string())] width_class: String,
    children: Children,
) -> impl IntoView {
    set_body_scroll_locked(true);

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });

    on_cleanup(move || {
        escape_listener.remove();
        set_body_scroll_locked(false);
    });

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm"
            on:click=move |_| on_close.run(())
        >
            <div
                class=format!("bg-white rounded-xl shadow-2xl w-full {} max-h-[90vh] overflow-hidden flex flex-col", width_class)
                on:click=|ev| ev.stop_propagation()
            >
                {children()}
            </div>
        </div>
    }
}

/// Round × button for modal headers
#[component]
pub fn ModalCloseButton(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="w-8 h-8 flex items-center justify-center rounded-full hover:bg-neutral-100 text-neutral-400 hover:text-neutral-600 flex-shrink-0"
            aria-label="关闭"
            on:click=move |_| on_close.run(())
        >
            "×"
        </button>
    }
}
