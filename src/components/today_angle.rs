//! Today Angle Component
//!
//! Editor picks: short insider notes from the desk.

use leptos::prelude::*;

struct EditorPost {
    id: &'static str,
    author: &'static str,
    content: &'static str,
    time: &'static str,
}

const EDITOR_POSTS: [EditorPost; 3] = [
    EditorPost {
        id: "1",
        author: "时尚编辑 A",
        content: "今天的 Met Gala 红毯太精彩了，Zendaya 的造型绝对是全场焦点！",
        time: "2 小时前",
    },
    EditorPost {
        id: "2",
        author: "买手 Linda",
        content: "安静奢华风格持续升温，The Row 的包袋询问度暴增。",
        time: "4 小时前",
    },
    EditorPost {
        id: "3",
        author: "趋势分析师",
        content: "红色系单品本周搜索量上涨 45%，预计将成为下季主打色。",
        time: "5 小时前",
    },
];

#[component]
pub fn TodayAngle() -> impl IntoView {
    view! {
        <div class="editor-card h-full flex flex-col">
            <div class="badge mb-3">"Insider · 业内视角"</div>
            <h2 class="font-display text-lg mb-3">"今日编辑精选"</h2>
            <div class="space-y-3 flex-1">
                {EDITOR_POSTS.iter().map(|post| view! {
                    <div class="border-l-2 border-brand/30 pl-3 py-1" data-post=post.id>
                        <p class="text-sm text-neutral-800 leading-relaxed">{post.content}</p>
                        <p class="text-[11px] text-neutral-500 mt-1">{format!("{} · {}", post.author, post.time)}</p>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
