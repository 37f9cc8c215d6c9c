//! Markdown Rendering
//!
//! Renders fixture prose (brand news bodies, key insights) with
//! pulldown-cmark, plus:
//! - links open in a new tab
//! - images are width-constrained, alt text dropped
//! - raw HTML in the source is shown as text, never injected

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Parse markdown to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Parse markdown for inline use (strips outer <p> tags)
pub fn parse_markdown_inline(text: &str) -> String {
    let html = parse_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

enum State {
    Normal,
    InImage { dropped_depth: usize },
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::Link { dest_url, title, .. }) => {
                    let html = format!(
                        r#"<a href="{}" title="{}" target="_blank" rel="noopener noreferrer" class="text-brand hover:underline">"#,
                        escape_html(&dest_url),
                        escape_html(&title)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                }
                Event::End(TagEnd::Link) => events.push(Event::Html(CowStr::from("</a>"))),

                Event::Start(Tag::Image { dest_url, .. }) => {
                    let html = format!(
                        r#"<img src="{}" class="w-full h-48 object-cover rounded-lg" loading="lazy" />"#,
                        escape_html(&dest_url)
                    );
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::InImage { dropped_depth: 0 };
                }

                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),

                other => events.push(other),
            },

            State::InImage { ref mut dropped_depth } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = State::Normal;
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = parse_markdown("**Gucci** 营收\n\n- 亚太\n- 欧洲");
        assert!(html.contains("<strong>Gucci</strong>"));
        assert!(html.contains("<li>亚太</li>"));
    }

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(parse_markdown_inline("**花卉廓形**"), "<strong>花卉廓形</strong>");
    }

    #[test]
    fn test_links_open_in_new_tab() {
        let html = parse_markdown("[原文](https://example.com/a?b=1&c=2)");
        assert!(html.contains(r#"href="https://example.com/a?b=1&amp;c=2""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains("原文</a>"));
    }

    #[test]
    fn test_image_alt_text_dropped() {
        let html = parse_markdown("![runway *look*](https://img/look.jpg)");
        assert!(html.contains(r#"<img src="https://img/look.jpg""#));
        assert!(!html.contains("runway"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
