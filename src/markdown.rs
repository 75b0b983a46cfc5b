//! Inline Markdown
//!
//! Item descriptions are short Markdown snippets placed inside a `<p>`. Only
//! inline markup survives: block structure is flattened, separate blocks are
//! joined with `<br>` and list items keep their markers as text. Inline HTML
//! already present in the documents passes through unchanged.

use pulldown_cmark::{html::push_html, Event, Options, Parser, Tag, TagEnd};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

fn is_inline(tag: &Tag) -> bool {
    matches!(
        tag,
        Tag::Emphasis | Tag::Strong | Tag::Strikethrough | Tag::Link { .. } | Tag::Image { .. }
    )
}

fn is_inline_end(tag: &TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link | TagEnd::Image
    )
}

/// Render markdown for use inside a paragraph
pub fn parse_markdown_inline(text: &str) -> String {
    let mut events: Vec<Event> = Vec::new();
    // next ordinal per open list; `None` for bullet lists
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut pending_break = false;

    for event in Parser::new_ext(text, get_options()) {
        let event = match event {
            Event::Start(Tag::List(start)) => {
                lists.push(start);
                continue;
            }
            Event::End(TagEnd::List(_)) => {
                lists.pop();
                continue;
            }
            Event::Start(Tag::Item) => match lists.last_mut() {
                Some(Some(n)) => {
                    let marker = format!("{}. ", n);
                    *n += 1;
                    Event::Text(marker.into())
                }
                _ => Event::Text("- ".into()),
            },
            Event::Start(ref tag) if !is_inline(tag) => continue,
            Event::End(ref tag) if !is_inline_end(tag) => {
                pending_break = !events.is_empty();
                continue;
            }
            Event::Rule => {
                pending_break = !events.is_empty();
                continue;
            }
            other => other,
        };
        if pending_break {
            events.push(Event::Html("<br>".into()));
            pending_break = false;
        }
        events.push(event);
    }

    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(parse_markdown_inline("新しいサービスを開始しました。"), "新しいサービスを開始しました。");
    }

    #[test]
    fn test_inline_emphasis() {
        assert_eq!(parse_markdown_inline("a **bold** move"), "a <strong>bold</strong> move");
    }

    #[test]
    fn test_inline_html_passes_through() {
        assert_eq!(parse_markdown_inline("line one<br>line two"), "line one<br>line two");
    }

    #[test]
    fn test_paragraphs_join_with_break() {
        assert_eq!(parse_markdown_inline("行1\n\n行2"), "行1<br>行2");
    }

    #[test]
    fn test_numbered_line_stays_text() {
        let html = parse_markdown_inline("1. 企画から運用まで一貫対応");
        assert_eq!(html, "1. 企画から運用まで一貫対応");
        assert!(!html.contains("<ol>"));
    }

    #[test]
    fn test_no_block_tags_survive() {
        let html = parse_markdown_inline("# 見出し\n\n- 設計\n- 開発\n\n---\n\n> 引用");
        for tag in ["<h1>", "<ul>", "<li>", "<hr", "<blockquote>", "<p>"] {
            assert!(!html.contains(tag), "{} in {}", tag, html);
        }
        assert_eq!(html, "見出し<br>- 設計<br>- 開発<br>引用");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }
}
