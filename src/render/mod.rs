//! List Rendering
//!
//! One pipeline for every listing: find container → load → refine → template.
//! Pages without the container are left alone and nothing is fetched.

mod news;
mod works;

pub use news::{FullNewsTemplate, HomeNewsTemplate};
pub use works::WorksTemplate;

use std::cell::Cell;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::loader::{load_items, Dated, JsonSource};

/// Element whose content can be replaced with a markup fragment
pub trait Mount {
    fn replace_content(&self, html: &str);
}

/// Container lookup on the current page
pub trait Page {
    type Node: Mount;
    fn find(&self, selector: &str) -> Option<Self::Node>;
}

/// Markup for one entity type
pub trait Template<T> {
    fn render_item(&self, item: &T) -> String;

    /// Shown instead of an empty container; `None` leaves it empty
    fn empty_placeholder(&self) -> Option<&str> {
        None
    }
}

/// Concatenate item markup, or the placeholder for an empty list
pub fn render_list<T, M: Template<T> + ?Sized>(items: &[T], template: &M) -> String {
    if items.is_empty() {
        return template.empty_placeholder().unwrap_or_default().to_string();
    }
    items.iter().map(|item| template.render_item(item)).collect()
}

/// What to load for a listing
#[derive(Debug, Clone, Copy)]
pub struct Feed<'a> {
    pub url: &'a str,
    pub limit: Option<usize>,
}

/// Issues tickets for repeated renders of one container. Only the newest
/// ticket may still write, so a slow fetch cannot overwrite a later one.
#[derive(Debug, Clone, Default)]
pub struct Generation(Rc<Cell<u32>>);

impl Generation {
    pub fn next(&self) -> Ticket {
        let issued = self.0.get().wrapping_add(1);
        self.0.set(issued);
        Ticket { generation: self.clone(), issued }
    }
}

#[derive(Debug, Clone)]
pub struct Ticket {
    generation: Generation,
    issued: u32,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.generation.0.get() == self.issued
    }
}

/// Run the whole pipeline. Returns `false` when the container is absent.
pub async fn present<T, P, S, M, F>(
    page: &P,
    selector: &str,
    source: &S,
    feed: Feed<'_>,
    template: &M,
    refine: F,
) -> bool
where
    T: Dated + DeserializeOwned,
    P: Page + ?Sized,
    S: JsonSource + ?Sized,
    M: Template<T> + ?Sized,
    F: FnOnce(Vec<T>) -> Vec<T>,
{
    present_for(page, selector, source, feed, template, refine, None).await
}

/// Like [`present`], but a stale `ticket` leaves the container as it is
pub async fn present_for<T, P, S, M, F>(
    page: &P,
    selector: &str,
    source: &S,
    feed: Feed<'_>,
    template: &M,
    refine: F,
    ticket: Option<&Ticket>,
) -> bool
where
    T: Dated + DeserializeOwned,
    P: Page + ?Sized,
    S: JsonSource + ?Sized,
    M: Template<T> + ?Sized,
    F: FnOnce(Vec<T>) -> Vec<T>,
{
    let Some(container) = page.find(selector) else {
        return false;
    };
    let items = refine(load_items(source, feed.url, feed.limit).await);
    if ticket.is_some_and(|t| !t.is_current()) {
        log::debug!("[RENDER] Dropping superseded result for {}", selector);
        return true;
    }
    container.replace_content(&render_list(&items, template));
    true
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Page with named containers holding their current markup
    #[derive(Default)]
    pub struct FakePage {
        nodes: HashMap<String, FakeNode>,
    }

    #[derive(Clone, Default)]
    pub struct FakeNode(Rc<RefCell<String>>);

    impl FakeNode {
        pub fn html(&self) -> String {
            self.0.borrow().clone()
        }
    }

    impl Mount for FakeNode {
        fn replace_content(&self, html: &str) {
            *self.0.borrow_mut() = html.to_string();
        }
    }

    impl FakePage {
        pub fn with_container(mut self, selector: &str, html: &str) -> Self {
            self.nodes.insert(selector.to_string(), FakeNode(Rc::new(RefCell::new(html.to_string()))));
            self
        }

        pub fn html(&self, selector: &str) -> Option<String> {
            self.nodes.get(selector).map(FakeNode::html)
        }
    }

    impl Page for FakePage {
        type Node = FakeNode;

        fn find(&self, selector: &str) -> Option<FakeNode> {
            self.nodes.get(selector).cloned()
        }
    }

    struct Names;

    impl Template<crate::models::NewsItem> for Names {
        fn render_item(&self, item: &crate::models::NewsItem) -> String {
            format!("[{}]", item.title)
        }

        fn empty_placeholder(&self) -> Option<&str> {
            Some("none")
        }
    }

    #[test]
    fn test_render_list_empty_uses_placeholder() {
        assert_eq!(render_list::<crate::models::NewsItem, _>(&[], &Names), "none");
        assert_eq!(render_list::<crate::models::NewsItem, _>(&[], &HomeNewsTemplate), "");
    }

    #[tokio::test]
    async fn test_present_missing_container_skips_fetch() {
        let page = FakePage::default().with_container("#other", "untouched");
        let source = crate::loader::tests::FakeSource::default();
        let feed = Feed { url: "/news.json", limit: None };

        let shown = present(&page, "#list", &source, feed, &Names, |items: Vec<crate::models::NewsItem>| items).await;

        assert!(!shown);
        assert!(source.calls.borrow().is_empty());
        assert_eq!(page.html("#other").as_deref(), Some("untouched"));
    }

    #[tokio::test]
    async fn test_present_failure_renders_placeholder() {
        let page = FakePage::default().with_container("#list", "<p>loading</p>");
        let source = crate::loader::tests::FakeSource::default();
        let feed = Feed { url: "/news.json", limit: None };

        let shown = present(&page, "#list", &source, feed, &Names, |items: Vec<crate::models::NewsItem>| items).await;

        assert!(shown);
        assert_eq!(page.html("#list").as_deref(), Some("none"));
    }

    #[test]
    fn test_only_newest_ticket_is_current() {
        let generation = Generation::default();
        let first = generation.next();
        assert!(first.is_current());
        let second = generation.next();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[tokio::test]
    async fn test_superseded_render_leaves_newer_markup() {
        let doc = r#"[{"date": {"year": 2024, "month": 1, "day": 1}, "title": "a", "description": "d"}]"#;
        let source = crate::loader::tests::FakeSource::default().with("/news.json", doc);
        let page = FakePage::default().with_container("#list", "");
        let feed = Feed { url: "/news.json", limit: None };
        let generation = Generation::default();
        let older = generation.next();
        let newer = generation.next();

        let newest = |_: Vec<crate::models::NewsItem>| Vec::new();
        assert!(present_for(&page, "#list", &source, feed, &Names, newest, Some(&newer)).await);
        assert_eq!(page.html("#list").as_deref(), Some("none"));

        let stale = |items: Vec<crate::models::NewsItem>| items;
        assert!(present_for(&page, "#list", &source, feed, &Names, stale, Some(&older)).await);
        assert_eq!(page.html("#list").as_deref(), Some("none"));
        assert_eq!(source.calls.borrow().len(), 2);
    }
}
