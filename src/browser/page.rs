//! Document Access

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, UrlSearchParams};

use crate::config::{SiteConfig, CONFIG_ELEMENT_ID};
use crate::render::{Mount, Page};
use crate::splash::LaunchParams;

impl Mount for Element {
    fn replace_content(&self, html: &str) {
        self.set_inner_html(html);
    }
}

/// The live document
#[derive(Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }

    /// Query an element and cast it, `None` when absent or of another type
    pub fn find_as<T: JsCast>(&self, selector: &str) -> Option<T> {
        self.find(selector)?.dyn_into::<T>().ok()
    }

    /// Every element matching `selector`, in document order
    pub fn find_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("[PAGE] Bad selector {}: {:?}", selector, e);
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i)?.dyn_into::<Element>().ok())
            .collect()
    }

    /// Defaults merged with the inline `#site-config` override, if any
    pub fn site_config(&self) -> SiteConfig {
        match self
            .document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(text) => SiteConfig::from_json_or_default(&text),
            None => SiteConfig::default(),
        }
    }

    pub fn launch_params(&self) -> LaunchParams {
        let search = self
            .document
            .location()
            .and_then(|loc| loc.search().ok())
            .unwrap_or_default();
        match UrlSearchParams::new_with_str(&search) {
            Ok(query) => LaunchParams::from_lookup(|name| query.get(name)),
            Err(e) => {
                log::warn!("[PAGE] Unreadable query string {:?}: {:?}", search, e);
                LaunchParams::default()
            }
        }
    }
}

impl Page for DomPage {
    type Node = Element;

    fn find(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("[PAGE] Bad selector {}: {:?}", selector, e);
                None
            }
        }
    }
}
