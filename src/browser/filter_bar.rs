//! Works Filter Buttons
//!
//! Binds the page's own `.filter-btn` elements. Each button's `data-category`
//! is its filter; the clicked button becomes the single `active` one.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::page::DomPage;
use crate::filter::{CategoryFilter, FilterButtons};

/// Wire the filter buttons. `on_select` runs once for the initial `All` view
/// and again on every click. Returns `false` when the page has no buttons.
pub fn bind_filter_buttons(
    page: &DomPage,
    selector: &str,
    on_select: impl Fn(CategoryFilter) + 'static,
) -> bool {
    let elements = page.find_all(selector);
    if elements.is_empty() {
        return false;
    }
    let tags = elements.iter().map(category_of).collect();
    let buttons = RwSignal::new(FilterButtons::new(tags));

    for (index, element) in elements.iter().enumerate() {
        let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            buttons.update(|bar| bar.select(index));
        });
        if let Err(e) = element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            log::warn!("[WORKS] Cannot bind filter button {}: {:?}", index, e);
        }
        on_click.forget();
    }

    Effect::new(move |_| {
        let bar = buttons.get();
        if let Some(flags) = bar.active_flags() {
            for (element, active) in elements.iter().zip(flags) {
                let _ = element.class_list().toggle_with_force("active", active);
            }
        }
        let filter = bar.filter();
        log::debug!("[WORKS] Filter: {}", filter.tag());
        on_select(filter);
    });
    true
}

fn category_of(element: &Element) -> String {
    element.get_attribute("data-category").unwrap_or_else(|| {
        log::warn!("[WORKS] Filter button without data-category");
        String::new()
    })
}
