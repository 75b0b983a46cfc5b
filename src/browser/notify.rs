//! Toast Notifications

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::page::DomPage;
use crate::markdown::escape_html;
use crate::render::Page;

const AUTO_CLOSE_MS: u32 = 5000;
const SLIDE_OUT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
}

impl NotifyKind {
    fn as_str(&self) -> &'static str {
        match self {
            NotifyKind::Success => "success",
            NotifyKind::Error => "error",
        }
    }

    fn background(&self) -> &'static str {
        match self {
            NotifyKind::Success => "#10b981",
            NotifyKind::Error => "#ef4444",
        }
    }
}

fn notification_markup(message: &str) -> String {
    let lines = escape_html(message).replace('\n', "<br>");
    format!(
        r#"<div class="notification-content"><span class="notification-message">{}</span><button class="notification-close" style="background: none; border: none; color: inherit; font-size: 1.5rem; cursor: pointer; margin-left: 1rem; opacity: 0.8;">&times;</button></div>"#,
        lines
    )
}

/// Slide out and detach; calling it again is harmless
fn remove_notification(notification: &Element) {
    if !notification.is_connected() {
        return;
    }
    if let Some(el) = notification.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property("transform", "translateX(100%)");
    }
    let notification = notification.clone();
    Timeout::new(SLIDE_OUT_MS, move || notification.remove()).forget();
}

fn inline_style(kind: NotifyKind) -> String {
    format!(
        "position: fixed; top: 100px; right: 20px; z-index: 10000; max-width: 400px; padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15); transition: all 0.3s ease; background: {}; color: white;",
        kind.background()
    )
}

/// Replace any visible notification with a new one
pub fn notify(page: &DomPage, message: &str, kind: NotifyKind) {
    if let Some(existing) = page.find(".notification") {
        existing.remove();
    }
    let document = page.document();
    let (Some(body), Ok(notification)) = (document.body(), document.create_element("div")) else {
        log::warn!("[NOTIFY] Cannot show notification: {}", message);
        return;
    };
    notification.set_class_name(&format!("notification notification-{}", kind.as_str()));
    notification.set_inner_html(&notification_markup(message));
    let _ = notification.set_attribute("style", &inline_style(kind));
    if body.append_child(&notification).is_err() {
        return;
    }

    if let Ok(Some(close)) = notification.query_selector(".notification-close") {
        let target = notification.clone();
        let on_close = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
            remove_notification(&target);
        });
        let _ = close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref());
        on_close.forget();
    }

    let target = notification;
    Timeout::new(AUTO_CLOSE_MS, move || remove_notification(&target)).forget();
    log::debug!("[NOTIFY] {} notification shown", kind.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_escapes_and_breaks_lines() {
        let html = notification_markup("a<b>\nc");
        assert!(html.contains(r#"<span class="notification-message">a&lt;b&gt;<br>c</span>"#));
    }
}
