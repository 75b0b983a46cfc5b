//! Contact Form Binding
//!
//! Validates on submit and simulates sending. Nothing leaves the browser.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlButtonElement, HtmlFormElement};

use super::notify::{notify, NotifyKind};
use super::page::DomPage;
use crate::contact::{error_summary, validate, ContactForm};

const SIMULATED_SEND_MS: u32 = 2000;
const SENDING_LABEL: &str = "送信中...";
const THANK_YOU: &str = "お問い合わせを受け付けました。ありがとうございます。";

fn read_form(form: &HtmlFormElement) -> ContactForm {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactForm::default();
    };
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();
    ContactForm {
        name: field("name"),
        email: field("email"),
        message: field("message"),
    }
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    form.query_selector(r#"button[type="submit"]"#)
        .ok()
        .flatten()?
        .dyn_into()
        .ok()
}

fn on_submit(page: &DomPage, form: &HtmlFormElement) {
    let errors = validate(&read_form(form));
    if !errors.is_empty() {
        log::debug!("[CONTACT] Rejected with {} errors", errors.len());
        notify(page, &error_summary(&errors), NotifyKind::Error);
        return;
    }

    let button = submit_button(form);
    let original_label = button.as_ref().and_then(|b| b.text_content());
    if let Some(button) = &button {
        button.set_disabled(true);
        button.set_text_content(Some(SENDING_LABEL));
    }

    let page = page.clone();
    let form = form.clone();
    Timeout::new(SIMULATED_SEND_MS, move || {
        notify(&page, THANK_YOU, NotifyKind::Success);
        form.reset();
        if let Some(button) = button {
            button.set_disabled(false);
            button.set_text_content(original_label.as_deref());
        }
        log::info!("[CONTACT] Inquiry accepted");
    })
    .forget();
}

/// Attach the submit handler when the page has a contact form
pub fn bind_contact_form(page: &DomPage, selector: &str) {
    let Some(form) = page.find_as::<HtmlFormElement>(selector) else {
        return;
    };

    let handler_page = page.clone();
    let handler_form = form.clone();
    let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        ev.prevent_default();
        on_submit(&handler_page, &handler_form);
    });
    if let Err(e) = form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref()) {
        log::warn!("[CONTACT] Failed to bind form: {:?}", e);
    }
    handler.forget();
}
