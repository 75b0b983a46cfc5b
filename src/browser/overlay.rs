//! Splash Overlay
//!
//! DOM side of the visit-gate: display, fade-out, scroll lock, and the
//! timer/click triggers that race to dismiss it.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::page::DomPage;
use super::storage::SessionBackend;
use crate::config::SiteConfig;
use crate::splash::{LaunchParams, Overlay, Phase, SplashGate};

const STYLE_ELEMENT_ID: &str = "splash-styles";

const SPLASH_STYLES: &str = r#"
@keyframes splashFadeOut {
    0% { opacity: 1; transform: scale(1); }
    100% { opacity: 0; transform: scale(1.05); }
}
@keyframes contentFadeIn {
    0% { opacity: 0; }
    100% { opacity: 1; }
}
#splash-screen:hover { cursor: pointer; }
#splash-screen:hover::after {
    content: "クリックでスキップ";
    position: absolute;
    bottom: 30px;
    left: 50%;
    transform: translateX(-50%);
    color: rgba(255, 255, 255, 0.8);
    font-size: 0.9rem;
    animation: fadeInOut 2s infinite;
}
@keyframes fadeInOut {
    0%, 100% { opacity: 0.5; }
    50% { opacity: 1; }
}
"#;

fn set_style(el: &HtmlElement, name: &str, value: &str) {
    let _ = el.style().set_property(name, value);
}

fn inject_styles(page: &DomPage) {
    let document = page.document();
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return;
    }
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return;
    };
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(SPLASH_STYLES));
    let _ = head.append_child(&style);
}

pub struct DomOverlay {
    element: HtmlElement,
    body: Option<HtmlElement>,
    fade_ms: u32,
}

impl Overlay for DomOverlay {
    fn show(&self) {
        set_style(&self.element, "display", "flex");
        if let Some(body) = &self.body {
            set_style(body, "overflow", "hidden");
        }
    }

    fn dismiss(&self) {
        let animation = format!("splashFadeOut {}s ease-out forwards", self.fade_ms as f64 / 1000.0);
        set_style(&self.element, "animation", &animation);

        let element = self.element.clone();
        let body = self.body.clone();
        Timeout::new(self.fade_ms, move || {
            set_style(&element, "display", "none");
            if let Some(body) = body {
                set_style(&body, "overflow", "auto");
                set_style(&body, "animation", "contentFadeIn 0.6s ease-out forwards");
            }
        })
        .forget();
    }

    fn conceal(&self) {
        set_style(&self.element, "display", "none");
        if let Some(body) = &self.body {
            set_style(body, "overflow", "auto");
        }
    }
}

/// Evaluate the gate and, when shown, arm the auto-dismiss timer and click-to-skip
pub fn start_splash(page: &DomPage, config: &SiteConfig, params: LaunchParams) {
    inject_styles(page);
    let store = SessionBackend::open();

    let element = page.find_as::<HtmlElement>(&config.selectors.splash);
    let overlay = element.clone().map(|element| DomOverlay {
        element,
        body: page.body(),
        fade_ms: config.splash_fade_ms,
    });
    let (Some(gate), Some(element)) = (SplashGate::open(store, overlay, &config.visited_key, params), element) else {
        if let Some(body) = page.body() {
            set_style(&body, "overflow", "auto");
        }
        return;
    };
    let gate = Rc::new(gate);
    if gate.phase() != Phase::Shown {
        return;
    }

    let timer_gate = gate.clone();
    Timeout::new(config.splash_duration_ms, move || {
        if timer_gate.dismiss() {
            log::debug!("[SPLASH] Dismissed by timer");
        }
    })
    .forget();

    let click_gate = gate;
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        if click_gate.dismiss() {
            log::debug!("[SPLASH] Dismissed by click");
        }
    });
    if let Err(e) = element.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
        log::warn!("[SPLASH] Click-to-skip unavailable: {:?}", e);
    }
    on_click.forget();
}
