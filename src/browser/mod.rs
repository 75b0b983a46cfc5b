//! Browser Bindings
//!
//! `web-sys` implementations of the page, fetch, storage and overlay seams,
//! plus the DOM event wiring.

mod contact;
mod fetch;
mod filter_bar;
mod notify;
mod overlay;
mod page;
mod storage;

pub use contact::bind_contact_form;
pub use fetch::HttpSource;
pub use filter_bar::bind_filter_buttons;
pub use overlay::start_splash;
pub use page::DomPage;
