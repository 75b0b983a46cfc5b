//! LIV Site Frontend Entry Point

mod app;
mod browser;
mod config;
mod contact;
mod error;
mod filter;
mod loader;
mod logging;
mod markdown;
mod models;
mod render;
mod splash;
mod storage;

fn main() {
    console_error_panic_hook::set_once();
    app::boot();
}
