//! Browser Console Logging
//!
//! `wasm_logger` prints every record to the console; the `log` max level
//! decides what gets through.

use log::LevelFilter;

pub fn init(level: LevelFilter) {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    set_level(level);
}

/// Adjust verbosity after the page config has been read
pub fn set_level(level: LevelFilter) {
    log::set_max_level(level);
}
