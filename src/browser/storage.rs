//! Session Storage Backend

use web_sys::Storage;

use crate::storage::{MemoryStore, SessionStore};

/// `window.sessionStorage`, or an in-memory stand-in when it is unavailable
pub enum SessionBackend {
    Browser(Storage),
    Memory(MemoryStore),
}

impl SessionBackend {
    pub fn open() -> Self {
        match web_sys::window().map(|w| w.session_storage()) {
            Some(Ok(Some(storage))) => SessionBackend::Browser(storage),
            Some(Err(e)) => {
                log::warn!("[STORAGE] sessionStorage refused: {:?}", e);
                SessionBackend::Memory(MemoryStore::default())
            }
            _ => {
                log::warn!("[STORAGE] sessionStorage unavailable");
                SessionBackend::Memory(MemoryStore::default())
            }
        }
    }
}

impl SessionStore for SessionBackend {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            SessionBackend::Browser(storage) => storage.get_item(key).ok().flatten(),
            SessionBackend::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self {
            SessionBackend::Browser(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("[STORAGE] Failed to set {}: {:?}", key, e);
                }
            }
            SessionBackend::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            SessionBackend::Browser(storage) => {
                let _ = storage.remove_item(key);
            }
            SessionBackend::Memory(store) => store.remove(key),
        }
    }
}
