//! Load Errors
//!
//! Failure reasons for fetching a JSON document.

/// Why a JSON document could not be loaded
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    /// Request never produced a response
    Network(String),
    /// Response arrived with a non-success status
    Status(u16),
    /// Body was not the expected shape
    Parse(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "Network error: {}", msg),
            LoadError::Status(code) => write!(f, "Unexpected status: {}", code),
            LoadError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for LoadError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}
