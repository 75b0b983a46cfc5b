//! HTTP JSON Source

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::LoadError;
use crate::loader::JsonSource;

/// `window.fetch` of same-origin static documents
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSource;

#[async_trait(?Send)]
impl JsonSource for HttpSource {
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LoadError> {
        let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".to_string()))?;

        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(|e| LoadError::Network(format!("{:?}", e)))?;
        let response: Response = response
            .dyn_into()
            .map_err(|e| LoadError::Network(format!("{:?}", e)))?;
        if !response.ok() {
            return Err(LoadError::Status(response.status()));
        }

        let body = response.json().map_err(|e| LoadError::Parse(format!("{:?}", e)))?;
        let value = JsFuture::from(body)
            .await
            .map_err(|e| LoadError::Parse(format!("{:?}", e)))?;
        Ok(serde_wasm_bindgen::from_value(value)?)
    }
}
