//! List Loader
//!
//! Fetch a JSON array, sort it newest-first and optionally truncate it.
//! Failures are logged and yield an empty list.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::error::LoadError;

/// Records that sort by a calendar date
pub trait Dated {
    /// `None` for a date that does not form a valid calendar day
    fn sort_key(&self) -> Option<NaiveDate>;
}

/// Where JSON documents come from
#[async_trait(?Send)]
pub trait JsonSource {
    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LoadError>;
}

/// Stable sort, newest first. Items without a valid date go last.
pub fn sort_newest_first<T: Dated>(items: &mut [T]) {
    // Option orders None below every Some, so reversing the comparison sinks them
    items.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
}

/// Keep the first `limit` items; `None` keeps all
pub fn truncate<T>(items: &mut Vec<T>, limit: Option<usize>) {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
}

/// Load, sort and truncate. Never fails: problems are logged and give `[]`.
pub async fn load_items<T, S>(source: &S, url: &str, limit: Option<usize>) -> Vec<T>
where
    T: Dated + DeserializeOwned,
    S: JsonSource + ?Sized,
{
    let mut items: Vec<T> = match source.fetch_json(url).await {
        Ok(items) => items,
        Err(e) => {
            log::error!("[LOADER] Failed to load {}: {}", url, e);
            return Vec::new();
        }
    };
    sort_newest_first(&mut items);
    truncate(&mut items, limit);
    log::debug!("[LOADER] Loaded {} items from {}", items.len(), url);
    items
}
