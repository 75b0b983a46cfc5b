//! Works Category Filter

use crate::models::WorkItem;

/// Tag used by the passthrough filter button
pub const ALL_TAG: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Read the `data-category` value of a filter button
    pub fn from_tag(tag: &str) -> Self {
        if tag == ALL_TAG {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(tag.to_string())
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_TAG,
            CategoryFilter::Only(tag) => tag,
        }
    }

    /// Exact category match; `All` matches everything
    pub fn matches(&self, work: &WorkItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(tag) => work.category.as_str() == tag,
        }
    }

    /// Keep matching items, preserving order
    pub fn apply(&self, works: Vec<WorkItem>) -> Vec<WorkItem> {
        match self {
            CategoryFilter::All => works,
            CategoryFilter::Only(_) => works.into_iter().filter(|w| self.matches(w)).collect(),
        }
    }
}

/// The page's filter buttons, by `data-category`, in document order.
///
/// Nothing is selected until the first click; the page's own `active`
/// markup stands until then and the grid shows everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterButtons {
    tags: Vec<String>,
    selected: Option<usize>,
}

impl FilterButtons {
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags, selected: None }
    }

    /// Make the button at `index` the active one. Out-of-range clicks are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.tags.len() {
            self.selected = Some(index);
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Active flag per button, or `None` while nothing has been clicked
    pub fn active_flags(&self) -> Option<Vec<bool>> {
        self.selected?;
        Some((0..self.tags.len()).map(|i| self.is_active(i)).collect())
    }

    pub fn filter(&self) -> CategoryFilter {
        match self.selected {
            Some(index) => CategoryFilter::from_tag(&self.tags[index]),
            None => CategoryFilter::All,
        }
    }
}
