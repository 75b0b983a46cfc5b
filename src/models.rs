//! Content Models
//!
//! Records of the news and works JSON documents.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::loader::Dated;

/// Calendar date as stored in news.json (month is 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NewsDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl NewsDate {
    pub fn to_naive(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// News entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsItem {
    pub date: NewsDate,
    pub title: String,
    pub description: String,
    /// Only present in documents used by the listing page
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, rename = "linkText")]
    pub link_text: Option<String>,
}

impl Dated for NewsItem {
    fn sort_key(&self) -> Option<NaiveDate> {
        self.date.to_naive()
    }
}

/// Works category; unknown tags are kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum WorkCategory {
    Website,
    App,
    Business,
    Other(String),
}

impl WorkCategory {
    pub fn as_str(&self) -> &str {
        match self {
            WorkCategory::Website => "website",
            WorkCategory::App => "app",
            WorkCategory::Business => "business",
            WorkCategory::Other(tag) => tag,
        }
    }
}

impl From<String> for WorkCategory {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "website" => WorkCategory::Website,
            "app" => WorkCategory::App,
            "business" => WorkCategory::Business,
            _ => WorkCategory::Other(tag),
        }
    }
}

/// Portfolio entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkItem {
    /// "YYYY-MM"
    pub date: String,
    pub title: String,
    pub client: String,
    pub category: WorkCategory,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl WorkItem {
    /// Split "YYYY-MM" into its raw parts
    pub fn year_month(&self) -> Option<(&str, &str)> {
        let (year, month) = self.date.split_once('-')?;
        Some((year, month))
    }
}

impl Dated for WorkItem {
    fn sort_key(&self) -> Option<NaiveDate> {
        let (year, month) = self.year_month()?;
        NaiveDate::from_ymd_opt(year.trim().parse().ok()?, month.trim().parse().ok()?, 1)
    }
}
