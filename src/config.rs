//! Site Configuration
//!
//! Data locations, timings and selectors. Pages may override any field with an
//! inline `<script id="site-config" type="application/json">` element.

use serde::Deserialize;

/// Element id holding an optional JSON override
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub news_url: String,
    pub works_url: String,
    /// How many news items the home page summary shows
    pub home_news_limit: usize,
    /// Splash auto-dismiss delay
    pub splash_duration_ms: u32,
    /// Splash fade-out animation length
    pub splash_fade_ms: u32,
    /// Session storage key for the visited flag
    pub visited_key: String,
    pub log_level: Option<String>,
    pub selectors: Selectors,
}

/// DOM container selectors
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub home_news: String,
    pub all_news: String,
    pub works_grid: String,
    /// Works filter buttons, each carrying `data-category`
    pub filter_buttons: String,
    pub splash: String,
    pub contact_form: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            news_url: "/assets/data/news.json".to_string(),
            works_url: "/assets/data/works.json".to_string(),
            home_news_limit: 2,
            splash_duration_ms: 3000,
            splash_fade_ms: 800,
            visited_key: "liv_visited".to_string(),
            log_level: None,
            selectors: Selectors::default(),
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            home_news: ".intro-news-list".to_string(),
            all_news: ".news-container".to_string(),
            works_grid: "#works-grid".to_string(),
            filter_buttons: ".filter-btn".to_string(),
            splash: "#splash-screen".to_string(),
            contact_form: ".contact-form".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse an override document. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// Parse an override, falling back to defaults when it is malformed
    pub fn from_json_or_default(text: &str) -> Self {
        match Self::from_json(text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[CONFIG] Ignoring malformed site config: {}", e);
                Self::default()
            }
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.news_url, "/assets/data/news.json");
        assert_eq!(config.home_news_limit, 2);
        assert_eq!(config.splash_duration_ms, 3000);
        assert_eq!(config.visited_key, "liv_visited");
        assert_eq!(config.selectors.works_grid, "#works-grid");
        assert_eq!(config.selectors.filter_buttons, ".filter-btn");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = SiteConfig::from_json(
            r##"{"home_news_limit": 3, "selectors": {"works_grid": "#grid"}}"##,
        )
        .unwrap();
        assert_eq!(config.home_news_limit, 3);
        assert_eq!(config.selectors.works_grid, "#grid");
        assert_eq!(config.selectors.splash, "#splash-screen");
        assert_eq!(config.works_url, "/assets/data/works.json");
    }

    #[test]
    fn test_malformed_override_falls_back() {
        let config = SiteConfig::from_json_or_default("{ not json");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_log_level_override() {
        let config = SiteConfig::from_json(r#"{"log_level": "warn"}"#).unwrap();
        assert_eq!(config.log_level(), log::LevelFilter::Warn);

        let config = SiteConfig::from_json(r#"{"log_level": "chatty"}"#).unwrap();
        assert_eq!(config.log_level(), SiteConfig::default().log_level());
    }
}
