//! News Templates
//!
//! Home page summary cards and the full news listing.

use super::Template;
use crate::markdown::{escape_html, parse_markdown_inline};
use crate::models::NewsItem;

const DEFAULT_LINK_TEXT: &str = "詳細を見る";
const NO_NEWS: &str = r#"<p class="no-news">お知らせはありません</p>"#;

/// Latest-news summary on the home page
pub struct HomeNewsTemplate;

impl Template<NewsItem> for HomeNewsTemplate {
    fn render_item(&self, news: &NewsItem) -> String {
        let link = match &news.link {
            Some(href) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="news-link">{}</a>"#,
                escape_html(href),
                escape_html(news.link_text.as_deref().unwrap_or(DEFAULT_LINK_TEXT)),
            ),
            None => String::new(),
        };
        format!(
            r#"<article class="intro-news-item"><div class="intro-news-date"><span class="date-day">{day}</span><span class="date-month">{month}</span><span class="date-year">{year}</span></div><div class="intro-news-content"><h3>{title}</h3><p>{description}</p>{link}</div><div class="intro-news-arrow"><i class="fas fa-arrow-right"></i></div></article>"#,
            day = news.date.day,
            month = news.date.month,
            year = news.date.year,
            title = escape_html(&news.title),
            description = parse_markdown_inline(&news.description),
            link = link,
        )
    }
}

/// Every news item on the news page
pub struct FullNewsTemplate;

impl Template<NewsItem> for FullNewsTemplate {
    fn render_item(&self, news: &NewsItem) -> String {
        let link = match &news.link {
            Some(href) => format!(
                r#"<a href="{}" class="news-external-link" target="_blank" rel="noopener noreferrer"><i class="fas fa-external-link-alt"></i> {}</a>"#,
                escape_html(href),
                DEFAULT_LINK_TEXT,
            ),
            None => String::new(),
        };
        format!(
            r#"<article class="news-card"><div class="news-card-header"><div class="news-date"><i class="fas fa-calendar-alt"></i> {year}年{month}月{day}日</div><span class="news-category">{category}</span></div><h3 class="news-title">{title}</h3><p class="news-description">{description}</p>{link}</article>"#,
            year = news.date.year,
            month = news.date.month,
            day = news.date.day,
            category = escape_html(news.category.as_deref().unwrap_or_default()),
            title = escape_html(&news.title),
            description = parse_markdown_inline(&news.description),
            link = link,
        )
    }

    fn empty_placeholder(&self) -> Option<&str> {
        Some(NO_NEWS)
    }
}
