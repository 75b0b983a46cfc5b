//! Works Templates
//!
//! Portfolio cards for the works grid.

use super::Template;
use crate::markdown::{escape_html, parse_markdown_inline};
use crate::models::{WorkCategory, WorkItem};

const NO_WORKS: &str = r#"<p class="no-works">該当する実績がありません</p>"#;

/// Font Awesome icon for a category
pub fn category_icon(category: &WorkCategory) -> &'static str {
    match category {
        WorkCategory::Website => "fa-globe",
        WorkCategory::App => "fa-mobile-alt",
        WorkCategory::Business => "fa-store",
        WorkCategory::Other(_) => "fa-briefcase",
    }
}

/// Display name; unknown categories show their raw tag
pub fn category_label(category: &WorkCategory) -> &str {
    match category {
        WorkCategory::Website => "Webサイト",
        WorkCategory::App => "アプリ開発",
        WorkCategory::Business => "事業運営",
        WorkCategory::Other(tag) => tag,
    }
}

/// "2024-03" → "2024年03月". Anything else is shown as-is.
pub fn format_year_month(date: &str) -> String {
    match date.split_once('-') {
        Some((year, month)) => format!("{}年{}月", year, month),
        None => date.to_string(),
    }
}

pub struct WorksTemplate;

impl Template<WorkItem> for WorksTemplate {
    fn render_item(&self, work: &WorkItem) -> String {
        let technologies: String = work
            .technologies
            .iter()
            .map(|tech| format!(r#"<span class="tech-tag">{}</span>"#, escape_html(tech)))
            .collect();
        let footer = match &work.link {
            Some(href) => format!(
                r#"<div class="work-card-footer"><a href="{}" class="work-link" target="_blank" rel="noopener noreferrer"><i class="fas fa-external-link-alt"></i> サイトを見る</a></div>"#,
                escape_html(href),
            ),
            None => String::new(),
        };
        format!(
            r#"<article class="work-card" data-category="{tag}"><div class="work-card-header"><div class="work-icon"><i class="fas {icon}"></i></div><span class="work-category">{label}</span></div><div class="work-card-body"><h3 class="work-title">{title}</h3><p class="work-client"><i class="fas fa-building"></i> {client}</p><p class="work-date"><i class="fas fa-calendar"></i> {date}</p><p class="work-description">{description}</p><div class="work-technologies">{technologies}</div></div>{footer}</article>"#,
            tag = escape_html(work.category.as_str()),
            icon = category_icon(&work.category),
            label = escape_html(category_label(&work.category)),
            title = escape_html(&work.title),
            client = escape_html(&work.client),
            date = escape_html(&format_year_month(&work.date)),
            description = parse_markdown_inline(&work.description),
            technologies = technologies,
            footer = footer,
        )
    }

    fn empty_placeholder(&self) -> Option<&str> {
        Some(NO_WORKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::make_work;
    use crate::filter::CategoryFilter;
    use crate::loader::tests::FakeSource;
    use crate::render::tests::FakePage;
    use crate::render::{present, Feed};

    const DOC: &str = r#"[
        {"date": "2023-04", "title": "Old site", "client": "A", "category": "website", "description": "d", "technologies": ["PHP"]},
        {"date": "2024-08", "title": "Shop app", "client": "B", "category": "app", "description": "d", "technologies": []},
        {"date": "2024-01", "title": "New site", "client": "C", "category": "website", "description": "d", "technologies": ["Rust"], "link": "https://c.example"}
    ]"#;

    #[test]
    fn test_category_mapping() {
        assert_eq!(category_icon(&WorkCategory::Website), "fa-globe");
        assert_eq!(category_icon(&WorkCategory::Business), "fa-store");
        assert_eq!(category_label(&WorkCategory::App), "アプリ開発");

        let other = WorkCategory::Other("consulting".to_string());
        assert_eq!(category_icon(&other), "fa-briefcase");
        assert_eq!(category_label(&other), "consulting");
    }

    #[test]
    fn test_format_year_month() {
        assert_eq!(format_year_month("2024-03"), "2024年03月");
        assert_eq!(format_year_month("2024"), "2024");
    }

    #[test]
    fn test_card_markup() {
        let mut work = make_work("Portal", "2024-03", "business");
        work.link = Some("https://portal.example".to_string());
        let html = WorksTemplate.render_item(&work);
        assert!(html.contains(r#"data-category="business""#));
        assert!(html.contains(r#"<i class="fas fa-store"></i>"#));
        assert!(html.contains(">事業運営</span>"));
        assert!(html.contains("2024年03月"));
        assert!(html.contains(r#"<span class="tech-tag">HTML</span><span class="tech-tag">CSS</span>"#));
        assert!(html.contains(r#"href="https://portal.example""#));
    }

    #[test]
    fn test_card_without_link_has_no_footer() {
        let html = WorksTemplate.render_item(&make_work("Portal", "2024-03", "app"));
        assert!(!html.contains("work-card-footer"));
    }

    #[test]
    fn test_numbered_description_stays_in_paragraph() {
        let mut work = make_work("Portal", "2024-03", "business");
        work.description = "1. 企画から運用まで一貫対応".to_string();
        let html = WorksTemplate.render_item(&work);
        assert!(html.contains(r#"<p class="work-description">1. 企画から運用まで一貫対応</p>"#));
        assert!(!html.contains("<ol>"));
    }

    #[tokio::test]
    async fn test_grid_sorted_and_filtered() {
        let source = FakeSource::default().with("/works.json", DOC);
        let page = FakePage::default().with_container("#works-grid", "");
        let feed = Feed { url: "/works.json", limit: None };
        let filter = CategoryFilter::from_tag("website");

        assert!(present(&page, "#works-grid", &source, feed, &WorksTemplate, |w| filter.apply(w)).await);

        let html = page.html("#works-grid").unwrap();
        assert_eq!(html.matches(r#"<article class="work-card""#).count(), 2);
        assert!(html.find("New site").unwrap() < html.find("Old site").unwrap());
        assert!(!html.contains("Shop app"));
    }

    #[tokio::test]
    async fn test_grid_zero_matches_single_placeholder() {
        let source = FakeSource::default().with("/works.json", DOC);
        let page = FakePage::default().with_container("#works-grid", "stale");
        let feed = Feed { url: "/works.json", limit: None };
        let filter = CategoryFilter::from_tag("business");

        present(&page, "#works-grid", &source, feed, &WorksTemplate, |w| filter.apply(w)).await;

        assert_eq!(page.html("#works-grid").as_deref(), Some(NO_WORKS));
    }
}
