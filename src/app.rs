//! Site Boot
//!
//! Runs once the page script loads: splash gate, listings, contact form.
//! Each feature checks for its own container and skips pages without it.

use std::rc::Rc;

use any_spawner::Executor;
use leptos::task::spawn_local;

use crate::browser::{bind_contact_form, bind_filter_buttons, start_splash, DomPage, HttpSource};
use crate::config::SiteConfig;
use crate::filter::CategoryFilter;
use crate::logging;
use crate::models::{NewsItem, WorkItem};
use crate::render::{
    present, present_for, Feed, FullNewsTemplate, Generation, HomeNewsTemplate, Page, Ticket, WorksTemplate,
};

pub fn boot() {
    logging::init(SiteConfig::default().log_level());
    // drives spawn_local and the filter effect; an executor may already be set
    let _ = Executor::init_wasm_bindgen();
    let Some(page) = DomPage::current() else {
        return;
    };
    let config = page.site_config();
    logging::set_level(config.log_level());

    start_splash(&page, &config, page.launch_params());
    bind_contact_form(&page, &config.selectors.contact_form);

    let config = Rc::new(config);
    show_home_news(page.clone(), config.clone());
    show_all_news(page.clone(), config.clone());
    show_works(page, config);

    log::info!("[APP] Site initialized");
}

fn show_home_news(page: DomPage, config: Rc<SiteConfig>) {
    spawn_local(async move {
        let feed = Feed { url: &config.news_url, limit: Some(config.home_news_limit) };
        present(&page, &config.selectors.home_news, &HttpSource, feed, &HomeNewsTemplate, |n: Vec<NewsItem>| n).await;
    });
}

fn show_all_news(page: DomPage, config: Rc<SiteConfig>) {
    spawn_local(async move {
        let feed = Feed { url: &config.news_url, limit: None };
        present(&page, &config.selectors.all_news, &HttpSource, feed, &FullNewsTemplate, |n: Vec<NewsItem>| n).await;
    });
}

/// Fetch, filter and render the works grid
fn render_works(page: DomPage, config: Rc<SiteConfig>, filter: CategoryFilter, ticket: Ticket) {
    spawn_local(async move {
        let feed = Feed { url: &config.works_url, limit: None };
        let only_selected = |w: Vec<WorkItem>| filter.apply(w);
        present_for(&page, &config.selectors.works_grid, &HttpSource, feed, &WorksTemplate, only_selected, Some(&ticket))
            .await;
    });
}

fn show_works(page: DomPage, config: Rc<SiteConfig>) {
    if page.find(&config.selectors.works_grid).is_none() {
        return;
    }
    let generation = Generation::default();

    let (grid_page, grid_config, grid_generation) = (page.clone(), config.clone(), generation.clone());
    // re-fetch and re-render on every selection
    let bound = bind_filter_buttons(&page, &config.selectors.filter_buttons, move |filter| {
        render_works(grid_page.clone(), grid_config.clone(), filter, grid_generation.next());
    });
    if !bound {
        render_works(page, config, CategoryFilter::All, generation.next());
    }
}
