// src/scrape/scrape.rs
use std::{fmt, thread};

use scraper::Html;
use url::Url;

use crate::{
    config::options::ScrapeOptions,
    core::net::Fetch,
    data::{CatalogueItem, ListingEntry},
    error::ItemError,
    progress::{note, Progress},
};

use super::books::{extract_detail, extract_listing, next_page_href};

/// Counters for one run. Both ceilings are checked against these before
/// the unit of work they guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Incremented before the page ceiling check, so it can end one past the limit.
    pub pages: usize,
    /// Item attempts, failed ones included.
    pub items: usize,
    pub failed: usize,
}

/// Why the page loop ended. There is no other way out of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    PageLimit,
    CatalogueFetch,
    EmptyPage,
    ItemLimit,
    EndOfCatalogue,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::PageLimit => "page limit reached",
            StopReason::CatalogueFetch => "catalogue fetch error",
            StopReason::EmptyPage => "empty catalogue page",
            StopReason::ItemLimit => "item limit reached",
            StopReason::EndOfCatalogue => "end of catalogue",
        };
        f.write_str(s)
    }
}

pub struct CatalogueRun {
    pub items: Vec<CatalogueItem>,
    pub session: Session,
    pub stop: StopReason,
}

/// Walk the catalogue page by page, fetching every listed item's detail page
/// in listing order until one of the `StopReason`s applies.
pub fn scrape_catalogue(
    opts: &ScrapeOptions,
    fetcher: &dyn Fetch,
    progress: &mut dyn Progress,
) -> CatalogueRun {
    let mut session = Session::default();
    let mut items: Vec<CatalogueItem> = Vec::new();

    let (root, mut current) = match (opts.catalogue_root(), opts.first_page()) {
        (Ok(root), Ok(first)) => (root, first),
        (Err(e), _) | (_, Err(e)) => {
            note(progress, format!("Error fetching catalogue page: bad base URL {:?}: {e}", opts.base_url));
            return CatalogueRun { items, session, stop: StopReason::CatalogueFetch };
        }
    };

    progress.begin(opts.item_limit);

    let stop = loop {
        session.pages += 1;
        if session.pages > opts.page_limit {
            note(progress, format!("Reached the page limit of {}. Stopping.", opts.page_limit));
            break StopReason::PageLimit;
        }

        note(progress, format!(
            "Scraping catalogue page {}/{}: {}",
            session.pages, opts.page_limit, current
        ));

        let body = match fetcher.fetch(&current) {
            Ok(body) => body,
            Err(e) => {
                note(progress, format!("Error fetching catalogue page: {e}"));
                break StopReason::CatalogueFetch;
            }
        };
        let page = Html::parse_document(&body);

        let listing = extract_listing(&page);
        if listing.is_empty() {
            note(progress, "No items on this page. Stopping.");
            break StopReason::EmptyPage;
        }

        for entry in &listing {
            if session.items >= opts.item_limit {
                break;
            }
            session.items += 1;

            note(progress, format!(
                "  ({}/{}) Scraping book detail...",
                session.items, opts.item_limit
            ));

            match scrape_item(&root, entry, fetcher) {
                Ok(item) => {
                    items.push(item);
                    if !opts.request_pause.is_zero() {
                        thread::sleep(opts.request_pause);
                    }
                }
                Err(e) => {
                    session.failed += 1;
                    tracing::warn!(item = session.items, "skipped: {e}");
                    progress.log(&format!("  ({}/{}) Skipped: {e}", session.items, opts.item_limit));
                }
            }
            progress.item_done(session.items);
        }

        if session.items >= opts.item_limit {
            note(progress, format!("Reached the book limit of {}. Stopping.", opts.item_limit));
            break StopReason::ItemLimit;
        }

        let Some(href) = next_page_href(&page) else {
            note(progress, "No next page. Stopping.");
            break StopReason::EndOfCatalogue;
        };
        match root.join(&href) {
            Ok(next) => current = next,
            Err(e) => {
                note(progress, format!("Error fetching catalogue page: bad next link {href:?}: {e}"));
                break StopReason::CatalogueFetch;
            }
        }
    };

    tracing::debug!(?session, %stop, kept = items.len(), "catalogue loop finished");

    CatalogueRun { items, session, stop }
}

fn scrape_item(root: &Url, entry: &ListingEntry, fetcher: &dyn Fetch) -> Result<CatalogueItem, ItemError> {
    let href = entry.link.as_deref().ok_or(ItemError::MissingLink)?;
    let url = root
        .join(href)
        .map_err(|source| ItemError::BadLink { href: s!(href), source })?;

    let body = fetcher.fetch(&url)?;
    let detail = extract_detail(&Html::parse_document(&body));

    Ok(CatalogueItem::compose(entry, detail))
}
