// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::AppOptions,
    core::net::{Fetch, HttpFetcher},
    data::CatalogueItem,
    file::write_items,
    progress::{note, Progress},
    scrape::{scrape_catalogue, Session, StopReason},
};

/// Summary of one run. `output` is the only thing a frontend needs to
/// decide whether there is a file to open.
pub struct RunSummary {
    pub output: Option<PathBuf>,
    pub items: Vec<CatalogueItem>,
    pub session: Session,
    pub stop: StopReason,
}

/// Scrape, then write once. Every expected failure ends up as a progress
/// line and `output: None`; nothing is returned as an error.
pub fn run(opts: &AppOptions, fetcher: &dyn Fetch, progress: &mut dyn Progress) -> RunSummary {
    let crawl = scrape_catalogue(&opts.scrape, fetcher, progress);

    let output = if crawl.items.is_empty() {
        note(progress, "Scraping finished, but no data was saved.");
        None
    } else {
        save(opts, &crawl.items, progress)
    };

    progress.finish();

    RunSummary {
        output,
        items: crawl.items,
        session: crawl.session,
        stop: crawl.stop,
    }
}

/// `run` against the live site.
pub fn run_default(opts: &AppOptions, progress: &mut dyn Progress) -> RunSummary {
    match HttpFetcher::new(opts.scrape.request_timeout) {
        Ok(fetcher) => run(opts, &fetcher, progress),
        Err(e) => {
            note(progress, format!("Error fetching catalogue page: {e}"));
            progress.finish();
            RunSummary {
                output: None,
                items: Vec::new(),
                session: Session::default(),
                stop: StopReason::CatalogueFetch,
            }
        }
    }
}

fn save(opts: &AppOptions, items: &[CatalogueItem], progress: &mut dyn Progress) -> Option<PathBuf> {
    let path = &opts.export.out_path;

    note(progress, format!("Scraping complete. Total books found: {}", items.len()));
    note(progress, format!("Saving data to {}...", path.display()));

    match write_items(path, items) {
        Ok(Some(written)) => {
            note(progress, format!("SUCCESS: Data saved to '{}'.", written.display()));
            Some(written)
        }
        Ok(None) => None,
        Err(e) => {
            tracing::error!(path = %path.display(), "write failed: {e}");
            progress.log(&format!("I/O error while writing to CSV: {e}"));
            None
        }
    }
}
