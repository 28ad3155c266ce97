// tests/log.rs
//
// Debug log contents. Kept in its own test binary: the subscriber is global.
mod common;

use std::fs;

use book_scrape::config::consts::LOG_FILE;
use book_scrape::progress::NullProgress;
use book_scrape::scrape::{extract_listing, scrape_catalogue};
use common::*;
use scraper::Html;

const CATALOGUE: &str = include_str!("fixtures/catalogue_page.html");

#[test]
fn debug_log_keeps_own_events_and_drops_parser_chatter() {
    let dir = tempfile::tempdir().unwrap();
    book_scrape::log::init_in(dir.path()).unwrap();

    let entries = extract_listing(&Html::parse_document(CATALOGUE));
    assert_eq!(entries.len(), 3);

    let site = MockSite::catalogue(1, 2);
    scrape_catalogue(&scrape_options(), &site, &mut NullProgress);

    let text = fs::read_to_string(dir.path().join(LOG_FILE)).unwrap();
    assert!(text.contains("Scraping catalogue page 1/4"));
    assert!(!text.contains("insertion mode"));
    // one page, two books, plus the loop summary
    assert!(text.lines().count() < 20, "log too chatty:\n{text}");
}
