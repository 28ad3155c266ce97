// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://books.toscrape.com/";
pub const CATALOGUE_DIR: &str = "catalogue/";
pub const FIRST_PAGE: &str = "page-1.html";
pub const USER_AGENT: &str = concat!("book_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Scrape
pub const PAGE_LIMIT: usize = 4;
pub const ITEM_LIMIT: usize = 49;
pub const REQUEST_PAUSE_MS: u64 = 50; // be polite

// Extraction
pub const NA: &str = "N/A";

// Export
pub const OUTPUT_FILE: &str = "books_data_limited_output.csv";
pub const HEADERS: [&str; 5] = ["Name", "Price", "Rating", "Stock", "Description"];

// Local debug log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
