// src/scrape/mod.rs
mod books;
mod scrape;

pub use books::{extract_detail, extract_listing, next_page_href};
pub use scrape::{scrape_catalogue, CatalogueRun, Session, StopReason};
