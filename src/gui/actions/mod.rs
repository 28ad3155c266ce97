// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{open, scrape}.

mod open;    // src/gui/actions/open.rs
mod scrape;  // src/gui/actions/scrape.rs

pub use open::open;
pub use scrape::scrape;
