// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// Everything the pagination loop needs. Defaults come from `consts`;
/// tests shrink the limits and zero the pause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub base_url: String,
    pub page_limit: usize,
    pub item_limit: usize,
    pub request_timeout: Duration,
    pub request_pause: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            page_limit: PAGE_LIMIT,
            item_limit: ITEM_LIMIT,
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl ScrapeOptions {
    /// `<base>/catalogue/`. Detail and next-page links are relative to this.
    pub fn catalogue_root(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.base_url)?.join(CATALOGUE_DIR)
    }

    pub fn first_page(&self) -> Result<Url, url::ParseError> {
        self.catalogue_root()?.join(FIRST_PAGE)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_path: PathBuf::from(OUTPUT_FILE) }
    }
}
