// tests/common/mod.rs
//
// In-memory catalogue for driving the scrape loop without a network.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use book_scrape::config::options::{AppOptions, ScrapeOptions};
use book_scrape::core::net::Fetch;
use book_scrape::error::FetchError;
use url::Url;

pub const BASE: &str = "http://books.test/";
pub const ROOT: &str = "http://books.test/catalogue/";

#[derive(Default)]
pub struct MockSite {
    pages: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl MockSite {
    /// `pages` catalogue pages of `per_page` books each; every page but the
    /// last links to the next one. Every detail page exists.
    pub fn catalogue(pages: usize, per_page: usize) -> Self {
        let mut site = Self::default();
        for p in 1..=pages {
            let next = (p < pages).then(|| format!("page-{}.html", p + 1));
            site.put_page(p, &catalogue_html(p, per_page, next.as_deref()));
            for i in 1..=per_page {
                site.put(&detail_url(p, i), &detail_html(p, i));
            }
        }
        site
    }

    pub fn put(&mut self, url: &str, body: &str) {
        self.pages.insert(url.to_string(), body.to_string());
    }

    pub fn put_page(&mut self, page: usize, body: &str) {
        self.put(&page_url(page), body);
    }

    pub fn remove(&mut self, url: &str) {
        self.pages.remove(url);
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn was_requested(&self, url: &str) -> bool {
        self.requests.borrow().iter().any(|u| u == url)
    }

    pub fn detail_requests(&self) -> usize {
        self.requests.borrow().iter().filter(|u| u.ends_with("/index.html")).count()
    }
}

impl Fetch for MockSite {
    fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::Status { status: 404, url: url.to_string() })
    }
}

pub fn page_url(page: usize) -> String {
    format!("{ROOT}page-{page}.html")
}

pub fn book_href(page: usize, i: usize) -> String {
    format!("book-{page}-{i}_{}/index.html", page * 100 + i)
}

pub fn detail_url(page: usize, i: usize) -> String {
    format!("{ROOT}{}", book_href(page, i))
}

pub fn book_title(page: usize, i: usize) -> String {
    format!("Book {page}-{i}")
}

pub fn card_html(page: usize, i: usize) -> String {
    format!(
        r#"<article class="product_pod">
  <p class="star-rating Four"><i class="icon-star"></i></p>
  <h3><a href="{href}" title="{title}">{title}</a></h3>
  <div class="product_price"><p class="price_color">£{page}.{i:02}</p></div>
</article>"#,
        href = book_href(page, i),
        title = book_title(page, i),
    )
}

pub fn catalogue_html(page: usize, per_page: usize, next: Option<&str>) -> String {
    let cards: String = (1..=per_page)
        .map(|i| format!("<li>{}</li>\n", card_html(page, i)))
        .collect();
    let pager = match next {
        Some(href) => format!(r#"<ul class="pager"><li class="next"><a href="{href}">next</a></li></ul>"#),
        None => r#"<ul class="pager"><li class="current">last</li></ul>"#.to_string(),
    };
    format!("<html><body><ol class=\"row\">{cards}</ol>{pager}</body></html>")
}

pub fn detail_html(page: usize, i: usize) -> String {
    format!(
        r#"<html><body><article class="product_page">
  <p class="instock availability"> In stock ({i} available) </p>
  <div id="product_description"><h2>Product Description</h2></div>
  <p>About book {page}-{i}.</p>
</article></body></html>"#
    )
}

pub fn scrape_options() -> ScrapeOptions {
    ScrapeOptions {
        base_url: BASE.to_string(),
        request_pause: Duration::ZERO,
        ..ScrapeOptions::default()
    }
}

pub fn app_options(out: &std::path::Path) -> AppOptions {
    let mut opts = AppOptions::default();
    opts.scrape = scrape_options();
    opts.export.out_path = out.to_path_buf();
    opts
}
