// src/scrape/books.rs

// Field extraction for books.toscrape.com pages.
// Matching is structural (tag + class/id) and every lookup is total.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::{
    core::html::{attr_of, class_token, next_sibling_named, or_na, select_all, select_first, selector, text_of},
    data::{DetailFields, ListingEntry},
};

// Parsed once per process
static CARD: LazyLock<Selector> = LazyLock::new(|| selector("article.product_pod"));
static CARD_LINK: LazyLock<Selector> = LazyLock::new(|| selector("h3 a"));
static PRICE: LazyLock<Selector> = LazyLock::new(|| selector("p.price_color"));
static STARS: LazyLock<Selector> = LazyLock::new(|| selector("p.star-rating"));
static STOCK: LazyLock<Selector> = LazyLock::new(|| selector("p.instock.availability"));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| selector("div#product_description"));
static NEXT_LINK: LazyLock<Selector> = LazyLock::new(|| selector("li.next a"));

/// One entry per `article.product_pod`, in page order.
pub fn extract_listing(doc: &Html) -> Vec<ListingEntry> {
    select_all(doc.root_element(), &CARD)
        .into_iter()
        .map(|card| {
            let link = select_first(card, &CARD_LINK);
            let price = select_first(card, &PRICE);
            // Rating lives in the class list: `star-rating Three`.
            let stars = select_first(card, &STARS);

            ListingEntry {
                link: link.and_then(|a| attr_of(a, "href")),
                name: or_na(link.and_then(|a| attr_of(a, "title"))),
                price: or_na(price.map(text_of)),
                rating: or_na(stars.and_then(|p| class_token(p, 1))),
            }
        })
        .collect()
}

pub fn extract_detail(doc: &Html) -> DetailFields {
    let root = doc.root_element();

    let stock = select_first(root, &STOCK)
        .map(|p| text_of(p).trim().to_owned());

    let description = select_first(root, &DESCRIPTION)
        .and_then(|div| next_sibling_named(div, "p"))
        .map(text_of);

    DetailFields {
        stock: or_na(stock),
        description: or_na(description),
    }
}

/// Raw `href` of the pager's "next" link, if the page has one.
pub fn next_page_href(doc: &Html) -> Option<String> {
    select_first(doc.root_element(), &NEXT_LINK).and_then(|a| attr_of(a, "href"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_selectors_parse() {
        for sel in [&CARD, &CARD_LINK, &PRICE, &STARS, &STOCK, &DESCRIPTION, &NEXT_LINK] {
            LazyLock::force(sel);
        }
    }
}
