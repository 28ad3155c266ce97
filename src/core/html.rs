// src/core/html.rs

// Total lookups over a parsed document: absence is `None`, never a panic.
// Callers turn `None` into the "N/A" sentinel with `or_na`.

use scraper::{ElementRef, Selector};

use crate::config::consts::NA;

/// Parse a selector written into the source. Only for literals.
pub fn selector(css: &'static str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("bad built-in selector {css:?}: {e}"))
}

/// First element under `scope` matching `sel`.
pub fn select_first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// All elements under `scope` matching `sel`, in document order.
pub fn select_all<'a>(scope: ElementRef<'a>, sel: &Selector) -> Vec<ElementRef<'a>> {
    scope.select(sel).collect()
}

/// Concatenated descendant text, untouched.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

pub fn attr_of(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).map(str::to_owned)
}

/// The `n`th whitespace-separated token of the `class` attribute, as written.
pub fn class_token(el: ElementRef<'_>, n: usize) -> Option<String> {
    el.value()
        .attr("class")?
        .split_whitespace()
        .nth(n)
        .map(str::to_owned)
}

/// First following sibling element with tag `tag`.
pub fn next_sibling_named<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sib| sib.value().name().eq_ignore_ascii_case(tag))
}

pub fn or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| s!(NA))
}
