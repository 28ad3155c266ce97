// benches/extract.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scraper::Html;

use book_scrape::scrape::{extract_detail, extract_listing, next_page_href};

const CATALOGUE: &str = include_str!("../tests/fixtures/catalogue_page.html");
const DETAIL: &str = include_str!("../tests/fixtures/detail_page.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("listing_parse_and_extract", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(CATALOGUE));
            let entries = extract_listing(&doc);
            black_box((entries.len(), next_page_href(&doc)))
        })
    });

    let parsed = Html::parse_document(CATALOGUE);
    c.bench_function("listing_extract_only", |b| {
        b.iter(|| black_box(extract_listing(black_box(&parsed)).len()))
    });

    c.bench_function("detail_parse_and_extract", |b| {
        b.iter(|| {
            let doc = Html::parse_document(black_box(DETAIL));
            black_box(extract_detail(&doc))
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
