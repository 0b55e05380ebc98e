#![allow(missing_docs)]
//! Benchmarks for the shelfcat catalog engine.
//!
//! Measures loading, searching, sorting and saving generated catalogs using
//! Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shelfcat::{
    Book, BookFilter, Catalog, CatalogReader, CatalogWriter, SortKey, SortOrder,
};
use std::fmt::Write;
use std::io::Cursor;

/// Generate catalog text with `count` lines.
fn generate_catalog_text(count: u64) -> String {
    let mut text = String::new();
    for i in 0..count {
        let book = Book::new(
            format!("Title {}", count - i),
            format!("Author{}, First, et al", i % 97),
            1_000_000_000 + i * 7,
            1900 + i32::try_from(i % 120).unwrap_or(0),
        );
        writeln!(text, "[{i}] {}", shelfcat::to_line(&book)).ok();
    }
    text
}

fn load(text: &str) -> Catalog {
    let reader = CatalogReader::new(Cursor::new(text));
    Catalog::read_from(reader).expect("generated text loads").0
}

/// Benchmark loading 10,000 lines.
fn benchmark_load_10k(c: &mut Criterion) {
    let text = black_box(generate_catalog_text(10_000));

    c.bench_function("load_10k_lines", |b| {
        b.iter(|| load(&text).len());
    });
}

/// Benchmark searching 10,000 books by author and by partial ISBN.
fn benchmark_search_10k(c: &mut Criterion) {
    let catalog = load(&generate_catalog_text(10_000));

    c.bench_function("search_10k_author", |b| {
        b.iter(|| catalog.search(black_box("author42")).len());
    });
    c.bench_function("search_10k_isbn", |b| {
        b.iter(|| catalog.search(black_box("1-00-000")).len());
    });
}

/// Benchmark every ordering over 10,000 books.
fn benchmark_sort_10k(c: &mut Criterion) {
    let catalog = load(&generate_catalog_text(10_000));
    let filter = BookFilter::new();

    c.bench_function("sort_10k_all_orderings", |b| {
        b.iter(|| {
            let mut total = 0;
            for key in SortKey::ALL {
                for order in [SortOrder::Ascending, SortOrder::Descending] {
                    total += catalog.view(&filter, key, order).len();
                }
            }
            total
        });
    });
}

/// Benchmark saving 10,000 books to memory.
fn benchmark_save_10k(c: &mut Criterion) {
    let catalog = load(&generate_catalog_text(10_000));

    c.bench_function("save_10k_books", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(600_000);
            let mut writer = CatalogWriter::new(&mut buffer);
            catalog.write_to(&mut writer, "").expect("write to memory")
        });
    });
}

criterion_group!(
    benches,
    benchmark_load_10k,
    benchmark_search_10k,
    benchmark_sort_10k,
    benchmark_save_10k,
);
criterion_main!(benches);
