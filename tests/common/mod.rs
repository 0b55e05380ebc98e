//! Common test helpers and utilities shared across test suite.

use shelfcat::{Availability, Book, Catalog};

/// Path of the donation file fixture.
///
/// Holds 10 readable books, 3 malformed lines and 1 duplicate ISBN.
#[allow(dead_code)]
pub const DONATION_FILE: &str = "tests/data/book_donation.txt";

/// Creates a small catalog with one borrowed book.
///
/// Insertion order: Dune, Emma (borrowed), Anathem, Children of Dune.
#[allow(dead_code)]
pub fn create_test_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for book in [
        Book::new("Dune", "Herbert, Frank", 441_013_597, 1965),
        Book::new("Emma", "Austen, Jane", 1_234_567_890, 1815)
            .with_availability(Availability::Borrowed),
        Book::new("Anathem", "Stephenson, Neal", 61_474_096, 2008),
        Book::new("Children of Dune", "Herbert, Frank", 9_876_543_210, 1976),
    ] {
        catalog.insert(book).expect("unique ISBNs");
    }
    catalog
}

/// Creates a catalog of `count` available books titled `Book 000`, `Book 001`, ...
/// with ISBNs starting at 1000.
#[allow(dead_code)]
pub fn create_numbered_catalog(count: u64) -> Catalog {
    let mut catalog = Catalog::new();
    for i in 0..count {
        catalog
            .insert(Book::new(
                format!("Book {i:03}"),
                format!("Author{i}, A."),
                1000 + i,
                1900 + i32::try_from(i % 100).expect("small"),
            ))
            .expect("unique ISBNs");
    }
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_catalog_counts() {
        let counts = create_test_catalog().counts();
        assert_eq!((counts.total, counts.available, counts.borrowed), (4, 3, 1));
    }

    #[test]
    fn test_create_numbered_catalog() {
        assert_eq!(create_numbered_catalog(25).len(), 25);
    }
}
