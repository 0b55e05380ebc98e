//! Search and ordering of catalog views.
//!
//! A *view* is a fresh `Vec<&Book>` computed from the catalog: filtered by a
//! [`BookFilter`] and ordered by a [`SortKey`] and [`SortOrder`]. Views borrow
//! the catalog, so they are recomputed after every mutation rather than
//! cached.
//!
//! # Matching
//!
//! A book matches a search text when the lowercased text is a substring of
//! the lowercased title or author, or when the text with all whitespace and
//! hyphens removed is a substring of the decimal ISBN. The empty text matches
//! everything.
//!
//! # Ordering
//!
//! Five keys in two directions give the ten supported orderings. String keys
//! compare case-insensitively. Year ties are broken by author last name,
//! ascending in both directions. Every sort is stable, so books that still
//! tie keep their catalog order.
//!
//! # Examples
//!
//! ```
//! use shelfcat::{Book, BookFilter, Catalog, SortKey, SortOrder};
//!
//! let mut catalog = Catalog::new();
//! catalog.insert(Book::new("Emma", "Austen, Jane", 1, 1815))?;
//! catalog.insert(Book::new("Dune", "Herbert, Frank", 2, 1965))?;
//!
//! let hits = catalog.search("herb");
//! assert_eq!(hits.len(), 1);
//!
//! let by_title = catalog.view(&BookFilter::new(), SortKey::Title, SortOrder::Ascending);
//! assert_eq!(by_title[0].title(), "Dune");
//! # Ok::<(), shelfcat::CatalogError>(())
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::isbn;
use crate::record::{Availability, Book};

/// Field a view is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Title, case-insensitive (default)
    #[default]
    Title,
    /// Author last name (text before the first comma), case-insensitive
    Author,
    /// Publication year, ties broken by author last name
    Year,
    /// Numeric ISBN
    Isbn,
    /// Available books before borrowed ones
    Availability,
}

impl SortKey {
    /// All sort keys, in menu order.
    pub const ALL: [SortKey; 5] = [
        SortKey::Title,
        SortKey::Author,
        SortKey::Year,
        SortKey::Isbn,
        SortKey::Availability,
    ];
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// A-Z, oldest first, lowest ISBN first, available first (default)
    #[default]
    Ascending,
    /// Z-A, newest first, highest ISBN first, borrowed first
    Descending,
}

/// Criteria selecting the books of a view.
///
/// Both criteria are optional; an empty filter selects every book.
///
/// # Examples
///
/// ```
/// use shelfcat::{Availability, Book, BookFilter};
///
/// let filter = BookFilter::new().text("441-01").availability(Availability::Available);
/// assert!(filter.matches(&Book::new("Dune", "Herbert", 441_013_597, 1965)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    text: Option<String>,
    isbn_text: String,
    availability: Option<Availability>,
}

impl BookFilter {
    /// Create a filter that selects every book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter selecting only available books.
    #[must_use]
    pub fn available() -> Self {
        Self::new().availability(Availability::Available)
    }

    /// Filter selecting only borrowed books.
    #[must_use]
    pub fn borrowed() -> Self {
        Self::new().availability(Availability::Borrowed)
    }

    /// Require the search text to match title, author or ISBN.
    #[must_use]
    pub fn text(mut self, query: &str) -> Self {
        let lowered = query.to_lowercase();
        self.isbn_text = isbn::normalize(&lowered);
        self.text = Some(lowered);
        self
    }

    /// Require a specific availability.
    #[must_use]
    pub fn availability(mut self, availability: Availability) -> Self {
        self.availability = Some(availability);
        self
    }

    /// The availability this filter requires, if any.
    #[must_use]
    pub fn required_availability(&self) -> Option<Availability> {
        self.availability
    }

    /// Check whether a book satisfies every criterion.
    #[must_use]
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(availability) = self.availability {
            if book.availability() != availability {
                return false;
            }
        }

        match &self.text {
            None => true,
            Some(text) => {
                book.title().to_lowercase().contains(text.as_str())
                    || book.author().to_lowercase().contains(text.as_str())
                    || book.isbn().to_string().contains(self.isbn_text.as_str())
            },
        }
    }
}

/// Compare two strings ignoring case.
fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

fn compare_last_names(a: &Book, b: &Book) -> Ordering {
    compare_ignore_case(a.author_last_name(), b.author_last_name())
}

/// Compare two books under a key and direction.
#[must_use]
pub fn compare_books(a: &Book, b: &Book, key: SortKey, order: SortOrder) -> Ordering {
    let primary = match key {
        SortKey::Title => compare_ignore_case(a.title(), b.title()),
        SortKey::Author => compare_last_names(a, b),
        SortKey::Year => a.year().cmp(&b.year()),
        SortKey::Isbn => a.isbn().cmp(&b.isbn()),
        SortKey::Availability => b.is_available().cmp(&a.is_available()),
    };
    let primary = match order {
        SortOrder::Ascending => primary,
        SortOrder::Descending => primary.reverse(),
    };

    if key == SortKey::Year {
        primary.then_with(|| compare_last_names(a, b))
    } else {
        primary
    }
}

/// Sort a view in place. The sort is stable.
pub fn sort_books(books: &mut [&Book], key: SortKey, order: SortOrder) {
    books.sort_by(|a, b| compare_books(a, b, key, order));
}

impl Catalog {
    /// Books matching a search text, in catalog order.
    ///
    /// The empty query returns every book.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Book> {
        let filter = BookFilter::new().text(query);
        self.iter().filter(|book| filter.matches(book)).collect()
    }

    /// Compute a fresh filtered and sorted view.
    #[must_use]
    pub fn view(&self, filter: &BookFilter, key: SortKey, order: SortOrder) -> Vec<&Book> {
        let mut books: Vec<&Book> = self.iter().filter(|book| filter.matches(book)).collect();
        sort_books(&mut books, key, order);
        books
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        for book in [
            Book::new("dune", "Herbert, Frank", 441_013_597, 1965),
            Book::new("Emma", "Austen, Jane", 1_234_567_890, 1815),
            Book::new("Anathem", "Stephenson, Neal", 61_474_096, 2008),
            Book::new("Children of Dune", "Herbert, Frank", 9_876_543_210, 1976),
        ] {
            catalog.insert(book).unwrap();
        }
        catalog.borrow(1_234_567_890).unwrap();
        catalog
    }

    fn isbns(books: &[&Book]) -> Vec<u64> {
        books.iter().map(|b| b.isbn()).collect()
    }

    #[test]
    fn test_search_title_case_insensitive() {
        let catalog = sample();
        assert_eq!(isbns(&catalog.search("DUNE")), vec![441_013_597, 9_876_543_210]);
    }

    #[test]
    fn test_search_author() {
        let catalog = sample();
        assert_eq!(isbns(&catalog.search("austen")), vec![1_234_567_890]);
    }

    #[test]
    fn test_search_isbn_with_hyphens_and_spaces() {
        let catalog = sample();
        assert_eq!(isbns(&catalog.search("1-23 456")), vec![1_234_567_890]);
        assert_eq!(isbns(&catalog.search("1013")), vec![441_013_597]);
    }

    #[test]
    fn test_search_empty_returns_everything() {
        let catalog = sample();
        assert_eq!(catalog.search("").len(), 4);
    }

    #[test]
    fn test_search_no_match() {
        let catalog = sample();
        assert!(catalog.search("xyz123nonexistent").is_empty());
    }

    #[test]
    fn test_filter_availability() {
        let catalog = sample();
        let borrowed = catalog.view(&BookFilter::borrowed(), SortKey::Title, SortOrder::Ascending);
        assert_eq!(isbns(&borrowed), vec![1_234_567_890]);
        let available = catalog.view(&BookFilter::available(), SortKey::Title, SortOrder::Ascending);
        assert_eq!(available.len(), 3);
        assert_eq!(
            BookFilter::available().required_availability(),
            Some(Availability::Available)
        );
    }

    #[test]
    fn test_sort_title_ignores_case() {
        let catalog = sample();
        let view = catalog.view(&BookFilter::new(), SortKey::Title, SortOrder::Ascending);
        let titles: Vec<&str> = view.iter().map(|b| b.title()).collect();
        assert_eq!(titles, vec!["Anathem", "Children of Dune", "dune", "Emma"]);

        let view = catalog.view(&BookFilter::new(), SortKey::Title, SortOrder::Descending);
        assert_eq!(view[0].title(), "Emma");
    }

    #[test]
    fn test_sort_author_last_name() {
        let catalog = sample();
        let view = catalog.view(&BookFilter::new(), SortKey::Author, SortOrder::Ascending);
        let names: Vec<&str> = view.iter().map(|b| b.author_last_name()).collect();
        assert_eq!(names, vec!["Austen", "Herbert", "Herbert", "Stephenson"]);
        // Stable: the two Herbert books keep catalog order
        assert_eq!(view[1].isbn(), 441_013_597);
    }

    #[test]
    fn test_sort_year_both_directions() {
        let catalog = sample();
        let asc = catalog.view(&BookFilter::new(), SortKey::Year, SortOrder::Ascending);
        assert_eq!(
            asc.iter().map(|b| b.year()).collect::<Vec<_>>(),
            vec![1815, 1965, 1976, 2008]
        );
        let desc = catalog.view(&BookFilter::new(), SortKey::Year, SortOrder::Descending);
        assert_eq!(
            desc.iter().map(|b| b.year()).collect::<Vec<_>>(),
            vec![2008, 1976, 1965, 1815]
        );
    }

    #[test]
    fn test_sort_year_ties_by_author_ascending() {
        let mut catalog = Catalog::new();
        catalog.insert(Book::new("C", "Zola, Emile", 1, 1900)).unwrap();
        catalog.insert(Book::new("B", "adams, Henry", 2, 1900)).unwrap();
        catalog.insert(Book::new("A", "Murray, Gilbert", 3, 1850)).unwrap();
        catalog.insert(Book::new("D", "Conrad, Joseph", 4, 1900)).unwrap();

        let asc = catalog.view(&BookFilter::new(), SortKey::Year, SortOrder::Ascending);
        assert_eq!(isbns(&asc), vec![3, 2, 4, 1]);

        let desc = catalog.view(&BookFilter::new(), SortKey::Year, SortOrder::Descending);
        assert_eq!(isbns(&desc), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sort_isbn() {
        let catalog = sample();
        let asc = catalog.view(&BookFilter::new(), SortKey::Isbn, SortOrder::Ascending);
        assert_eq!(
            isbns(&asc),
            vec![61_474_096, 441_013_597, 1_234_567_890, 9_876_543_210]
        );
        let desc = catalog.view(&BookFilter::new(), SortKey::Isbn, SortOrder::Descending);
        assert_eq!(desc[0].isbn(), 9_876_543_210);
    }

    #[test]
    fn test_sort_availability_partition() {
        let catalog = sample();
        let asc = catalog.view(&BookFilter::new(), SortKey::Availability, SortOrder::Ascending);
        assert_eq!(
            isbns(&asc),
            vec![441_013_597, 61_474_096, 9_876_543_210, 1_234_567_890]
        );
        let desc = catalog.view(&BookFilter::new(), SortKey::Availability, SortOrder::Descending);
        assert_eq!(
            isbns(&desc),
            vec![1_234_567_890, 441_013_597, 61_474_096, 9_876_543_210]
        );
    }

    #[test]
    fn test_all_ten_orderings_keep_every_book() {
        let catalog = sample();
        for key in SortKey::ALL {
            for order in [SortOrder::Ascending, SortOrder::Descending] {
                assert_eq!(catalog.view(&BookFilter::new(), key, order).len(), 4);
            }
        }
    }
}
