//! The book store.
//!
//! [`Catalog`] owns every [`Book`] and keys it by ISBN. Books are kept in
//! insertion order, which is the order [`Catalog::all`] and
//! [`Catalog::search`](crate::Catalog::search) report them in. Availability
//! counters are maintained on every insert, remove and transition, so
//! [`Catalog::counts`] is O(1).
//!
//! # Examples
//!
//! ```
//! use shelfcat::{Book, Catalog, CatalogError};
//!
//! let mut catalog = Catalog::new();
//! catalog.insert(Book::new("Dune", "Herbert, Frank", 441_013_597, 1965))?;
//!
//! let duplicate = catalog.insert(Book::new("Dune II", "Someone", 441_013_597, 1966));
//! assert!(matches!(duplicate, Err(CatalogError::AlreadyExists(441_013_597))));
//! assert_eq!(catalog.get(441_013_597)?.title(), "Dune");
//! # Ok::<(), CatalogError>(())
//! ```

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::record::{Availability, Book};

/// Totals reported by [`Catalog::counts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogCounts {
    /// Number of books in the catalog
    pub total: usize,
    /// Books on the shelf
    pub available: usize,
    /// Books out on loan
    pub borrowed: usize,
}

/// In-memory store of books keyed by ISBN.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: IndexMap<u64, Book>,
    borrowed: usize,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::AlreadyExists`] if a book with the same ISBN is
    /// already present; the existing book is left untouched.
    pub fn insert(&mut self, book: Book) -> Result<()> {
        match self.books.entry(book.isbn()) {
            Entry::Occupied(_) => Err(CatalogError::AlreadyExists(book.isbn())),
            Entry::Vacant(slot) => {
                if book.is_borrowed() {
                    self.borrowed += 1;
                }
                debug!(isbn = book.isbn(), title = book.title(), "book added");
                slot.insert(book);
                Ok(())
            },
        }
    }

    /// Remove a book and hand it back.
    ///
    /// The relative order of the remaining books is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no book has this ISBN.
    pub fn remove(&mut self, isbn: u64) -> Result<Book> {
        let book = self
            .books
            .shift_remove(&isbn)
            .ok_or(CatalogError::NotFound(isbn))?;
        if book.is_borrowed() {
            self.borrowed -= 1;
        }
        debug!(isbn, title = book.title(), "book removed");
        Ok(book)
    }

    /// Look up a book by ISBN.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no book has this ISBN.
    pub fn get(&self, isbn: u64) -> Result<&Book> {
        self.books.get(&isbn).ok_or(CatalogError::NotFound(isbn))
    }

    /// Returns `true` if a book with this ISBN is present.
    #[must_use]
    pub fn contains(&self, isbn: u64) -> bool {
        self.books.contains_key(&isbn)
    }

    /// Iterate over all books in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// Snapshot of references to every book, in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<&Book> {
        self.iter().collect()
    }

    /// Number of books.
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns `true` if the catalog holds no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Number of books on the shelf.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.len() - self.borrowed
    }

    /// Number of books out on loan.
    #[must_use]
    pub fn borrowed_count(&self) -> usize {
        self.borrowed
    }

    /// Total, available and borrowed counts.
    #[must_use]
    pub fn counts(&self) -> CatalogCounts {
        CatalogCounts {
            total: self.len(),
            available: self.available_count(),
            borrowed: self.borrowed_count(),
        }
    }

    /// Change a book's availability, keeping the counters in step.
    ///
    /// Returns the previous availability.
    pub(crate) fn set_availability(
        &mut self,
        isbn: u64,
        availability: Availability,
    ) -> Result<Availability> {
        let book = self
            .books
            .get_mut(&isbn)
            .ok_or(CatalogError::NotFound(isbn))?;
        let previous = book.availability();
        match (previous, availability) {
            (Availability::Available, Availability::Borrowed) => self.borrowed += 1,
            (Availability::Borrowed, Availability::Available) => self.borrowed -= 1,
            _ => {},
        }
        book.set_availability(availability);
        Ok(previous)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = indexmap::map::Values<'a, u64, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.values()
    }
}
