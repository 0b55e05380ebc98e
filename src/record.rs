//! Book record structures.
//!
//! This module provides the core record types of the catalog:
//! - [`Book`] — a single physical book
//! - [`Availability`] — whether the book is on the shelf or out on loan
//!
//! # Examples
//!
//! ```
//! use shelfcat::{Availability, Book};
//!
//! let book = Book::new("Dune", "Herbert, Frank", 441_013_597, 1965);
//! assert_eq!(book.author_last_name(), "Herbert");
//! assert_eq!(book.availability(), Availability::Available);
//!
//! let on_loan = Book::new("Emma", "Austen, Jane", 1_234_567_890, 1815)
//!     .with_availability(Availability::Borrowed);
//! assert!(on_loan.is_borrowed());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::isbn;

/// Circulation state of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Availability {
    /// On the shelf and can be borrowed (default)
    #[default]
    Available,
    /// Out on loan
    Borrowed,
}

impl Availability {
    /// Returns `true` for [`Availability::Available`].
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Borrowed => write!(f, "Borrowed"),
        }
    }
}

/// A physical book in the catalog.
///
/// Title, author, ISBN and year are fixed when the book is created. Only the
/// availability changes afterwards, and only through the owning
/// [`Catalog`](crate::Catalog), so the catalog's counters stay in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    isbn: u64,
    year: i32,
    #[serde(default)]
    availability: Availability,
}

impl Book {
    /// Create a new, available book.
    ///
    /// The author is stored verbatim; a comma-joined list such as
    /// `"Smith, Jones, et al"` is a single author string.
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, isbn: u64, year: i32) -> Self {
        Book {
            title: title.into(),
            author: author.into(),
            isbn,
            year,
            availability: Availability::Available,
        }
    }

    /// Set the initial availability.
    #[must_use]
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Book title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author string, exactly as stored
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// ISBN key
    #[must_use]
    pub fn isbn(&self) -> u64 {
        self.isbn
    }

    /// ISBN in display form (hyphenated when it has ten digits)
    #[must_use]
    pub fn formatted_isbn(&self) -> String {
        isbn::format(self.isbn)
    }

    /// Publication year
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Current availability
    #[must_use]
    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// Returns `true` if the book is on the shelf.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    /// Returns `true` if the book is out on loan.
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        !self.is_available()
    }

    /// The part of the author string before the first comma, trimmed.
    ///
    /// For `"Herbert, Frank"` this is `"Herbert"`. Author strings that are not
    /// in "Last, First" form yield whatever precedes the first comma, or the
    /// whole string when there is none.
    #[must_use]
    pub fn author_last_name(&self) -> &str {
        self.author.split(',').next().unwrap_or_default().trim()
    }

    pub(crate) fn set_availability(&mut self, availability: Availability) {
        self.availability = availability;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}), Author: {} (ISBN: {})",
            self.title,
            self.year,
            self.author,
            self.formatted_isbn()
        )
    }
}
