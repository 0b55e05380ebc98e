//! Borrow and return transitions.
//!
//! A book is either [`Available`](Availability::Available) or
//! [`Borrowed`](Availability::Borrowed):
//!
//! | From        | Operation              | Result                               |
//! |-------------|------------------------|--------------------------------------|
//! | `Available` | [`Catalog::borrow`]      | `Borrowed`                           |
//! | `Borrowed`  | [`Catalog::borrow`]      | `Err(AlreadyBorrowed)`, unchanged    |
//! | `Borrowed`  | [`Catalog::return_book`] | `Available`, [`ReturnOutcome::Returned`] |
//! | `Available` | [`Catalog::return_book`] | unchanged, [`ReturnOutcome::AlreadyAvailable`] |
//!
//! Returning a book that is already on the shelf is not an error.

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::record::{Availability, Book};

/// Outcome of a successful [`Catalog::return_book`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// The book was on loan and is now available
    Returned,
    /// The book was already on the shelf; nothing changed
    AlreadyAvailable,
}

impl Catalog {
    /// Borrow a book.
    ///
    /// Returns the book in its new, borrowed state.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] if no book has this ISBN
    /// - [`CatalogError::AlreadyBorrowed`] if the book is already on loan
    pub fn borrow(&mut self, isbn: u64) -> Result<&Book> {
        if self.get(isbn)?.is_borrowed() {
            return Err(CatalogError::AlreadyBorrowed(isbn));
        }
        self.set_availability(isbn, Availability::Borrowed)?;
        let book = self.get(isbn)?;
        debug!(isbn, title = book.title(), "book borrowed");
        Ok(book)
    }

    /// Return a borrowed book.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no book has this ISBN.
    pub fn return_book(&mut self, isbn: u64) -> Result<ReturnOutcome> {
        let previous = self.set_availability(isbn, Availability::Available)?;
        if previous.is_available() {
            debug!(isbn, "return of a book that was already available");
            Ok(ReturnOutcome::AlreadyAvailable)
        } else {
            debug!(isbn, "book returned");
            Ok(ReturnOutcome::Returned)
        }
    }
}
