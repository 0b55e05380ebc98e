//! Paged listings that act on the selected book.
//!
//! A [`BrowseSession`] is what an interactive front end drives for the
//! "available books" and "borrowed books" screens: it renders one page at a
//! time, moves between pages, and borrows or returns the book the user picks
//! by its position on the page.
//!
//! The session never keeps a view between calls. Each [`BrowseSession::page`]
//! and [`BrowseSession::handle`] recomputes the filtered, sorted view from the
//! catalog first, so a borrow made from the available listing is reflected on
//! the very next render and the pager is clamped to the new length.
//!
//! # Examples
//!
//! ```
//! use shelfcat::{Book, BrowseOutcome, BrowseSession, Catalog, PageCommand};
//!
//! let mut catalog = Catalog::new();
//! catalog.insert(Book::new("Emma", "Austen, Jane", 1, 1815))?;
//! catalog.insert(Book::new("Dune", "Herbert, Frank", 2, 1965))?;
//!
//! let mut session = BrowseSession::available(10);
//! assert_eq!(session.page(&catalog).books[0].title(), "Dune");
//!
//! let outcome = session.handle(&mut catalog, PageCommand::Select(1))?;
//! assert_eq!(outcome, BrowseOutcome::Borrowed(2));
//! assert_eq!(session.page(&catalog).total, 1);
//! # Ok::<(), shelfcat::CatalogError>(())
//! ```

use tracing::debug;

use crate::catalog::Catalog;
use crate::circulation::ReturnOutcome;
use crate::error::Result;
use crate::pager::{Page, PageCommand, PageOutcome, Pager};
use crate::query::{BookFilter, SortKey, SortOrder};
use crate::record::Book;

/// What selecting a book on a listing does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionAction {
    /// Borrow the selected book
    Borrow,
    /// Return the selected book
    Return,
    /// Only report which book was selected (default)
    #[default]
    Inspect,
}

/// Result of [`BrowseSession::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// A navigation command was applied
    Navigated(PageOutcome),
    /// The selected book (by ISBN) was borrowed
    Borrowed(u64),
    /// The selected book (by ISBN) was returned
    Returned(u64, ReturnOutcome),
    /// The selected book (by ISBN), with no action taken
    Selected(u64),
}

/// A paged listing over a filtered, sorted view of a catalog.
#[derive(Debug, Clone)]
pub struct BrowseSession {
    filter: BookFilter,
    key: SortKey,
    order: SortOrder,
    action: SelectionAction,
    pager: Pager,
}

impl BrowseSession {
    /// Listing with a custom filter and ordering. Selecting a book only
    /// reports it; see [`BrowseSession::with_action`].
    #[must_use]
    pub fn new(filter: BookFilter, key: SortKey, order: SortOrder, page_size: usize) -> Self {
        BrowseSession {
            filter,
            key,
            order,
            action: SelectionAction::Inspect,
            pager: Pager::new(page_size),
        }
    }

    /// Available books by title; selecting one borrows it.
    #[must_use]
    pub fn available(page_size: usize) -> Self {
        Self::new(
            BookFilter::available(),
            SortKey::Title,
            SortOrder::Ascending,
            page_size,
        )
        .with_action(SelectionAction::Borrow)
    }

    /// Borrowed books by title; selecting one returns it.
    #[must_use]
    pub fn borrowed(page_size: usize) -> Self {
        Self::new(
            BookFilter::borrowed(),
            SortKey::Title,
            SortOrder::Ascending,
            page_size,
        )
        .with_action(SelectionAction::Return)
    }

    /// Set what selecting a book does.
    #[must_use]
    pub fn with_action(mut self, action: SelectionAction) -> Self {
        self.action = action;
        self
    }

    /// The current pager state
    #[must_use]
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    fn view<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Book> {
        catalog.view(&self.filter, self.key, self.order)
    }

    /// Recompute the view and return the visible page.
    pub fn page<'a>(&mut self, catalog: &'a Catalog) -> Page<'a> {
        let view = self.view(catalog);
        self.pager.page(&view)
    }

    /// Apply a command against a freshly computed view.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidSelection`](crate::CatalogError::InvalidSelection)
    ///   if the selected position is not on the visible page
    /// - any error from the borrow or return of the selected book
    pub fn handle(&mut self, catalog: &mut Catalog, command: PageCommand) -> Result<BrowseOutcome> {
        let isbn = {
            let view = self.view(catalog);
            match self.pager.apply(view.len(), command)? {
                PageOutcome::Selected(index) => view[index].isbn(),
                navigated => return Ok(BrowseOutcome::Navigated(navigated)),
            }
        };

        debug!(isbn, action = ?self.action, "book selected from listing");
        match self.action {
            SelectionAction::Borrow => {
                catalog.borrow(isbn)?;
                Ok(BrowseOutcome::Borrowed(isbn))
            },
            SelectionAction::Return => {
                let outcome = catalog.return_book(isbn)?;
                Ok(BrowseOutcome::Returned(isbn, outcome))
            },
            SelectionAction::Inspect => Ok(BrowseOutcome::Selected(isbn)),
        }
    }
}
