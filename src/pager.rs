//! Windowing over a view for paged browsing.
//!
//! A [`Pager`] holds only a page size and a start offset. Every operation
//! takes the current length of the view, because the view may have grown or
//! shrunk since the last call (a borrow from the available-books listing
//! removes the book from that listing). If the start offset no longer leaves
//! anything visible it is pulled back to the last full page.
//!
//! # Examples
//!
//! ```
//! use shelfcat::{PageOutcome, Pager};
//!
//! let mut pager = Pager::new(10);
//! assert_eq!(pager.window(25), 0..10);
//! assert_eq!(pager.next(25), PageOutcome::Moved);
//! assert_eq!(pager.next(25), PageOutcome::Moved);
//! assert_eq!(pager.window(25), 20..25);
//! assert_eq!(pager.next(25), PageOutcome::AlreadyLastPage);
//!
//! // The view shrank to nine books: back to the first page
//! assert_eq!(pager.window(9), 0..9);
//! ```

use std::ops::Range;
use std::str::FromStr;

use crate::error::{CatalogError, Result};
use crate::record::Book;

/// Page size used by the browsing listings unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A navigation request from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommand {
    /// Show the following page
    Next,
    /// Show the preceding page
    Previous,
    /// Pick the book at this 1-based position of the visible window
    Select(usize),
}

impl FromStr for PageCommand {
    type Err = CatalogError;

    /// Accepts `N`, `P` (any case) or a positive number.
    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        if input.eq_ignore_ascii_case("n") {
            Ok(PageCommand::Next)
        } else if input.eq_ignore_ascii_case("p") {
            Ok(PageCommand::Previous)
        } else {
            input
                .parse::<usize>()
                .map(PageCommand::Select)
                .map_err(|_| CatalogError::InvalidCommand(input.to_string()))
        }
    }
}

/// Result of a pager operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The window moved
    Moved,
    /// Already on the first page; nothing changed
    AlreadyFirstPage,
    /// Already on the last page; nothing changed
    AlreadyLastPage,
    /// The selection resolved to this absolute index into the view
    Selected(usize),
}

/// Start offset and page size over a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    start: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// Create a pager at the first page. A page size of zero is treated as one.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Pager {
            page_size: page_size.max(1),
            start: 0,
        }
    }

    /// Books per page
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current start offset (before clamping to any particular view)
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Pull the start offset back if it leaves nothing visible in a view of
    /// `len` books.
    pub fn clamp(&mut self, len: usize) {
        if self.start >= len {
            self.start = len.saturating_sub(self.page_size);
        }
    }

    /// Visible index range into a view of `len` books.
    pub fn window(&mut self, len: usize) -> Range<usize> {
        self.clamp(len);
        self.start..self.start.saturating_add(self.page_size).min(len)
    }

    /// Advance to the next page.
    pub fn next(&mut self, len: usize) -> PageOutcome {
        let window = self.window(len);
        if window.end < len {
            self.start = window.end;
            PageOutcome::Moved
        } else {
            PageOutcome::AlreadyLastPage
        }
    }

    /// Go back one page.
    pub fn previous(&mut self, len: usize) -> PageOutcome {
        self.clamp(len);
        if self.start > 0 {
            self.start = self.start.saturating_sub(self.page_size);
            PageOutcome::Moved
        } else {
            PageOutcome::AlreadyFirstPage
        }
    }

    /// Resolve a 1-based position in the visible window to an index into the
    /// view.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidSelection`] if `index` is zero or past
    /// the end of the visible window.
    pub fn select(&mut self, len: usize, index: usize) -> Result<usize> {
        let window = self.window(len);
        if index == 0 || index > window.len() {
            return Err(CatalogError::InvalidSelection {
                index,
                max: window.len(),
            });
        }
        Ok(window.start + index - 1)
    }

    /// Apply a navigation command to a view of `len` books.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidSelection`] for an out-of-range
    /// [`PageCommand::Select`].
    pub fn apply(&mut self, len: usize, command: PageCommand) -> Result<PageOutcome> {
        match command {
            PageCommand::Next => Ok(self.next(len)),
            PageCommand::Previous => Ok(self.previous(len)),
            PageCommand::Select(index) => self.select(len, index).map(PageOutcome::Selected),
        }
    }

    /// Cut the visible page out of a view.
    pub fn page<'a>(&mut self, view: &[&'a Book]) -> Page<'a> {
        let total = view.len();
        let window = self.window(total);
        let size = self.page_size;
        Page {
            books: view[window.clone()].to_vec(),
            start: window.start,
            end: window.end,
            total,
            number: pages_covering(window.end, size),
            page_count: pages_covering(total, size),
        }
    }
}

/// Number of `size`-book pages needed to cover `len` books.
fn pages_covering(len: usize, size: usize) -> usize {
    len / size + usize::from(len % size != 0)
}

/// The visible part of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    /// Books on this page, in view order
    pub books: Vec<&'a Book>,
    /// Index of the first visible book in the view
    pub start: usize,
    /// One past the index of the last visible book
    pub end: usize,
    /// Length of the whole view
    pub total: usize,
    /// 1-based page number (0 for an empty view)
    pub number: usize,
    /// Number of pages in the view
    pub page_count: usize,
}

impl Page<'_> {
    /// Returns `true` if the view had no books.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns `true` on the first page.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.start == 0
    }

    /// Returns `true` on the last page.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.end >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_first_page() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.window(25), 0..10);
        assert_eq!(pager.window(4), 0..4);
        assert_eq!(pager.window(0), 0..0);
    }

    #[test]
    fn test_next_until_last_page() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.next(25), PageOutcome::Moved);
        assert_eq!(pager.start(), 10);
        assert_eq!(pager.next(25), PageOutcome::Moved);
        assert_eq!(pager.start(), 20);
        assert_eq!(pager.next(25), PageOutcome::AlreadyLastPage);
        assert_eq!(pager.start(), 20);
    }

    #[test]
    fn test_previous_on_first_page() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.previous(25), PageOutcome::AlreadyFirstPage);
        pager.next(25);
        assert_eq!(pager.previous(25), PageOutcome::Moved);
        assert_eq!(pager.start(), 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut pager = Pager::new(10);
        pager.next(25);
        pager.next(25);
        assert_eq!(pager.start(), 20);

        pager.clamp(9);
        assert_eq!(pager.start(), 0);
    }

    #[test]
    fn test_clamp_to_last_full_page() {
        let mut pager = Pager::new(10);
        pager.next(25);
        pager.next(25);
        // 20 is past the end of an 18-book view
        assert_eq!(pager.window(18), 8..18);
    }

    #[test]
    fn test_clamp_leaves_valid_start() {
        let mut pager = Pager::new(10);
        pager.next(25);
        pager.clamp(15);
        assert_eq!(pager.start(), 10);
    }

    #[test]
    fn test_select_within_window() {
        let mut pager = Pager::new(10);
        pager.next(25);
        assert_eq!(pager.select(25, 1).unwrap(), 10);
        assert_eq!(pager.select(25, 10).unwrap(), 19);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut pager = Pager::new(10);
        pager.next(25);
        pager.next(25);
        let err = pager.select(25, 6).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidSelection { index: 6, max: 5 }
        ));
        assert!(pager.select(25, 0).is_err());
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let mut pager = Pager::new(0);
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.window(3), 0..1);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("n".parse::<PageCommand>().unwrap(), PageCommand::Next);
        assert_eq!(" P ".parse::<PageCommand>().unwrap(), PageCommand::Previous);
        assert_eq!("3".parse::<PageCommand>().unwrap(), PageCommand::Select(3));
        assert!(matches!(
            "x".parse::<PageCommand>(),
            Err(CatalogError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_apply() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.apply(25, PageCommand::Next).unwrap(), PageOutcome::Moved);
        assert_eq!(
            pager.apply(25, PageCommand::Select(2)).unwrap(),
            PageOutcome::Selected(11)
        );
        assert_eq!(
            pager.apply(25, PageCommand::Previous).unwrap(),
            PageOutcome::Moved
        );
    }

    #[test]
    fn test_page_numbers() {
        let books: Vec<Book> = (0..25)
            .map(|i| Book::new(format!("T{i}"), "A", i, 2000))
            .collect();
        let view: Vec<&Book> = books.iter().collect();

        let mut pager = Pager::new(10);
        let page = pager.page(&view);
        assert_eq!((page.start, page.end, page.total), (0, 10, 25));
        assert_eq!((page.number, page.page_count), (1, 3));
        assert!(page.is_first());
        assert!(!page.is_last());

        pager.next(view.len());
        pager.next(view.len());
        let page = pager.page(&view);
        assert_eq!(page.books.len(), 5);
        assert_eq!(page.books[0].isbn(), 20);
        assert_eq!(page.number, 3);
        assert!(page.is_last());

        let page = pager.page(&[]);
        assert!(page.is_empty());
        assert_eq!((page.number, page.page_count), (0, 0));
    }

    #[test]
    fn test_huge_page_size_shows_everything() {
        let books: Vec<Book> = (0..3)
            .map(|i| Book::new(format!("T{i}"), "A", i, 2000))
            .collect();
        let view: Vec<&Book> = books.iter().collect();

        let mut pager = Pager::new(usize::MAX);
        let page = pager.page(&view);
        assert_eq!((page.start, page.end, page.total), (0, 3, 3));
        assert_eq!((page.number, page.page_count), (1, 1));
        assert_eq!(pager.next(view.len()), PageOutcome::AlreadyLastPage);
        assert_eq!(pager.previous(view.len()), PageOutcome::AlreadyFirstPage);
    }
}
