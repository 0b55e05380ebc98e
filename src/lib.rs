#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Modules
//!
//! - [`record`] — The [`Book`] record and its [`Availability`]
//! - [`isbn`] — ISBN normalization, parsing and hyphenated formatting
//! - [`line`] — Line codec: parse and serialize the catalog text format
//! - [`reader`] — Reading catalogs from text, [`load_catalog`]
//! - [`writer`] — Writing catalogs to text, [`save_catalog`]
//! - [`catalog`] — The [`Catalog`] store keyed by ISBN
//! - [`query`] — Search, filters and the ten sort orderings
//! - [`circulation`] — Borrow and return transitions
//! - [`pager`] — Page windows over a view
//! - [`browse`] — Paged listings that borrow or return the selected book
//! - [`recovery`] — Handling of malformed lines
//! - [`config`] — Loading and paging options
//! - [`error`] — Error types and result type
//!
//! # Quick Start
//!
//! ```
//! use shelfcat::{Book, BookFilter, Catalog, CatalogReader, SortKey, SortOrder};
//! use std::io::Cursor;
//!
//! let data = "Dune, by Herbert, Frank, 0441013597, 1965\n\
//!             Emma, by Austen, Jane, 1-23-456789-0, 1815\n";
//! let (mut catalog, report) = Catalog::read_from(CatalogReader::new(Cursor::new(data)))?;
//! assert_eq!(report.accepted, 2);
//!
//! catalog.borrow(441_013_597)?;
//! assert_eq!(catalog.counts().borrowed, 1);
//!
//! let oldest_first = catalog.view(&BookFilter::new(), SortKey::Year, SortOrder::Ascending);
//! assert_eq!(oldest_first[0].title(), "Emma");
//! # Ok::<(), shelfcat::CatalogError>(())
//! ```

pub mod browse;
pub mod catalog;
pub mod circulation;
pub mod config;
pub mod error;
pub mod isbn;
pub mod line;
pub mod pager;
pub mod query;
pub mod reader;
pub mod record;
pub mod recovery;
pub mod writer;

pub use browse::{BrowseOutcome, BrowseSession, SelectionAction};
pub use catalog::{Catalog, CatalogCounts};
pub use circulation::ReturnOutcome;
pub use config::{CatalogConfig, DEFAULT_MAX_RECORDS, DEFAULT_SAVE_FILE};
pub use error::{CatalogError, Result};
pub use line::{parse_line, parse_line_split, parse_line_with, to_line, Dialect};
pub use pager::{Page, PageCommand, PageOutcome, Pager, DEFAULT_PAGE_SIZE};
pub use query::{compare_books, sort_books, BookFilter, SortKey, SortOrder};
pub use reader::{load_catalog, open_catalog, CatalogReader, LoadReport};
pub use record::{Availability, Book};
pub use recovery::{RecoveryContext, RecoveryMode, SkippedLine, MAX_SKIPPED_DETAILS};
pub use writer::{save_catalog, CatalogWriter};
