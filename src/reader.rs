//! Reading catalogs from text.
//!
//! This module provides [`CatalogReader`] for reading books one line at a time
//! from any source implementing [`std::io::BufRead`], and the file-level
//! [`load_catalog`] / [`open_catalog`] entry points.
//!
//! Blank lines are ignored. Lines the codec rejects are handled by the
//! reader's [`RecoveryMode`]: skipped and counted by default. Reading stops
//! at the first readable book past the record cap.
//!
//! # Examples
//!
//! Reading from a buffer:
//!
//! ```
//! use shelfcat::CatalogReader;
//! use std::io::Cursor;
//!
//! let data = "\nDune, by Herbert, Frank, 0441013597, 1965\nnot a book\n";
//! let mut reader = CatalogReader::new(Cursor::new(data));
//!
//! let book = reader.read_book()?.expect("one book");
//! assert_eq!(book.title(), "Dune");
//! assert!(reader.read_book()?.is_none());
//! assert_eq!(reader.skipped_count(), 1);
//! # Ok::<(), shelfcat::CatalogError>(())
//! ```
//!
//! Loading a file, starting empty when it does not exist:
//!
//! ```no_run
//! use shelfcat::{load_catalog, CatalogConfig};
//!
//! let (catalog, report) = load_catalog("book_donation.txt", &CatalogConfig::default())?;
//! println!("{} books loaded, {} lines skipped", report.accepted, report.skipped);
//! # Ok::<(), shelfcat::CatalogError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::{CatalogConfig, DEFAULT_MAX_RECORDS};
use crate::error::{CatalogError, Result};
use crate::line::{parse_line_with, Dialect};
use crate::record::Book;
use crate::recovery::{RecoveryContext, RecoveryMode, SkippedLine};

/// Reader for the catalog line format.
///
/// `CatalogReader` reads one book at a time from any source implementing
/// [`std::io::BufRead`].
#[derive(Debug)]
pub struct CatalogReader<R: BufRead> {
    reader: R,
    dialect: Dialect,
    max_records: usize,
    recovery: RecoveryContext,
    line_number: usize,
    records_read: usize,
    truncated: bool,
}

impl<R: BufRead> CatalogReader<R> {
    /// Create a new reader with the default dialect, recovery mode and cap.
    pub fn new(reader: R) -> Self {
        CatalogReader {
            reader,
            dialect: Dialect::default(),
            max_records: DEFAULT_MAX_RECORDS,
            recovery: RecoveryContext::default(),
            line_number: 0,
            records_read: 0,
            truncated: false,
        }
    }

    /// Create a reader set up from a configuration.
    pub fn with_config(reader: R, config: &CatalogConfig) -> Self {
        Self::new(reader)
            .with_dialect(config.dialect)
            .with_recovery_mode(config.recovery_mode)
            .with_max_records(config.max_records)
    }

    /// Set the accepted line dialect.
    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Set the recovery mode for handling malformed lines.
    ///
    /// - `Lenient`: skip and count (default)
    /// - `Strict`: return the first malformed line as an error
    #[must_use]
    pub fn with_recovery_mode(mut self, mode: RecoveryMode) -> Self {
        self.recovery = RecoveryContext::new(mode);
        self
    }

    /// Stop after this many books.
    #[must_use]
    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    /// Read the next book.
    ///
    /// Returns `Ok(Some(book))` for the next parsable line, `Ok(None)` at end
    /// of input or once the record cap is reached.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An I/O error occurs
    /// - A line is malformed and the reader is in strict mode
    pub fn read_book(&mut self) -> Result<Option<Book>> {
        let mut buffer = Vec::new();
        loop {
            buffer.clear();
            if self.reader.read_until(b'\n', &mut buffer)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let parsed = match std::str::from_utf8(&buffer) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => parse_line_with(line, self.dialect),
                Err(_) => Err(CatalogError::ParseSkip("line is not valid UTF-8".to_string())),
            };

            match parsed {
                Ok(_) if self.records_read >= self.max_records => {
                    self.truncated = true;
                    warn!(
                        max_records = self.max_records,
                        line_number = self.line_number,
                        "record cap reached, remaining lines not read"
                    );
                    return Ok(None);
                },
                Ok(book) => {
                    self.records_read += 1;
                    return Ok(Some(book));
                },
                Err(CatalogError::ParseSkip(reason)) => {
                    self.recovery.recover(self.line_number, reason)?;
                },
                Err(e) => return Err(e),
            }
        }
    }

    /// Read every remaining book.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`CatalogReader::read_book`].
    pub fn read_all(&mut self) -> Result<Vec<Book>> {
        let mut books = Vec::new();
        while let Some(book) = self.read_book()? {
            books.push(book);
        }
        Ok(books)
    }

    /// Number of books read so far
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Number of lines skipped so far
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.recovery.skipped_count()
    }

    /// Lines skipped so far, with reasons. Holds at most
    /// [`MAX_SKIPPED_DETAILS`](crate::recovery::MAX_SKIPPED_DETAILS) entries.
    #[must_use]
    pub fn skipped_lines(&self) -> &[SkippedLine] {
        &self.recovery.skipped
    }

    /// Returns `true` if a readable book was left unread because of the record cap.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

/// Summary of a catalog load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Books added to the catalog
    pub accepted: usize,
    /// Lines that could not be parsed
    pub skipped: usize,
    /// Books dropped because their ISBN was already loaded
    pub duplicates: usize,
    /// A readable book was dropped at the record cap
    pub truncated: bool,
    /// The load file did not exist; the catalog starts empty
    pub file_missing: bool,
    /// The first [`MAX_SKIPPED_DETAILS`](crate::recovery::MAX_SKIPPED_DETAILS) skipped lines, with reasons
    pub skipped_lines: Vec<SkippedLine>,
}

impl Catalog {
    /// Build a catalog from a reader.
    ///
    /// A book whose ISBN was already loaded is dropped and counted as a
    /// duplicate; the first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`CatalogReader::read_book`].
    pub fn read_from<R: BufRead>(mut reader: CatalogReader<R>) -> Result<(Catalog, LoadReport)> {
        let mut catalog = Catalog::new();
        let mut report = LoadReport::default();

        while let Some(book) = reader.read_book()? {
            let isbn = book.isbn();
            match catalog.insert(book) {
                Ok(()) => report.accepted += 1,
                Err(CatalogError::AlreadyExists(_)) => {
                    debug!(isbn, "duplicate ISBN in catalog file, keeping first");
                    report.duplicates += 1;
                },
                Err(e) => return Err(e),
            }
        }

        report.skipped = reader.skipped_count();
        report.truncated = reader.is_truncated();
        report.skipped_lines = reader.recovery.skipped;
        Ok((catalog, report))
    }
}

/// Load a catalog file.
///
/// # Errors
///
/// - [`CatalogError::LoadFileMissing`] if the file does not exist
/// - [`CatalogError::IoError`] for any other I/O failure
/// - [`CatalogError::ParseSkip`] for a malformed line in strict mode
pub fn open_catalog(path: impl AsRef<Path>, config: &CatalogConfig) -> Result<(Catalog, LoadReport)> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::LoadFileMissing(path.to_path_buf()),
        _ => CatalogError::IoError(e),
    })?;

    let reader = CatalogReader::with_config(BufReader::new(file), config);
    let (catalog, report) = Catalog::read_from(reader)?;
    info!(
        path = %path.display(),
        accepted = report.accepted,
        skipped = report.skipped,
        duplicates = report.duplicates,
        truncated = report.truncated,
        "catalog loaded"
    );
    Ok((catalog, report))
}

/// Load a catalog file, starting with an empty catalog if it does not exist.
///
/// # Errors
///
/// As [`open_catalog`], except that a missing file is not an error.
pub fn load_catalog(path: impl AsRef<Path>, config: &CatalogConfig) -> Result<(Catalog, LoadReport)> {
    match open_catalog(path, config) {
        Err(CatalogError::LoadFileMissing(path)) => {
            warn!(path = %path.display(), "catalog file not found, starting with an empty catalog");
            let report = LoadReport {
                file_missing: true,
                ..LoadReport::default()
            };
            Ok((Catalog::new(), report))
        },
        other => other,
    }
}
