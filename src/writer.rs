//! Writing catalogs to text.
//!
//! This module provides [`CatalogWriter`] for serializing books to the
//! canonical line format on any destination implementing [`std::io::Write`],
//! and [`save_catalog`], which writes a whole catalog to a file: a header line
//! followed by every book sorted by title.
//!
//! # Examples
//!
//! Writing to a buffer:
//!
//! ```
//! use shelfcat::{Book, CatalogWriter};
//!
//! let mut buffer = Vec::new();
//! {
//!     let mut writer = CatalogWriter::new(&mut buffer);
//!     writer.write_header("")?;
//!     writer.write_book(&Book::new("Dune", "Herbert, Frank", 1_234_567_890, 1965))?;
//!     writer.finish()?;
//! }
//! assert_eq!(
//!     String::from_utf8(buffer).unwrap(),
//!     "\nDune, by Herbert, Frank, 1-23-456789-0, 1965\n"
//! );
//! # Ok::<(), shelfcat::CatalogError>(())
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::line::to_line;
use crate::query::{BookFilter, SortKey, SortOrder};
use crate::record::Book;

/// Writer for the catalog line format.
#[derive(Debug)]
pub struct CatalogWriter<W: Write> {
    writer: W,
    records_written: usize,
    finished: bool,
}

impl<W: Write> CatalogWriter<W> {
    /// Create a new catalog writer.
    pub fn new(writer: W) -> Self {
        CatalogWriter {
            writer,
            records_written: 0,
            finished: false,
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.finished {
            return Err(CatalogError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "cannot write to a finished writer",
            )));
        }
        Ok(())
    }

    /// Write the header line. An empty header still produces a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer is finished or an I/O error occurs.
    pub fn write_header(&mut self, header: &str) -> Result<()> {
        self.ensure_open()?;
        writeln!(self.writer, "{header}")?;
        Ok(())
    }

    /// Write one book as a line.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer is finished or an I/O error occurs.
    pub fn write_book(&mut self, book: &Book) -> Result<()> {
        self.ensure_open()?;
        writeln!(self.writer, "{}", to_line(book))?;
        self.records_written += 1;
        Ok(())
    }

    /// Flush the writer and mark it as finished.
    ///
    /// After calling `finish`, nothing more can be written.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the underlying writer fails.
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.finished = true;
        Ok(())
    }

    /// Returns the number of books written so far.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }
}

impl Catalog {
    /// Write the header and every book, sorted by title, to a writer.
    ///
    /// Returns the number of books written.
    ///
    /// # Errors
    ///
    /// Returns an error if any write fails.
    pub fn write_to<W: Write>(&self, writer: &mut CatalogWriter<W>, header: &str) -> Result<usize> {
        writer.write_header(header)?;
        for book in self.view(&BookFilter::new(), SortKey::Title, SortOrder::Ascending) {
            writer.write_book(book)?;
        }
        writer.finish()?;
        Ok(writer.records_written())
    }
}

/// Save a catalog to a file, replacing its contents.
///
/// The file holds `header` on its first line, then every book sorted by title.
/// The catalog itself is not modified.
///
/// # Errors
///
/// Returns [`CatalogError::SaveFailed`] if the file cannot be created or
/// written.
pub fn save_catalog(catalog: &Catalog, path: impl AsRef<Path>, header: &str) -> Result<usize> {
    let path = path.as_ref();
    let save_failed = |source| CatalogError::SaveFailed {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(save_failed)?;
    let mut writer = CatalogWriter::new(BufWriter::new(file));
    let written = catalog.write_to(&mut writer, header).map_err(|e| match e {
        CatalogError::IoError(source) => save_failed(source),
        other => other,
    })?;

    info!(path = %path.display(), books = written, "catalog saved");
    Ok(written)
}
