//! Line codec for the catalog text format.
//!
//! Each book occupies one line:
//!
//! ```text
//! Title, by Author1, Author2, ..., Identifier, Year
//! ```
//!
//! The author block may itself contain commas, so a generic comma split is
//! ambiguous. Two dialects are understood:
//!
//! - [`Dialect::Anchored`] works from the right: the last comma separates the
//!   year, the one before it the identifier, and the first `", by"` separates
//!   the title from the author block.
//! - [`Dialect::Split`] splits on `", "`, takes the last two tokens as year and
//!   identifier (both strictly validated) and rejoins the middle as the author.
//!
//! [`Dialect::Auto`] tries the anchored form first and falls back to the split
//! form, which also takes extra spaces before `by`. A line that neither accepts
//! yields [`CatalogError::ParseSkip`]; the
//! [`reader`](crate::reader) counts those and moves on.
//!
//! # Examples
//!
//! ```
//! use shelfcat::line::{parse_line, to_line};
//!
//! let book = parse_line("Dune, by Herbert, Frank, 0441013597, 1965")?;
//! assert_eq!(book.title(), "Dune");
//! assert_eq!(book.author(), "Herbert, Frank");
//! assert_eq!(book.isbn(), 441_013_597);
//! assert_eq!(book.year(), 1965);
//!
//! assert_eq!(to_line(&book), "Dune, by Herbert, Frank, 441013597, 1965");
//! # Ok::<(), shelfcat::CatalogError>(())
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::isbn;
use crate::record::Book;

const BY_MARKER: &str = ", by";
const SPLIT_DELIMITER: &str = ", ";

lazy_static! {
    static ref YEAR_PATTERN: Regex = Regex::new(r"^[0-9]{4}$").expect("valid year pattern");
    static ref DIGITS_PATTERN: Regex = Regex::new(r"^[0-9]+$").expect("valid digits pattern");
}

/// Which line layout to accept when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Rightmost-anchored parsing of the canonical format
    Anchored,
    /// Split on `", "` with strict year and identifier patterns
    Split,
    /// Anchored first, split as the fallback (default)
    #[default]
    Auto,
}

fn skip(reason: impl Into<String>) -> CatalogError {
    CatalogError::ParseSkip(reason.into())
}

/// Trim the line and drop a leading `[...]` index tag.
fn strip_index_tag(line: &str) -> Result<&str> {
    let line = line.trim();
    if line.is_empty() {
        return Err(skip("blank line"));
    }

    if line.starts_with('[') {
        let end = line
            .find(']')
            .ok_or_else(|| skip("unterminated '[' index tag"))?;
        let rest = line[end + 1..].trim();
        if rest.is_empty() {
            return Err(skip("nothing after index tag"));
        }
        return Ok(rest);
    }

    Ok(line)
}

/// Parse a line in the given dialect.
///
/// # Errors
///
/// Returns [`CatalogError::ParseSkip`] with the reason if the line cannot be
/// read as a book.
pub fn parse_line_with(line: &str, dialect: Dialect) -> Result<Book> {
    match dialect {
        Dialect::Anchored => parse_line(line),
        Dialect::Split => parse_line_split(line),
        Dialect::Auto => parse_line(line).or_else(|anchored| {
            parse_line_split(line).map_err(|_| anchored)
        }),
    }
}

/// Parse a line of the canonical format, anchoring on the rightmost fields.
///
/// A single trailing comma at the end of the line is ignored. The author block
/// is kept verbatim, internal commas included. The book is available.
///
/// # Errors
///
/// Returns [`CatalogError::ParseSkip`] if the line is blank, has an
/// unterminated index tag, lacks the year, identifier or `", by"` marker, or
/// if the year or identifier are not integers.
pub fn parse_line(line: &str) -> Result<Book> {
    let line = strip_index_tag(line)?;

    let body = line.strip_suffix(',').unwrap_or(line);
    let (front, year_field) = body
        .rsplit_once(',')
        .ok_or_else(|| skip("no comma before the year field"))?;

    let (title_and_author, isbn_field) = front
        .trim()
        .rsplit_once(',')
        .ok_or_else(|| skip("no comma before the ISBN field"))?;

    let (title, author) = title_and_author
        .trim()
        .split_once(BY_MARKER)
        .ok_or_else(|| skip("missing ', by' author marker"))?;

    let year_field = year_field.trim();
    let year: i32 = year_field
        .parse()
        .map_err(|_| skip(format!("invalid year '{year_field}'")))?;

    let isbn = isbn::parse(isbn_field)
        .ok_or_else(|| skip(format!("invalid ISBN '{}'", isbn_field.trim())))?;

    Ok(Book::new(title.trim(), author.trim(), isbn, year))
}

/// Parse a line of the simpler split dialect.
///
/// The line is split on `", "`; the last token must be a four-digit year, the
/// one before it all digits once hyphens are removed. The first token is the
/// title and the tokens between are rejoined as the author, which must start
/// with `by `.
///
/// # Errors
///
/// Returns [`CatalogError::ParseSkip`] if any of those conditions fail.
pub fn parse_line_split(line: &str) -> Result<Book> {
    let line = strip_index_tag(line)?;

    let tokens: Vec<&str> = line.split(SPLIT_DELIMITER).collect();
    let count = tokens.len();
    if count < 4 {
        return Err(skip(format!(
            "expected at least 4 ', '-separated fields, found {count}"
        )));
    }

    let year_field = tokens[count - 1].trim();
    if !YEAR_PATTERN.is_match(year_field) {
        return Err(skip(format!("invalid year '{year_field}'")));
    }

    let isbn_field = isbn::strip_hyphens(tokens[count - 2].trim());
    if !DIGITS_PATTERN.is_match(&isbn_field) {
        return Err(skip(format!("invalid ISBN '{isbn_field}'")));
    }

    let author_block = tokens[1..count - 2].join(SPLIT_DELIMITER);
    let author = author_block
        .trim_start()
        .strip_prefix("by ")
        .ok_or_else(|| skip("author block does not start with 'by '"))?;

    let year: i32 = year_field
        .parse()
        .map_err(|_| skip(format!("invalid year '{year_field}'")))?;
    let isbn: u64 = isbn_field
        .parse()
        .map_err(|_| skip(format!("ISBN '{isbn_field}' out of range")))?;

    Ok(Book::new(tokens[0].trim(), author.trim(), isbn, year))
}

/// Serialize a book to its canonical line (without a line terminator).
///
/// Availability is not part of the line format.
#[must_use]
pub fn to_line(book: &Book) -> String {
    format!(
        "{}, by {}, {}, {}",
        book.title(),
        book.author(),
        book.formatted_isbn(),
        book.year()
    )
}
