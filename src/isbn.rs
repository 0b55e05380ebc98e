//! ISBN helpers.
//!
//! The catalog keys every book by its ISBN stored as a plain `u64`. The
//! hyphenated form only exists on the way in (stripped before parsing) and on
//! the way out (re-inserted for 10-digit values when a book is serialized).
//!
//! Because the key is an integer, leading zeros are lost on parse:
//! `0441013597` is stored as `441013597` and formats back as nine plain digits.

/// Remove hyphens from an identifier field.
///
/// # Examples
///
/// ```
/// use shelfcat::isbn;
///
/// assert_eq!(isbn::strip_hyphens("0-306-40615-2"), "0306406152");
/// ```
#[must_use]
pub fn strip_hyphens(isbn: &str) -> String {
    isbn.replace('-', "")
}

/// Remove hyphens and all whitespace, as used when matching a search query
/// against identifiers.
///
/// # Examples
///
/// ```
/// use shelfcat::isbn;
///
/// assert_eq!(isbn::normalize("978 0-306 40615-7"), "9780306406157");
/// ```
#[must_use]
pub fn normalize(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

/// Parse an identifier field into its integer key.
///
/// Hyphens are removed first; anything else that is not a decimal digit makes
/// the parse fail.
///
/// # Examples
///
/// ```
/// use shelfcat::isbn;
///
/// assert_eq!(isbn::parse("0-441-01359-7"), Some(441_013_597));
/// assert_eq!(isbn::parse("12ab"), None);
/// ```
#[must_use]
pub fn parse(field: &str) -> Option<u64> {
    let digits = strip_hyphens(field.trim());
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Format an identifier for display and persistence.
///
/// Ten-digit identifiers are rendered as `D-DD-DDDDDD-D`; every other length
/// is rendered as plain decimal digits.
///
/// # Examples
///
/// ```
/// use shelfcat::isbn;
///
/// assert_eq!(isbn::format(3_064_061_521), "3-06-406152-1");
/// assert_eq!(isbn::format(9_780_306_406_157), "9780306406157");
/// ```
#[must_use]
pub fn format(isbn: u64) -> String {
    let digits = isbn.to_string();
    if digits.len() == 10 {
        format!(
            "{}-{}-{}-{}",
            &digits[0..1],
            &digits[1..3],
            &digits[3..9],
            &digits[9..10]
        )
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ten_digits() {
        assert_eq!(format(1_234_567_890), "1-23-456789-0");
    }

    #[test]
    fn test_format_other_lengths_plain() {
        assert_eq!(format(441_013_597), "441013597");
        assert_eq!(format(0), "0");
        assert_eq!(format(9_780_306_406_157), "9780306406157");
    }

    #[test]
    fn test_parse_strips_hyphens() {
        assert_eq!(parse("1-23-456789-0"), Some(1_234_567_890));
        assert_eq!(parse(" 1234567890 "), Some(1_234_567_890));
    }

    #[test]
    fn test_parse_leading_zero_dropped() {
        assert_eq!(parse("0441013597"), Some(441_013_597));
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("---"), None);
        assert_eq!(parse("043942089X"), None);
        assert_eq!(parse("+123"), None);
        assert_eq!(parse("12 34"), None);
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert_eq!(parse("99999999999999999999999"), None);
    }

    #[test]
    fn test_format_then_parse() {
        let id = 3_064_061_521;
        assert_eq!(parse(&format(id)), Some(id));
    }

    #[test]
    fn test_normalize_strips_whitespace_and_hyphens() {
        assert_eq!(normalize(" 0-306\t40615 2 "), "0306406152");
        assert_eq!(normalize("Dune"), "Dune");
    }
}
