//! Configuration options for loading and browsing a catalog.
//!
//! This module provides the [`CatalogConfig`] struct which controls how a
//! catalog file is read and how listings are paged. All fields have defaults,
//! so an empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::line::Dialect;
use crate::pager::DEFAULT_PAGE_SIZE;
use crate::recovery::RecoveryMode;

/// Maximum number of books read from one catalog file.
pub const DEFAULT_MAX_RECORDS: usize = 100_000;

/// File the catalog is saved to.
pub const DEFAULT_SAVE_FILE: &str = "library_catalog.txt";

/// Configuration for loading, paging and saving a catalog.
///
/// # Examples
///
/// ```
/// use shelfcat::{CatalogConfig, Dialect, RecoveryMode};
///
/// let config = CatalogConfig::new()
///     .with_page_size(20)
///     .with_dialect(Dialect::Anchored);
/// assert_eq!(config.recovery_mode, RecoveryMode::Lenient);
///
/// let config = CatalogConfig::from_json_str(r#"{"page_size": 5, "recovery_mode": "strict"}"#)?;
/// assert_eq!(config.page_size, 5);
/// assert_eq!(config.recovery_mode, RecoveryMode::Strict);
/// # Ok::<(), shelfcat::CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Books per page in browsing listings.
    pub page_size: usize,

    /// Stop reading a catalog file after this many books.
    pub max_records: usize,

    /// Line layout accepted when loading.
    pub dialect: Dialect,

    /// What to do with lines that cannot be parsed.
    pub recovery_mode: RecoveryMode,

    /// First line written when saving. May be empty.
    pub header: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_records: DEFAULT_MAX_RECORDS,
            dialect: Dialect::default(),
            recovery_mode: RecoveryMode::default(),
            header: String::new(),
        }
    }
}

impl CatalogConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidConfig`] if the JSON is malformed or a
    /// value fails [`CatalogConfig::validate`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CatalogError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidConfig`] if the page size or record cap
    /// is zero.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.max_records == 0 {
            return Err(CatalogError::InvalidConfig(
                "max_records must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the record cap.
    #[must_use]
    pub const fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    /// Sets the accepted line dialect.
    #[must_use]
    pub const fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Sets the recovery mode.
    #[must_use]
    pub const fn with_recovery_mode(mut self, mode: RecoveryMode) -> Self {
        self.recovery_mode = mode;
        self
    }

    /// Sets the header line written on save.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }
}
