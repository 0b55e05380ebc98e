//! Recovery strategies for malformed catalog lines.
//!
//! Catalog files are hand-edited and collected from donations, so a load is
//! expected to meet lines it cannot read. In the default
//! [`RecoveryMode::Lenient`] those lines are logged, counted and skipped; in
//! [`RecoveryMode::Strict`] the first one aborts the load.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CatalogError, Result};

/// Most skipped lines kept with their reasons. Later skips are only counted.
pub const MAX_SKIPPED_DETAILS: usize = 1_000;

/// Strategy for handling malformed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryMode {
    /// Return an error for the first malformed line
    Strict,
    /// Skip malformed lines and keep loading (default)
    #[default]
    Lenient,
}

/// A line that was skipped during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source
    pub line_number: usize,
    /// Why the line was rejected
    pub reason: String,
}

/// Recovery context for handling malformed lines
#[derive(Debug, Default)]
pub struct RecoveryContext {
    /// Current recovery mode
    pub mode: RecoveryMode,
    /// The first [`MAX_SKIPPED_DETAILS`] lines skipped, with reasons
    pub skipped: Vec<SkippedLine>,
    skipped_total: usize,
}

impl RecoveryContext {
    /// Create a new recovery context with the given mode
    #[must_use]
    pub fn new(mode: RecoveryMode) -> Self {
        RecoveryContext {
            mode,
            skipped: Vec::new(),
            skipped_total: 0,
        }
    }

    /// Handle a line the codec rejected.
    ///
    /// # Errors
    ///
    /// In strict mode, returns [`CatalogError::ParseSkip`] naming the line.
    /// Otherwise the line is recorded and `Ok(())` is returned.
    pub fn recover(&mut self, line_number: usize, reason: String) -> Result<()> {
        match self.mode {
            RecoveryMode::Strict => Err(CatalogError::ParseSkip(format!(
                "line {line_number}: {reason}"
            ))),
            RecoveryMode::Lenient => {
                debug!(line_number, %reason, "skipping malformed line");
                self.skipped_total += 1;
                if self.skipped.len() < MAX_SKIPPED_DETAILS {
                    self.skipped.push(SkippedLine {
                        line_number,
                        reason,
                    });
                }
                Ok(())
            },
        }
    }

    /// Number of lines skipped so far, including those past the detail limit
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped_total
    }
}
