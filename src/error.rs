//! Unified error types for permitscan.
//!
//! This module provides a single [`PermitScanError`] enum that covers all
//! error cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Per-record problems never abort a batch**: a message that fails permit
//!   classification or carries a broken timestamp is simply skipped. Errors
//!   in this module are reserved for batch-level conditions (unreadable
//!   input, unrecognized export format, empty message set, invalid cutoff).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for permitscan operations.
///
/// # Example
///
/// ```rust
/// use permitscan::error::Result;
/// use permitscan::PermitRecord;
///
/// fn my_function() -> Result<Vec<PermitRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, PermitScanError>;

/// The error type for all permitscan operations.
///
/// Each variant contains context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PermitScanError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse the input chat export.
    #[error("Failed to parse {format} export{}: {message}", .path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// The format being parsed (e.g., "WhatsApp TXT")
        format: &'static str,
        /// Description of the parse problem
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The file content doesn't match the expected structure.
    ///
    /// This occurs when a WhatsApp TXT export doesn't match any known
    /// date format.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid cutoff date supplied to the date filter.
    ///
    /// Cutoff dates expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A keyword table could not be compiled into a matching pattern.
    ///
    /// This occurs when a configured keyword list is empty or produces an
    /// invalid alternation.
    #[error("Invalid keyword pattern for '{table}': {message}")]
    Pattern {
        /// The keyword table being compiled ("permit", "station", "remark")
        table: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The input yielded no usable messages.
    ///
    /// Batch-level condition: an empty message set is a rejection, never a
    /// silent empty success.
    #[error("No messages could be parsed from the input")]
    EmptyInput,

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl PermitScanError {
    /// Creates a parse error for WhatsApp TXT format.
    pub fn whatsapp_parse(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        PermitScanError::Parse {
            format: "WhatsApp TXT",
            message: message.into(),
            path,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        PermitScanError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        PermitScanError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a keyword pattern error.
    pub fn pattern(table: &'static str, message: impl Into<String>) -> Self {
        PermitScanError::Pattern {
            table,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, PermitScanError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, PermitScanError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, PermitScanError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, PermitScanError::InvalidDate { .. })
    }

    /// Returns `true` if this is the empty-input rejection.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, PermitScanError::EmptyInput)
    }
}

// ============================================================================
// Tests
// ============================================================================
