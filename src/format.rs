//! Output format types for the permitscan library.
//!
//! # Example
//!
//! ```rust
//! use permitscan::format::OutputFormat;
//! use std::str::FromStr;
//!
//! let format = OutputFormat::from_str("json").unwrap();
//! assert_eq!(format, OutputFormat::Json);
//! assert_eq!(format.extension(), "json");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PermitScanError;
use crate::extract::PermitRecord;

/// Output format for extracted permit records.
///
/// - [`Csv`](OutputFormat::Csv) - one column per record field, for
///   spreadsheet export
/// - [`Json`](OutputFormat::Json) - array of records, for APIs and further
///   processing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of records
    Json,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use permitscan::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("permits.json").unwrap();
    /// assert_eq!(format, OutputFormat::Json);
    /// ```
    pub fn from_path(path: &str) -> Result<Self, PermitScanError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(PermitScanError::InvalidFormat {
                format: "output",
                message: format!(
                    "Unknown file extension: '.{}'. Expected one of: csv, json",
                    ext
                ),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes records to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[PermitRecord],
    path: &str,
    format: OutputFormat,
) -> Result<(), PermitScanError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::write_csv(records, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::write_json(records, path),
        #[allow(unreachable_patterns)]
        _ => Err(PermitScanError::InvalidFormat {
            format: "output",
            message: format!(
                "Output format {:?} requires the '{}' feature to be enabled",
                format,
                match format {
                    OutputFormat::Csv => "csv-output",
                    OutputFormat::Json => "json-output",
                }
            ),
        }),
    }
}

/// Converts records to a string in the specified format.
///
/// Useful when the output is sent onwards instead of written to a file.
#[allow(unused_variables)]
pub fn to_format_string(
    records: &[PermitRecord],
    format: OutputFormat,
) -> Result<String, PermitScanError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::output::to_csv(records),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::output::to_json(records),
        #[allow(unreachable_patterns)]
        _ => Err(PermitScanError::InvalidFormat {
            format: "output",
            message: format!(
                "Output format {:?} requires the '{}' feature to be enabled",
                format,
                match format {
                    OutputFormat::Csv => "csv-output",
                    OutputFormat::Json => "json-output",
                }
            ),
        }),
    }
}
