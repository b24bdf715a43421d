//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! # Using OutputFormat in Libraries
//!
//! The format type is designed to be usable outside of CLI context:
//!
//! ```rust
//! use permitscan::cli::OutputFormat;
//!
//! let format = OutputFormat::Csv;
//! println!("Format: {}", format); // "CSV"
//! ```

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Extract work-permit records (PTW/LOA/SFT) from WhatsApp chat
/// exports into spreadsheet-ready formats.
#[derive(Parser, Debug, Clone)]
#[command(name = "permitscan")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    permitscan whatsapp_chat.txt
    permitscan chat.txt -o permits.csv
    permitscan chat.txt --after 2024-01-01
    permitscan chat.txt --format json --remarks
    permitscan chat.txt --default-sender")]
pub struct Args {
    /// Path to WhatsApp TXT export
    pub input: String,

    /// Path to output file
    #[arg(short, long, default_value = "permits.csv")]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Keep only records dated on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Extract remark/note references into the remark column
    #[arg(short, long)]
    pub remarks: bool,

    /// Attribute issuance to the sender when neither issued-to nor
    /// issued-by appears in the message
    #[arg(long)]
    pub default_sender: bool,

    /// Keep system messages (encryption notices, joins, leaves)
    #[arg(long)]
    pub keep_system: bool,
}

/// Output format options.
///
/// - [`Csv`](OutputFormat::Csv) - Semicolon-delimited, opens directly in
///   spreadsheet tools
/// - [`Json`](OutputFormat::Json) - Structured array, good for APIs
///
/// # Example
///
/// ```rust
/// use permitscan::cli::OutputFormat;
///
/// let format = OutputFormat::Json;
/// println!("Extension: {}", format.extension()); // "json"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
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

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "text/csv",
            OutputFormat::Json => "application/json",
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

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
        }
    }
}
