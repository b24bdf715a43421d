//! # Permitscan
//!
//! A Rust library for extracting structured work-permit records from
//! WhatsApp chat exports.
//!
//! ## Overview
//!
//! Field teams coordinate electrical work permits (PTW, LOA, SFT) over
//! WhatsApp group chats. Permitscan turns those free-text exports into
//! structured records:
//!
//! - **Tokenizer** — parses WhatsApp TXT exports (iOS and Android formats,
//!   five locale timestamp variants, multiline messages, Arabic content)
//! - **Extractor** — ordered heuristic rules pull permit type and number,
//!   station number, issued-to/issued-by parties, and optional remarks
//! - **Filter** — cutoff-date filtering over extracted records
//! - **Output** — semicolon-delimited CSV or JSON, spreadsheet-ready
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use permitscan::pipeline::{PipelineConfig, run_pipeline};
//! use permitscan::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let content = std::fs::read_to_string("whatsapp_chat.txt")?;
//!
//!     // Tokenize, extract, filter in one pass
//!     let records = run_pipeline(&content, &PipelineConfig::default())?;
//!
//!     // Write to CSV (semicolon-delimited)
//!     write_csv(&records, "permits.csv")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Stage-by-Stage Usage
//!
//! Each pipeline stage is usable on its own:
//!
//! ```rust
//! use permitscan::config::{ExtractPolicy, Keywords};
//! use permitscan::extract::Extractor;
//! use permitscan::tokenizer::WhatsAppTokenizer;
//!
//! let tokenizer = WhatsAppTokenizer::new();
//! let messages = tokenizer.parse_str(
//!     "[1/15/24, 10:30:45 AM] Alice: PTW 451 issued to John",
//! )?;
//!
//! let extractor = Extractor::with_config(&Keywords::default(), ExtractPolicy::new())?;
//! let record = extractor.extract(&messages[0]).unwrap();
//! assert_eq!(record.permit_type, "PTW");
//! assert_eq!(record.issued_to, "John");
//! # Ok::<(), permitscan::PermitScanError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`tokenizer`] — WhatsApp TXT export parser
//!   - [`WhatsAppTokenizer`](tokenizer::WhatsAppTokenizer)
//! - [`extract`] — Heuristic rule extraction
//!   - [`Extractor`](extract::Extractor), [`RuleSet`](extract::RuleSet), [`PermitRecord`](extract::PermitRecord)
//! - [`config`] — Keyword tables and policy toggles
//!   - [`Keywords`](config::Keywords), [`ExtractPolicy`](config::ExtractPolicy), [`TokenizerConfig`](config::TokenizerConfig)
//! - [`filter`] — Cutoff-date filtering
//!   - [`DateFilter`](filter::DateFilter), [`apply_cutoff`](filter::apply_cutoff)
//! - [`pipeline`] — End-to-end runner
//!   - [`run_pipeline`](pipeline::run_pipeline), [`PipelineConfig`](pipeline::PipelineConfig)
//! - [`sanitize`] — Invisible Unicode mark stripping
//! - [`format`] — Output format selection ([`OutputFormat`](format::OutputFormat))
//! - [`output`] — CSV/JSON writers (feature-gated)
//! - [`cli`] — CLI types (requires `cli` feature)
//! - [`error`] — Unified error types ([`PermitScanError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod format;
pub mod message;
pub mod output;
pub mod pipeline;
pub mod sanitize;
pub mod tokenizer;

// Re-export the main types at the crate root for convenience
pub use error::{PermitScanError, Result};
pub use extract::PermitRecord;
pub use message::RawMessage;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use permitscan::prelude::*;
/// ```
pub mod prelude {
    // Core record types
    pub use crate::{PermitRecord, RawMessage};

    // Error types
    pub use crate::error::{PermitScanError, Result};

    // Tokenizer
    pub use crate::tokenizer::WhatsAppTokenizer;

    // Extraction
    pub use crate::extract::{Extractor, RuleSet};

    // Configuration
    pub use crate::config::{ExtractPolicy, Keywords, TokenizerConfig};

    // Filtering
    pub use crate::filter::{DateFilter, apply_cutoff};

    // Pipeline
    pub use crate::pipeline::{PipelineConfig, ScanStats, run_pipeline, run_pipeline_with_stats};

    // Output format selection
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::output::{to_json, write_json};
}
