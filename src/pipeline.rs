//! Full processing pipeline: tokenize, extract, filter.
//!
//! The pipeline wires the tokenizer, the extractor and the date filter
//! together for the common whole-export use case. Each stage is also
//! usable on its own.
//!
//! # Example
//!
//! ```
//! use permitscan::pipeline::{PipelineConfig, run_pipeline};
//!
//! let export = "[1/15/24, 10:30:45 AM] Alice: PTW 451 issued to John";
//! let records = run_pipeline(export, &PipelineConfig::default())?;
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].permit_number, "451");
//! # Ok::<(), permitscan::PermitScanError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ExtractPolicy, Keywords, TokenizerConfig};
use crate::error::{PermitScanError, Result};
use crate::extract::{Extractor, PermitRecord};
use crate::filter::{DateFilter, apply_cutoff};
use crate::tokenizer::WhatsAppTokenizer;

/// Configuration for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Tokenizer settings.
    pub tokenizer: TokenizerConfig,
    /// Keyword tables for the extraction rules.
    pub keywords: Keywords,
    /// Extraction policy toggles.
    pub policy: ExtractPolicy,
    /// Optional cutoff-date filter.
    pub date_filter: DateFilter,
}

impl PipelineConfig {
    /// Creates a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tokenizer configuration.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: TokenizerConfig) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Sets the keyword tables.
    #[must_use]
    pub fn with_keywords(mut self, keywords: Keywords) -> Self {
        self.keywords = keywords;
        self
    }

    /// Sets the extraction policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ExtractPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the date filter.
    #[must_use]
    pub fn with_date_filter(mut self, filter: DateFilter) -> Self {
        self.date_filter = filter;
        self
    }
}

/// Counters describing one pipeline run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScanStats {
    /// Messages the tokenizer produced.
    pub messages: usize,
    /// Records that survived classification and filtering.
    pub records: usize,
}

impl ScanStats {
    /// Share of messages that yielded a record, in percent.
    pub fn hit_rate(&self) -> f64 {
        if self.messages == 0 {
            return 0.0;
        }
        (self.records as f64 / self.messages as f64) * 100.0
    }
}

/// Runs the whole pipeline over raw WhatsApp export content.
///
/// Tokenizes the content, extracts a record per permit-relevant message
/// (non-matching messages are silently skipped) and applies the cutoff
/// filter. Record order follows message order.
///
/// # Errors
///
/// - [`PermitScanError::InvalidFormat`] if the export format is not
///   recognized.
/// - [`PermitScanError::EmptyInput`] if the tokenizer yields no messages;
///   an empty batch is a rejection, never a silent empty success.
/// - [`PermitScanError::Pattern`] if the keyword tables cannot be compiled.
pub fn run_pipeline(content: &str, config: &PipelineConfig) -> Result<Vec<PermitRecord>> {
    Ok(run_pipeline_with_stats(content, config)?.0)
}

/// Like [`run_pipeline`], additionally returning the run counters.
pub fn run_pipeline_with_stats(
    content: &str,
    config: &PipelineConfig,
) -> Result<(Vec<PermitRecord>, ScanStats)> {
    let tokenizer = WhatsAppTokenizer::with_config(config.tokenizer.clone());
    let messages = tokenizer.parse_str(content)?;

    if messages.is_empty() {
        return Err(PermitScanError::EmptyInput);
    }

    let extractor = Extractor::with_config(&config.keywords, config.policy)?;
    let extracted: Vec<PermitRecord> = messages
        .iter()
        .filter_map(|msg| extractor.extract(msg))
        .collect();

    let records = apply_cutoff(extracted, &config.date_filter);
    let stats = ScanStats {
        messages: messages.len(),
        records: records.len(),
    };

    Ok((records, stats))
}
