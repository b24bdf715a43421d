//! Configuration types for the tokenizer and the extraction rules.
//!
//! The keyword tables and the extraction policy are explicit configuration
//! data rather than constants baked into the matcher, so deployments can
//! localize the keyword lists or pick a different variant of the
//! issuance-attribution rules without touching the extractor.
//!
//! # Example
//!
//! ```rust
//! use permitscan::config::{ExtractPolicy, Keywords};
//!
//! let keywords = Keywords::default();
//! assert!(keywords.permit.iter().any(|k| k == "PTW"));
//!
//! let policy = ExtractPolicy::new().with_remarks(true);
//! assert!(policy.include_remark);
//! ```

use serde::{Deserialize, Serialize};

/// Keyword tables driving the pattern rules.
///
/// Each list is turned into a case-insensitive alternation by
/// [`RuleSet::compile`](crate::extract::RuleSet::compile). The defaults match
/// the vocabulary observed in field chat logs: English permit acronyms,
/// Latin and Arabic station markers, English remark labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keywords {
    /// Permit classification keywords. A message qualifies only if one of
    /// these matches as a whole word.
    pub permit: Vec<String>,

    /// Station markers, matched independently of the permit keyword.
    pub station: Vec<String>,

    /// Remark/note labels, consulted only when the policy enables remarks.
    pub remark: Vec<String>,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            permit: vec!["PTW".into(), "LOA".into(), "SFT".into()],
            station: vec![
                "SS".into(),
                "S/S".into(),
                // "the station" / "at the station" as written in exports
                "المحطة".into(),
                "المحطه".into(),
                "بالمحطة".into(),
                "بالمحطه".into(),
            ],
            remark: vec![
                "remark".into(),
                "remarks".into(),
                "note".into(),
                "notes".into(),
                "edit".into(),
            ],
        }
    }
}

impl Keywords {
    /// Creates the default keyword tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the permit keyword list.
    #[must_use]
    pub fn with_permit(mut self, keywords: Vec<String>) -> Self {
        self.permit = keywords;
        self
    }

    /// Replaces the station marker list.
    #[must_use]
    pub fn with_station(mut self, markers: Vec<String>) -> Self {
        self.station = markers;
        self
    }

    /// Replaces the remark label list.
    #[must_use]
    pub fn with_remark(mut self, labels: Vec<String>) -> Self {
        self.remark = labels;
        self
    }
}

/// Versioned policy toggles for the extraction variants.
///
/// The observed field variants differ in whether they extract a remark digit
/// run and in how they default the issuance fields when both labels are
/// absent. Both behaviors are toggles here; the canonical defaults are
/// `false` for both.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExtractPolicy {
    /// Extract a remark digit run from remark/note labels (default: false).
    pub include_remark: bool,

    /// When neither "issued to" nor "issued by" is present, assign the
    /// message sender to `issued_to` (default: false). The per-field
    /// default-to-sender rule for a single missing side is always active
    /// and is not governed by this flag.
    pub default_both_missing_to_sender: bool,
}

impl ExtractPolicy {
    /// Creates the canonical policy (remarks off, no both-missing default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables remark extraction.
    #[must_use]
    pub fn with_remarks(mut self, enabled: bool) -> Self {
        self.include_remark = enabled;
        self
    }

    /// Enables or disables the both-missing default-to-sender rule.
    #[must_use]
    pub fn with_default_both_missing_to_sender(mut self, enabled: bool) -> Self {
        self.default_both_missing_to_sender = enabled;
        self
    }
}

/// Configuration for WhatsApp export tokenization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Skip system messages (encryption notice, join/leave, etc.)
    /// (default: true)
    pub skip_system_messages: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            skip_system_messages: true,
        }
    }
}

impl TokenizerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether to skip system messages.
    #[must_use]
    pub fn with_skip_system_messages(mut self, skip: bool) -> Self {
        self.skip_system_messages = skip;
        self
    }
}
