//! Permit field extraction — the core of the crate.
//!
//! This module contains:
//! - [`rules`] - The compiled table of independent pattern rules
//! - [`record`] - The [`PermitRecord`] output type
//! - [`Extractor`] - Classification and field assembly per message
//!
//! # Extraction steps
//!
//! For each tokenized message the extractor:
//! 1. Sanitizes the body (directional marks, narrow no-break spaces).
//! 2. Classifies it against the permit keyword rule; no match means no
//!    record (a normal filtering outcome, not an error).
//! 3. Extracts the station number, the issuance attribution and, when the
//!    policy enables it, the remark digit run.
//! 4. Splits the timestamp into UTC date and time strings.
//!
//! No step can fail for any input string: absence of a match is always
//! representable as an empty field.
//!
//! # Example
//!
//! ```
//! use permitscan::RawMessage;
//! use permitscan::extract::Extractor;
//!
//! let extractor = Extractor::new()?;
//! let msg = RawMessage::new("Alice", "PTW 451, issued to John, issued by Mary");
//! let record = extractor.extract(&msg).unwrap();
//! assert_eq!(record.permit_type, "PTW");
//! assert_eq!(record.permit_number, "451");
//! assert_eq!(record.issued_to, "John");
//! assert_eq!(record.issued_by, "Mary");
//! # Ok::<(), permitscan::PermitScanError>(())
//! ```

pub mod record;
pub mod rules;

pub use record::PermitRecord;
pub use rules::RuleSet;

use crate::RawMessage;
use crate::config::{ExtractPolicy, Keywords};
use crate::error::PermitScanError;
use crate::sanitize::sanitize;

/// Classifies messages and assembles [`PermitRecord`]s.
///
/// Holds the compiled [`RuleSet`] and the [`ExtractPolicy`]. Extraction is
/// stateless across messages: the result for one message never depends on
/// any other.
#[derive(Debug)]
pub struct Extractor {
    rules: RuleSet,
    policy: ExtractPolicy,
}

impl Extractor {
    /// Creates an extractor with default keywords and the canonical policy.
    pub fn new() -> Result<Self, PermitScanError> {
        Self::with_config(&Keywords::default(), ExtractPolicy::default())
    }

    /// Creates an extractor with custom keyword tables and policy.
    ///
    /// # Errors
    ///
    /// Returns [`PermitScanError::Pattern`] if a keyword table cannot be
    /// compiled.
    pub fn with_config(
        keywords: &Keywords,
        policy: ExtractPolicy,
    ) -> Result<Self, PermitScanError> {
        Ok(Self {
            rules: RuleSet::compile(keywords)?,
            policy,
        })
    }

    /// Returns the active extraction policy.
    pub fn policy(&self) -> ExtractPolicy {
        self.policy
    }

    /// Extracts a structured record from one message.
    ///
    /// Returns `None` when the sanitized body matches no permit keyword;
    /// the message is then simply not permit-relevant.
    pub fn extract(&self, msg: &RawMessage) -> Option<PermitRecord> {
        let text = sanitize(&msg.body);

        // Step 1: permit classification. Hard filter: no keyword, no record.
        let (permit_type, permit_number) = self.rules.permit(&text)?;

        // Step 2: station extraction, independent of the permit match.
        let station_number = self.rules.station(&text).unwrap_or_default();

        // Step 3: issuance attribution with per-side default-to-sender.
        let (issued_to, issued_by) = self.attribute_issuance(&text, &msg.sender);

        // Step 4: remark digit run, policy-gated.
        let remark = if self.policy.include_remark {
            self.rules.remark(&text).unwrap_or_default()
        } else {
            String::new()
        };

        // Step 5: timestamp decomposition (UTC).
        let (date, time) = match msg.timestamp {
            Some(ts) => (
                ts.format("%Y-%m-%d").to_string(),
                ts.format("%H:%M:%S").to_string(),
            ),
            None => (String::new(), String::new()),
        };

        Some(PermitRecord {
            sender: msg.sender.clone(),
            text,
            date,
            time,
            permit_type,
            permit_number,
            station_number,
            issued_by,
            issued_to,
            remark,
        })
    }

    /// Resolution policy for the issuance labels, applied in order:
    /// both present, exactly one present (missing side defaults to the
    /// sender), neither present (both empty unless the policy assigns the
    /// sender to `issued_to`).
    fn attribute_issuance(&self, text: &str, sender: &str) -> (String, String) {
        let to = self.rules.issued_to(text);
        let by = self.rules.issued_by(text);

        match (to, by) {
            (Some(to), Some(by)) => (to, by),
            (Some(to), None) => (to, sender.to_string()),
            (None, Some(by)) => (sender.to_string(), by),
            (None, None) => {
                if self.policy.default_both_missing_to_sender {
                    (sender.to_string(), String::new())
                } else {
                    (String::new(), String::new())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn extractor() -> Extractor {
        Extractor::new().unwrap()
    }

    fn msg(sender: &str, body: &str) -> RawMessage {
        RawMessage::new(sender, body)
    }

    #[test]
    fn test_no_keyword_no_record() {
        assert!(extractor().extract(&msg("Alice", "good morning")).is_none());
        assert!(extractor().extract(&msg("Alice", "")).is_none());
    }

    #[test]
    fn test_full_extraction() {
        let record = extractor()
            .extract(&msg("Alice", "PTW 451, issued to John, issued by Mary"))
            .unwrap();
        assert_eq!(record.permit_type, "PTW");
        assert_eq!(record.permit_number, "451");
        assert_eq!(record.issued_to, "John");
        assert_eq!(record.issued_by, "Mary");
        assert_eq!(record.sender, "Alice");
    }

    #[test]
    fn test_default_to_sender_for_missing_by() {
        let record = extractor()
            .extract(&msg("Alice", "SFT - issued to Bob"))
            .unwrap();
        assert_eq!(record.issued_to, "Bob");
        assert_eq!(record.issued_by, "Alice");
    }

    #[test]
    fn test_default_to_sender_for_missing_to() {
        let record = extractor()
            .extract(&msg("Alice", "LOA 3 issued by Carol"))
            .unwrap();
        assert_eq!(record.issued_by, "Carol");
        assert_eq!(record.issued_to, "Alice");
    }

    #[test]
    fn test_both_missing_default_policy_off() {
        let record = extractor().extract(&msg("Alice", "PTW 9")).unwrap();
        assert_eq!(record.issued_to, "");
        assert_eq!(record.issued_by, "");
    }

    #[test]
    fn test_both_missing_default_policy_on() {
        let ex = Extractor::with_config(
            &Keywords::default(),
            ExtractPolicy::new().with_default_both_missing_to_sender(true),
        )
        .unwrap();
        let record = ex.extract(&msg("Alice", "PTW 9")).unwrap();
        assert_eq!(record.issued_to, "Alice");
        assert_eq!(record.issued_by, "");
    }

    #[test]
    fn test_station_and_permit_independent() {
        let record = extractor().extract(&msg("Alice", "LOA#12 SS 7")).unwrap();
        assert_eq!(record.permit_type, "LOA");
        assert_eq!(record.permit_number, "12");
        assert_eq!(record.station_number, "7");

        // Station marker before the permit keyword.
        let record = extractor()
            .extract(&msg("Alice", "SS 7 work under LOA#12"))
            .unwrap();
        assert_eq!(record.station_number, "7");
    }

    #[test]
    fn test_keyword_alone_yields_empty_number() {
        let record = extractor().extract(&msg("Alice", "PTW pending")).unwrap();
        assert_eq!(record.permit_type, "PTW");
        assert_eq!(record.permit_number, "");
    }

    #[test]
    fn test_body_sanitized_before_matching() {
        // Directional marks split the keyword from its boundary context.
        let record = extractor()
            .extract(&msg("Alice", "\u{200E}PTW\u{200E} 5"))
            .unwrap();
        assert_eq!(record.permit_type, "PTW");
        assert_eq!(record.permit_number, "5");
        assert!(!record.text.contains('\u{200E}'));
    }

    #[test]
    fn test_remark_policy_off_by_default() {
        let record = extractor()
            .extract(&msg("Alice", "PTW 1 remark 42"))
            .unwrap();
        assert_eq!(record.remark, "");
    }

    #[test]
    fn test_remark_policy_on() {
        let ex = Extractor::with_config(
            &Keywords::default(),
            ExtractPolicy::new().with_remarks(true),
        )
        .unwrap();
        let record = ex.extract(&msg("Alice", "PTW 1 remark 42")).unwrap();
        assert_eq!(record.remark, "42");

        // Label present without digits still yields empty remark.
        let record = ex.extract(&msg("Alice", "PTW 1 notes later")).unwrap();
        assert_eq!(record.remark, "");
    }

    #[test]
    fn test_timestamp_decomposition() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 9, 5, 3).unwrap();
        let record = extractor()
            .extract(&msg("Alice", "PTW 1").with_timestamp(ts))
            .unwrap();
        assert_eq!(record.date, "2024-06-15");
        assert_eq!(record.time, "09:05:03");
    }

    #[test]
    fn test_missing_timestamp_yields_empty_date_time() {
        let record = extractor().extract(&msg("Alice", "PTW 1")).unwrap();
        assert_eq!(record.date, "");
        assert_eq!(record.time, "");
    }

    #[test]
    fn test_extraction_is_order_independent() {
        let ex = extractor();
        let a = msg("Alice", "PTW 1 issued to John");
        let b = msg("Bob", "LOA 2");
        let first = ex.extract(&a).unwrap();
        let _ = ex.extract(&b);
        let again = ex.extract(&a).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_mixed_language_message() {
        let record = extractor()
            .extract(&msg("أحمد", "تم فتح PTW 77 بالمحطة 3"))
            .unwrap();
        assert_eq!(record.permit_type, "PTW");
        assert_eq!(record.permit_number, "77");
        assert_eq!(record.station_number, "3");
        assert_eq!(record.sender, "أحمد");
    }
}
