//! The ordered table of pattern rules behind the field extractor.
//!
//! Each rule is an independent, pure function from sanitized text to an
//! optional captured value. The rules are compiled once from the configured
//! [`Keywords`] tables and never fail at match time; a non-match is always
//! representable as `None`.

use regex::Regex;

use crate::config::Keywords;
use crate::error::PermitScanError;

/// Separator run allowed between a keyword and its digit group:
/// whitespace, colon, hyphen, hash, slash.
const SEPARATORS: &str = r"[\s:#/-]*";

/// Compiled pattern rules for one extraction configuration.
///
/// # Example
///
/// ```
/// use permitscan::config::Keywords;
/// use permitscan::extract::RuleSet;
///
/// let rules = RuleSet::compile(&Keywords::default())?;
/// let (keyword, number) = rules.permit("LOA#12 SS 7").unwrap();
/// assert_eq!(keyword, "LOA");
/// assert_eq!(number, "12");
/// assert_eq!(rules.station("LOA#12 SS 7"), Some("7".to_string()));
/// # Ok::<(), permitscan::PermitScanError>(())
/// ```
#[derive(Debug)]
pub struct RuleSet {
    permit: Regex,
    station: Regex,
    issued_to: Regex,
    issued_by: Regex,
    issuance_label: Regex,
    remark: Regex,
}

/// Builds a case-insensitive alternation of escaped keywords.
///
/// Rejects empty tables: an empty alternation would match everywhere.
fn alternation(words: &[String], table: &'static str) -> Result<String, PermitScanError> {
    let escaped: Vec<String> = words
        .iter()
        .filter(|w| !w.trim().is_empty())
        .map(|w| regex::escape(w.trim()))
        .collect();
    if escaped.is_empty() {
        return Err(PermitScanError::pattern(table, "keyword list is empty"));
    }
    Ok(escaped.join("|"))
}

fn compile(pattern: &str, table: &'static str) -> Result<Regex, PermitScanError> {
    Regex::new(pattern).map_err(|e| PermitScanError::pattern(table, e.to_string()))
}

impl RuleSet {
    /// Compiles the pattern rules from the given keyword tables.
    ///
    /// # Errors
    ///
    /// Returns [`PermitScanError::Pattern`] if a keyword list is empty or
    /// produces an invalid alternation.
    pub fn compile(keywords: &Keywords) -> Result<Self, PermitScanError> {
        let permit_alt = alternation(&keywords.permit, "permit")?;
        let station_alt = alternation(&keywords.station, "station")?;
        let remark_alt = alternation(&keywords.remark, "remark")?;

        Ok(Self {
            // Keyword as a whole word, optional separators, optional digits.
            permit: compile(
                &format!(r"(?i)\b({permit_alt})\b{SEPARATORS}(\d+)?"),
                "permit",
            )?,
            // Marker, optional whitespace, required digits. Searched over the
            // full text, independent of the permit match.
            station: compile(&format!(r"(?i)\b(?:{station_alt})\s*(\d+)"), "station")?,
            issued_to: compile(r"(?i)\bissued\s+to\b[:\s]*([^\n]*)", "issued to")?,
            issued_by: compile(r"(?i)\bissued\s+by\b[:\s]*([^\n]*)", "issued by")?,
            issuance_label: compile(r"(?i)\bissued\s+(?:to|by)\b", "issuance label")?,
            remark: compile(
                &format!(r"(?i)\b(?:{remark_alt})\b{SEPARATORS}(\d+)?"),
                "remark",
            )?,
        })
    }

    /// Permit classification: returns the first matching keyword
    /// (uppercased) and the digit run immediately following it (empty string
    /// when no digits follow). `None` means the message is not
    /// permit-relevant.
    pub fn permit(&self, text: &str) -> Option<(String, String)> {
        let caps = self.permit.captures(text)?;
        let keyword = caps.get(1).map_or("", |m| m.as_str()).to_uppercase();
        let number = caps.get(2).map_or("", |m| m.as_str()).to_string();
        Some((keyword, number))
    }

    /// Station extraction: the digit run after a station marker, if any.
    pub fn station(&self, text: &str) -> Option<String> {
        self.station
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// "issued to" capture: free text after the label up to a line break,
    /// clipped before any subsequent issuance label and trimmed.
    pub fn issued_to(&self, text: &str) -> Option<String> {
        self.issued_to
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| self.clip_label_tail(m.as_str()))
    }

    /// "issued by" capture, same clipping as [`issued_to`](Self::issued_to).
    pub fn issued_by(&self, text: &str) -> Option<String> {
        self.issued_by
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| self.clip_label_tail(m.as_str()))
    }

    /// Remark extraction: `None` when no remark label is present, otherwise
    /// the digit run after the label (empty string when no digits follow).
    pub fn remark(&self, text: &str) -> Option<String> {
        let caps = self.remark.captures(text)?;
        Some(caps.get(1).map_or("", |m| m.as_str()).to_string())
    }

    /// Both labels may share a line ("issued to John, issued by Mary"); the
    /// free-text capture runs to the line break, so cut it short at the next
    /// issuance label and drop trailing separators.
    fn clip_label_tail(&self, captured: &str) -> String {
        let clipped = match self.issuance_label.find(captured) {
            Some(m) => &captured[..m.start()],
            None => captured,
        };
        clipped
            .trim()
            .trim_end_matches([',', ';', ':', '-'])
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::compile(&Keywords::default()).unwrap()
    }

    // =========================================================================
    // Permit rule
    // =========================================================================

    #[test]
    fn test_permit_with_number() {
        assert_eq!(
            rules().permit("PTW 451 opened"),
            Some(("PTW".into(), "451".into()))
        );
    }

    #[test]
    fn test_permit_separator_variants() {
        let r = rules();
        assert_eq!(r.permit("PTW:451"), Some(("PTW".into(), "451".into())));
        assert_eq!(r.permit("PTW-451"), Some(("PTW".into(), "451".into())));
        assert_eq!(r.permit("LOA#12"), Some(("LOA".into(), "12".into())));
        assert_eq!(r.permit("SFT/99"), Some(("SFT".into(), "99".into())));
    }

    #[test]
    fn test_permit_keyword_alone_yields_empty_number() {
        assert_eq!(
            rules().permit("PTW pending"),
            Some(("PTW".into(), String::new()))
        );
    }

    #[test]
    fn test_permit_case_insensitive_and_uppercased() {
        assert_eq!(rules().permit("ptw 7"), Some(("PTW".into(), "7".into())));
    }

    #[test]
    fn test_permit_requires_word_boundary() {
        let r = rules();
        assert_eq!(r.permit("CAPTWX 451"), None);
        assert_eq!(r.permit("footloa 3"), None);
    }

    #[test]
    fn test_permit_no_keyword_no_match() {
        assert_eq!(rules().permit("good morning everyone"), None);
    }

    #[test]
    fn test_permit_first_match_wins() {
        // LOA appears before PTW in the text; leftmost match wins.
        assert_eq!(
            rules().permit("LOA 3 then PTW 4"),
            Some(("LOA".into(), "3".into()))
        );
    }

    // =========================================================================
    // Station rule
    // =========================================================================

    #[test]
    fn test_station_latin_markers() {
        let r = rules();
        assert_eq!(r.station("work at SS 123 today"), Some("123".into()));
        assert_eq!(r.station("S/S 45 isolated"), Some("45".into()));
        assert_eq!(r.station("SS7"), Some("7".into()));
    }

    #[test]
    fn test_station_arabic_markers() {
        let r = rules();
        assert_eq!(r.station("تم العمل في المحطة 12"), Some("12".into()));
        assert_eq!(r.station("بالمحطه 34"), Some("34".into()));
    }

    #[test]
    fn test_station_requires_digits() {
        assert_eq!(rules().station("meet me at the SS please"), None);
    }

    #[test]
    fn test_station_independent_of_permit_position() {
        let r = rules();
        assert_eq!(r.station("SS 9 then PTW 1"), Some("9".into()));
        assert_eq!(r.station("PTW 1 at SS 9"), Some("9".into()));
    }

    // =========================================================================
    // Issuance rules
    // =========================================================================

    #[test]
    fn test_issued_to_simple() {
        assert_eq!(rules().issued_to("PTW 1 issued to John"), Some("John".into()));
    }

    #[test]
    fn test_issued_to_with_colon() {
        assert_eq!(
            rules().issued_to("issued to: John Smith"),
            Some("John Smith".into())
        );
    }

    #[test]
    fn test_issued_to_stops_at_line_break() {
        assert_eq!(
            rules().issued_to("issued to John\nsome other line"),
            Some("John".into())
        );
    }

    #[test]
    fn test_issued_to_clipped_before_issued_by() {
        assert_eq!(
            rules().issued_to("issued to John, issued by Mary"),
            Some("John".into())
        );
    }

    #[test]
    fn test_issued_by_after_issued_to_on_same_line() {
        assert_eq!(
            rules().issued_by("issued to John, issued by Mary"),
            Some("Mary".into())
        );
    }

    #[test]
    fn test_issued_absent() {
        let r = rules();
        assert_eq!(r.issued_to("PTW 1 no labels here"), None);
        assert_eq!(r.issued_by("PTW 1 no labels here"), None);
    }

    #[test]
    fn test_issued_case_insensitive() {
        assert_eq!(rules().issued_by("Issued By Mary"), Some("Mary".into()));
    }

    // =========================================================================
    // Remark rule
    // =========================================================================

    #[test]
    fn test_remark_with_digits() {
        assert_eq!(rules().remark("remark 42 noted"), Some("42".into()));
        assert_eq!(rules().remark("note: 7"), Some("7".into()));
    }

    #[test]
    fn test_remark_label_without_digits() {
        assert_eq!(rules().remark("remarks pending"), Some(String::new()));
    }

    #[test]
    fn test_remark_absent() {
        assert_eq!(rules().remark("PTW 1 nothing else"), None);
    }

    // =========================================================================
    // Compilation
    // =========================================================================

    #[test]
    fn test_compile_rejects_empty_table() {
        let keywords = Keywords::default().with_permit(vec![]);
        let err = RuleSet::compile(&keywords).unwrap_err();
        assert!(matches!(err, PermitScanError::Pattern { table: "permit", .. }));
    }

    #[test]
    fn test_compile_escapes_custom_keywords() {
        // A marker containing regex metacharacters must match literally.
        let keywords = Keywords::default().with_station(vec!["S.S".into()]);
        let r = RuleSet::compile(&keywords).unwrap();
        assert_eq!(r.station("S.S 5"), Some("5".into()));
        assert_eq!(r.station("SxS 5"), None);
    }
}
