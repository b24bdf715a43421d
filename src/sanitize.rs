//! Removal of invisible bidi control characters from message text.
//!
//! Chat export tools wrap Arabic/English mixed text in directional marks and
//! use narrow no-break spaces around timestamps. These characters are
//! invisible but defeat word-boundary pattern matching, so every message body
//! passes through [`sanitize`] before the extraction rules see it.

/// Characters stripped from message bodies before pattern matching.
///
/// - U+200E LEFT-TO-RIGHT MARK
/// - U+200F RIGHT-TO-LEFT MARK
/// - U+202F NARROW NO-BREAK SPACE
const STRIPPED: [char; 3] = ['\u{200E}', '\u{200F}', '\u{202F}'];

/// Removes directional marks and narrow no-break spaces from `text`.
///
/// Every other character, including newlines, is preserved unchanged. The
/// function is pure and idempotent; the output is never longer than the
/// input.
///
/// # Example
///
/// ```
/// use permitscan::sanitize::sanitize;
///
/// let cleaned = sanitize("\u{200E}PTW\u{202F}451");
/// assert_eq!(cleaned, "PTW451");
/// ```
pub fn sanitize(text: &str) -> String {
    // Fast path: most Latin-only messages contain none of the marks.
    if !text.chars().any(|c| STRIPPED.contains(&c)) {
        return text.to_string();
    }
    text.chars().filter(|c| !STRIPPED.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_ltr_mark() {
        assert_eq!(sanitize("\u{200E}PTW 451"), "PTW 451");
    }

    #[test]
    fn test_strips_rtl_mark() {
        assert_eq!(sanitize("المحطة\u{200F} 12"), "المحطة 12");
    }

    #[test]
    fn test_strips_narrow_nbsp() {
        assert_eq!(sanitize("10:30\u{202F}AM"), "10:30AM");
    }

    #[test]
    fn test_preserves_newlines_and_other_text() {
        let input = "line one\nline two\tend";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_preserves_regular_spaces() {
        assert_eq!(sanitize("PTW 451 SS 7"), "PTW 451 SS 7");
    }

    #[test]
    fn test_idempotent() {
        let input = "\u{200E}SFT\u{202F}- issued to Bob\u{200F}";
        let once = sanitize(input);
        let twice = sanitize(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_output_never_longer() {
        for input in ["", "plain", "\u{200E}\u{200F}\u{202F}", "a\u{200E}b"] {
            assert!(sanitize(input).len() <= input.len());
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_only_marks_becomes_empty() {
        assert_eq!(sanitize("\u{200E}\u{200F}\u{202F}"), "");
    }
}
