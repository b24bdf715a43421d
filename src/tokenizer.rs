//! WhatsApp TXT export tokenizer.
//!
//! WhatsApp exports vary by locale. The tokenizer auto-detects the format
//! by analyzing the first 20 lines of the input, then converts each line
//! into a [`RawMessage`], joining continuation lines into the previous
//! message body.
//!
//! Supported formats:
//! - US: `[1/15/24, 10:30:45 AM] Sender: Message`
//! - EU: `[15.01.24, 10:30:45] Sender: Message`
//! - EU2: `15/01/2024, 10:30 - Sender: Message`
//! - RU: `15.01.2024, 10:30 - Sender: Message`

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::RawMessage;
use crate::config::TokenizerConfig;
use crate::error::PermitScanError;

/// Detected date format variants for WhatsApp exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateFormat {
    /// US format: M/D/YY or M/D/YYYY with optional AM/PM
    /// Example: [1/15/24, 10:30:45 AM]
    US,
    /// EU format with dots in brackets: DD.MM.YY or DD.MM.YYYY
    /// Example: [15.01.24, 10:30:45]
    EuDotBracketed,
    /// EU format with dots, no brackets: DD.MM.YYYY
    /// Example: 26.10.2025, 20:40 - Sender: Message
    EuDotNoBracket,
    /// EU format with slashes, no brackets: DD/MM/YYYY
    /// Example: 15/01/2024, 10:30 -
    EuSlash,
    /// Bracketed EU with slashes
    /// Example: [15/01/2024, 10:30:45]
    EuSlashBracketed,
}

impl DateFormat {
    /// Returns regex pattern for this date format.
    fn pattern(self) -> &'static str {
        match self {
            // [1/15/24, 10:30:45 AM] Sender: Message
            DateFormat::US => {
                r"^\[(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[APap][Mm])?)\]\s([^:]+):\s?(.*)"
            }
            // [15.01.24, 10:30:45] Sender: Message
            DateFormat::EuDotBracketed => {
                r"^\[(\d{2}\.\d{2}\.\d{2,4}),\s(\d{2}:\d{2}(?::\d{2})?)\]\s([^:]+):\s?(.*)"
            }
            // 26.10.2025, 20:40 - Sender: Message
            DateFormat::EuDotNoBracket => {
                r"^(\d{2}\.\d{2}\.\d{2,4}),\s(\d{2}:\d{2}(?::\d{2})?)\s-\s([^:]+):\s?(.*)"
            }
            // 15/01/2024, 10:30 - Sender: Message
            DateFormat::EuSlash => {
                r"^(\d{2}/\d{2}/\d{2,4}),\s(\d{2}:\d{2}(?::\d{2})?)\s-\s([^:]+):\s?(.*)"
            }
            // [15/01/2024, 10:30:45] Sender: Message
            DateFormat::EuSlashBracketed => {
                r"^\[(\d{2}/\d{2}/\d{2,4}),\s(\d{2}:\d{2}(?::\d{2})?)\]\s([^:]+):\s?(.*)"
            }
        }
    }

    /// Returns date parsing format strings for chrono.
    fn date_parse_formats(self) -> &'static [&'static str] {
        match self {
            DateFormat::US => &[
                "%m/%d/%y, %I:%M:%S %p",
                "%m/%d/%y, %I:%M %p",
                "%m/%d/%Y, %I:%M:%S %p",
                "%m/%d/%Y, %I:%M %p",
                "%m/%d/%y, %H:%M:%S",
                "%m/%d/%y, %H:%M",
                "%m/%d/%Y, %H:%M:%S",
                "%m/%d/%Y, %H:%M",
            ],
            DateFormat::EuDotBracketed | DateFormat::EuDotNoBracket => &[
                "%d.%m.%y, %H:%M:%S",
                "%d.%m.%y, %H:%M",
                "%d.%m.%Y, %H:%M:%S",
                "%d.%m.%Y, %H:%M",
            ],
            DateFormat::EuSlash | DateFormat::EuSlashBracketed => &[
                "%d/%m/%y, %H:%M:%S",
                "%d/%m/%y, %H:%M",
                "%d/%m/%Y, %H:%M:%S",
                "%d/%m/%Y, %H:%M",
            ],
        }
    }

    /// Returns all format variants.
    fn all() -> &'static [DateFormat] {
        &[
            DateFormat::US,
            DateFormat::EuDotBracketed,
            DateFormat::EuDotNoBracket,
            DateFormat::EuSlash,
            DateFormat::EuSlashBracketed,
        ]
    }
}

/// Detection result for format auto-detection.
struct FormatDetector {
    format: DateFormat,
    regex: Regex,
}

impl FormatDetector {
    fn new(format: DateFormat) -> Self {
        Self {
            format,
            regex: Regex::new(format.pattern()).unwrap(),
        }
    }

    fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Auto-detect date format by analyzing sample lines.
///
/// Returns `None` if no format matches any line.
fn detect_format(lines: &[&str]) -> Option<DateFormat> {
    let detectors: Vec<FormatDetector> = DateFormat::all()
        .iter()
        .map(|&f| FormatDetector::new(f))
        .collect();

    let mut scores = vec![0usize; detectors.len()];

    for line in lines {
        for (i, detector) in detectors.iter().enumerate() {
            if detector.matches(line) {
                scores[i] += 1;
            }
        }
    }

    // Find the winner (highest score)
    let max_score = *scores.iter().max()?;
    if max_score == 0 {
        return None;
    }

    let winner_idx = scores.iter().position(|&s| s == max_score)?;
    Some(detectors[winner_idx].format)
}

/// Parse timestamp from date and time strings.
fn parse_timestamp(date_str: &str, time_str: &str, format: DateFormat) -> Option<DateTime<Utc>> {
    let datetime_str = format!("{date_str}, {time_str}");

    for parse_format in format.date_parse_formats() {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&datetime_str, parse_format) {
            return Some(naive.and_utc());
        }
    }

    None
}

/// Check if a line is a system message (no actual sender).
///
/// System messages include: group created, user added/left, encryption
/// notice, etc. Indicator lists cover English and Arabic exports.
fn is_system_message(sender: &str, body: &str) -> bool {
    // English system indicators
    let system_indicators_en = [
        "Messages and calls are end-to-end encrypted",
        "created group",
        "created this group",
        "added",
        "removed",
        "left",
        "changed the subject",
        "changed this group's icon",
        "changed the group description",
        "changed their phone number",
        "joined using this group's invite link",
        "security code changed",
        "You're now an admin",
        "is now an admin",
        "turned on disappearing messages",
        "turned off disappearing messages",
    ];

    // Arabic system indicators (case-sensitive)
    let system_indicators_ar = [
        "الرسائل والمكالمات مشفرة تمامًا",
        "أنشأ هذه المجموعة",
        "انضم",
        "غادر",
        "أضاف",
        "أزال",
        "غيّر وصف المجموعة",
        "غيّر اسم المجموعة",
        "تغيّر رمز الأمان",
    ];

    let body_lower = body.to_lowercase();
    let sender_lower = sender.to_lowercase();

    for indicator in &system_indicators_en {
        if body_lower.contains(&indicator.to_lowercase()) {
            return true;
        }
    }

    for indicator in &system_indicators_ar {
        if body.contains(indicator) {
            return true;
        }
    }

    // Check if sender is empty or system-like
    sender.trim().is_empty() || sender_lower.contains("whatsapp") || sender_lower.contains("system")
}

/// Tokenizer for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use permitscan::tokenizer::WhatsAppTokenizer;
///
/// let export = "[1/15/24, 10:30:45 AM] Alice: PTW 451 opened";
/// let tokenizer = WhatsAppTokenizer::new();
/// let messages = tokenizer.parse_str(export)?;
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].sender, "Alice");
/// # Ok::<(), permitscan::PermitScanError>(())
/// ```
pub struct WhatsAppTokenizer {
    config: TokenizerConfig,
}

impl WhatsAppTokenizer {
    /// Creates a new tokenizer with default configuration.
    pub fn new() -> Self {
        Self {
            config: TokenizerConfig::default(),
        }
    }

    /// Creates a tokenizer with custom configuration.
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokenizes a WhatsApp export file.
    ///
    /// # Errors
    ///
    /// Returns [`PermitScanError::Io`] if the file cannot be read and
    /// [`PermitScanError::InvalidFormat`] if no known date format matches.
    pub fn parse(&self, path: &Path) -> Result<Vec<RawMessage>, PermitScanError> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Tokenizes WhatsApp export content from a string.
    ///
    /// Empty input yields an empty vector; rejecting an empty message set is
    /// the pipeline's responsibility.
    pub fn parse_str(&self, content: &str) -> Result<Vec<RawMessage>, PermitScanError> {
        let lines: Vec<&str> = content.lines().collect();

        if lines.is_empty() {
            return Ok(vec![]);
        }

        // Step 1: Auto-detect format from first 20 lines. Directional marks
        // around bracketed timestamps would defeat the anchored patterns, so
        // detection and matching run on stripped lines.
        let stripped: Vec<String> = lines
            .iter()
            .map(|line| crate::sanitize::sanitize(line))
            .collect();
        let sample_size = std::cmp::min(20, stripped.len());
        let sample: Vec<&str> = stripped[..sample_size].iter().map(String::as_str).collect();
        let format = detect_format(&sample).ok_or_else(|| {
            PermitScanError::invalid_format(
                "WhatsApp",
                "Could not detect WhatsApp export format. \
                 Make sure the file is a valid WhatsApp chat export.",
            )
        })?;

        // Step 2: Compile regex for detected format
        let regex = Regex::new(format.pattern())
            .map_err(|e| PermitScanError::invalid_format("WhatsApp", e.to_string()))?;

        // Step 3: Parse all lines
        let mut messages: Vec<RawMessage> = Vec::new();

        for line in &stripped {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(caps) = regex.captures(line) {
                // New message starts
                let date_str = caps.get(1).map_or("", |m| m.as_str());
                let time_str = caps.get(2).map_or("", |m| m.as_str());
                let sender = caps.get(3).map_or("", |m| m.as_str().trim());
                let body = caps.get(4).map_or("", |m| m.as_str());

                // Skip system messages (if configured)
                if self.config.skip_system_messages && is_system_message(sender, body) {
                    continue;
                }

                // A line whose date cannot be interpreted still yields a
                // message; only date-based filtering treats it specially.
                let timestamp = parse_timestamp(date_str, time_str, format);

                let mut msg = RawMessage::new(sender, body);
                if let Some(ts) = timestamp {
                    msg = msg.with_timestamp(ts);
                }
                messages.push(msg);
            } else {
                // Continuation of previous message (multiline)
                if let Some(last_msg) = messages.last_mut() {
                    last_msg.body.push('\n');
                    last_msg.body.push_str(line);
                }
                // If no previous message, skip orphan line
            }
        }

        Ok(messages)
    }
}

impl Default for WhatsAppTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
