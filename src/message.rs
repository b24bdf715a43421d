//! Raw message type produced by the chat log tokenizer.
//!
//! This module provides [`RawMessage`], the normalized representation of one
//! exported chat message before any permit extraction happens.
//!
//! # Overview
//!
//! A raw message consists of:
//! - **Required**: `sender` and `body`
//! - **Optional**: `timestamp`
//!
//! The timestamp is optional because WhatsApp exports occasionally carry
//! lines whose date cannot be interpreted; such messages are still tokenized
//! and classified, and only date-based filtering treats them specially.
//!
//! # Examples
//!
//! ```
//! use permitscan::RawMessage;
//! use chrono::Utc;
//!
//! let msg = RawMessage::new("Alice", "PTW 451 opened")
//!     .with_timestamp(Utc::now());
//! assert_eq!(msg.sender(), "Alice");
//! assert!(msg.timestamp().is_some());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single message from an exported chat log.
///
/// The tokenizer produces one `RawMessage` per logical chat message
/// (continuation lines are joined into `body`). The struct is ephemeral:
/// created once per input message and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Display name of the message author. Non-empty for real messages;
    /// system lines are filtered out by the tokenizer.
    pub sender: String,

    /// Text content of the message. May contain newlines for multiline
    /// messages and may still carry bidi control characters; sanitation
    /// happens later in the extractor.
    pub body: String,

    /// When the message was sent, normalized to UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl RawMessage {
    /// Creates a new message with only sender and body.
    ///
    /// # Example
    ///
    /// ```rust
    /// use permitscan::RawMessage;
    ///
    /// let msg = RawMessage::new("Alice", "LOA 12 closed");
    /// assert!(msg.timestamp().is_none());
    /// ```
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            timestamp: None,
        }
    }

    /// Builder method to set the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the timestamp, if available.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Returns `true` if this message's body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}

impl Default for RawMessage {
    fn default() -> Self {
        Self::new("", "")
    }
}
