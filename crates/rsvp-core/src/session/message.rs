//! Outbound messages and transcript entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents who said something in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    /// Typed by the invitee.
    User,
    /// Sent by the RSVP bot.
    Bot,
}

/// A rendered bot message on its way to the presentation layer.
///
/// `text` is HTML-lite: it may contain `<br>` and `\n` line breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Catalog key the text was rendered from.
    pub key: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl OutboundMessage {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// The text with `<br>` tags turned into newlines, for plain terminals.
    pub fn plain_text(&self) -> String {
        self.text
            .replace("<br/>", "\n")
            .replace("<br />", "\n")
            .replace("<br>", "\n")
    }
}

/// One line of a conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn bot(message: &OutboundMessage) -> Self {
        Self {
            role: MessageRole::Bot,
            content: message.text.clone(),
            timestamp: message.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_replaces_breaks() {
        let message = OutboundMessage::new("partial_list", "Names:<br><br>1. Juan<br/>2. Maria");
        assert_eq!(message.plain_text(), "Names:\n\n1. Juan\n2. Maria");
    }

    #[test]
    fn test_transcript_from_bot_message_keeps_timestamp() {
        let message = OutboundMessage::new("greeting", "Hi");
        let entry = TranscriptEntry::bot(&message);
        assert_eq!(entry.role, MessageRole::Bot);
        assert_eq!(entry.timestamp, message.timestamp);
        assert_eq!(entry.content, "Hi");
    }
}
