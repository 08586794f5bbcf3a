//! Conversation Messages
//!
//! The append-only message log and the two transitions that grow it:
//! [`Conversation::submit`] for user input and [`Conversation::resolve`]
//! for whatever the remote exchange produced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::exchange::{ExchangeReply, ExchangeRequest};
use crate::transcript::{render_history, Labels};

/// Who produced a message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Typed by the user
    User,
    /// Reply or error text from the exchange
    System,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::System => write!(f, "system"),
        }
    }
}

/// Message identifier derived from the creation time in milliseconds.
///
/// Unique and strictly increasing within one [`Conversation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(i64);

impl MessageId {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Id for a message created at `now_ms`, following `previous`.
    fn next(previous: Option<Self>, now_ms: i64) -> Self {
        match previous {
            Some(prev) if prev.0 >= now_ms => Self(prev.0 + 1),
            _ => Self(now_ms),
        }
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single message in a conversation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,

    /// Displayed text
    pub text: String,

    pub origin: Origin,

    /// Timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a new message
    pub fn new(id: MessageId, origin: Origin, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            origin,
            created_at: Utc::now(),
        }
    }

    pub const fn is_user(&self) -> bool {
        matches!(self.origin, Origin::User)
    }
}

/// Conversation history for one page session.
///
/// Messages are only ever appended; there is no accessor that edits or
/// removes one.
#[derive(Clone, Debug, Default)]
pub struct Conversation {
    messages: Vec<Message>,
    labels: Labels,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn with_labels(labels: Labels) -> Self {
        Self {
            messages: Vec::new(),
            labels,
        }
    }

    /// Get all messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Get the last message
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Accept the draft as a user turn.
    ///
    /// Blank drafts (empty after trimming) are ignored: nothing is appended,
    /// `draft` is left as it was and `None` is returned. Otherwise the user
    /// message is appended, `draft` is emptied, and the request for the
    /// remote exchange is returned. Its `history` covers only the turns that
    /// existed before this one.
    pub fn submit(&mut self, draft: &mut String) -> Option<ExchangeRequest> {
        if draft.trim().is_empty() {
            return None;
        }

        let history = render_history(&self.messages, &self.labels);
        let input_text = std::mem::take(draft);

        let id = self.push(Origin::User, input_text.clone());
        tracing::debug!(%id, prior_turns = self.messages.len() - 1, "user turn submitted");

        Some(ExchangeRequest {
            input_text,
            history,
        })
    }

    /// Append the outcome of an exchange as a system turn.
    ///
    /// Failures become the fixed error text; this never fails itself.
    pub fn resolve(&mut self, outcome: Result<ExchangeReply>) -> &Message {
        let text = match outcome {
            Ok(reply) => reply.output_text,
            Err(err) => {
                tracing::warn!(error = %err, "exchange failed");
                err.user_message(&self.labels).to_string()
            }
        };

        let id = self.push(Origin::System, text);
        tracing::debug!(%id, "system turn appended");

        &self.messages[self.messages.len() - 1]
    }

    fn push(&mut self, origin: Origin, text: String) -> MessageId {
        let id = MessageId::next(self.last().map(|m| m.id), Utc::now().timestamp_millis());
        self.messages.push(Message::new(id, origin, text));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExchangeError;

    fn reply(text: &str) -> Result<ExchangeReply> {
        Ok(ExchangeReply {
            output_text: text.into(),
        })
    }

    #[test]
    fn test_message_creation() {
        let msg = Message::new(MessageId::from_millis(7), Origin::User, "Hello");
        assert_eq!(msg.origin, Origin::User);
        assert_eq!(msg.text, "Hello");
        assert!(msg.is_user());
    }

    #[test]
    fn test_message_id_strictly_increasing() {
        assert_eq!(MessageId::next(None, 100), MessageId::from_millis(100));
        assert_eq!(
            MessageId::next(Some(MessageId::from_millis(100)), 100),
            MessageId::from_millis(101)
        );
        // Clock moved backwards
        assert_eq!(
            MessageId::next(Some(MessageId::from_millis(150)), 120),
            MessageId::from_millis(151)
        );
        assert_eq!(
            MessageId::next(Some(MessageId::from_millis(100)), 130),
            MessageId::from_millis(130)
        );
    }

    #[test]
    fn test_submit_appends_user_message_and_clears_draft() {
        let mut conv = Conversation::new();
        let mut draft = String::from("こんにちは");

        let request = conv.submit(&mut draft).unwrap();

        assert!(draft.is_empty());
        assert_eq!(conv.len(), 1);
        let msg = conv.last().unwrap();
        assert_eq!(msg.origin, Origin::User);
        assert_eq!(msg.text, "こんにちは");
        assert_eq!(request.input_text, "こんにちは");
    }

    #[test]
    fn test_submit_keeps_untrimmed_text() {
        let mut conv = Conversation::new();
        let mut draft = String::from("  padded  ");

        let request = conv.submit(&mut draft).unwrap();

        assert_eq!(request.input_text, "  padded  ");
        assert_eq!(conv.last().unwrap().text, "  padded  ");
    }

    #[test]
    fn test_blank_submit_is_noop() {
        let mut conv = Conversation::new();

        for blank in ["", "   ", "\n\t "] {
            let mut draft = String::from(blank);
            assert!(conv.submit(&mut draft).is_none());
            assert_eq!(draft, blank);
        }
        assert!(conv.is_empty());
    }

    #[test]
    fn test_first_submit_sends_sentinel() {
        let mut conv = Conversation::new();
        let request = conv.submit(&mut "hi".to_string()).unwrap();
        assert_eq!(request.history, Labels::JAPANESE.empty_history);
    }

    #[test]
    fn test_later_submit_sends_prior_turns_only() {
        let mut conv = Conversation::new();
        conv.submit(&mut "hi".to_string()).unwrap();
        conv.resolve(reply("hello"));

        let request = conv.submit(&mut "how are you".to_string()).unwrap();

        assert_eq!(request.history, "ユーザー: hi\nシステム: hello");
        assert_eq!(request.input_text, "how are you");
        assert_ne!(request.history, Labels::JAPANESE.empty_history);
    }

    #[test]
    fn test_error_turns_are_part_of_history() {
        let mut conv = Conversation::with_labels(Labels::ENGLISH);
        conv.submit(&mut "ping".to_string()).unwrap();
        conv.resolve(Err(ExchangeError::Transport("refused".into())));

        let request = conv.submit(&mut "again".to_string()).unwrap();
        assert_eq!(request.history, "User: ping\nSystem: An error occurred");
    }

    #[test]
    fn test_resolve_success_appends_reply() {
        let mut conv = Conversation::new();
        conv.submit(&mut "hi".to_string()).unwrap();

        let msg = conv.resolve(reply("Hello"));
        assert_eq!(msg.origin, Origin::System);
        assert_eq!(msg.text, "Hello");
        assert_eq!(conv.len(), 2);
    }

    #[test]
    fn test_resolve_failure_appends_fixed_error() {
        let mut conv = Conversation::new();
        conv.submit(&mut "hi".to_string()).unwrap();

        let msg = conv.resolve(Err(ExchangeError::Decode("not json".into())));
        assert_eq!(msg.origin, Origin::System);
        assert_eq!(msg.text, "エラーが発生しました");
        assert_eq!(conv.len(), 2);
    }

    #[test]
    fn test_resolve_accepts_empty_reply() {
        let mut conv = Conversation::new();
        conv.submit(&mut "hi".to_string()).unwrap();

        let msg = conv.resolve(reply(""));
        assert_eq!(msg.text, "");
        assert_eq!(msg.origin, Origin::System);
    }

    #[test]
    fn test_ids_unique_and_ordered() {
        let mut conv = Conversation::new();
        for i in 0..20 {
            conv.submit(&mut format!("msg {i}")).unwrap();
            conv.resolve(reply("ok"));
        }

        let ids: Vec<_> = conv.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_overlapping_turns_resolve_out_of_order() {
        let mut conv = Conversation::new();
        let a = conv.submit(&mut "A".to_string()).unwrap();
        let b = conv.submit(&mut "B".to_string()).unwrap();

        assert_eq!(a.history, Labels::JAPANESE.empty_history);
        assert_eq!(b.history, "ユーザー: A");

        conv.resolve(reply("re: B"));
        conv.resolve(reply("re: A"));

        let texts: Vec<_> = conv.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["A", "B", "re: B", "re: A"]);
    }

    #[test]
    fn test_origin_serde() {
        assert_eq!(serde_json::to_string(&Origin::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Origin::System).unwrap(), "\"system\"");
    }
}
