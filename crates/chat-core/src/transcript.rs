//! Transcript Serialization
//!
//! Renders prior conversation turns into the single `history` string the
//! remote endpoint expects, and holds the localized strings that go with it.

use crate::message::{Message, Origin};

/// Localized strings used by a conversation and its view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Labels {
    /// Role label for user turns in the transcript
    pub user: &'static str,

    /// Role label for system turns in the transcript
    pub system: &'static str,

    /// Sent as `history` when no prior turn exists
    pub empty_history: &'static str,

    /// Appended in place of a reply when the exchange fails
    pub exchange_failed: &'static str,

    /// Input field placeholder
    pub placeholder: &'static str,

    /// Send button caption
    pub send: &'static str,
}

impl Labels {
    pub const JAPANESE: Self = Self {
        user: "ユーザー",
        system: "システム",
        empty_history: "（初回なので会話履歴なし）",
        exchange_failed: "エラーが発生しました",
        placeholder: "メッセージを入力...",
        send: "送信",
    };

    pub const ENGLISH: Self = Self {
        user: "User",
        system: "System",
        empty_history: "(first turn, no conversation history)",
        exchange_failed: "An error occurred",
        placeholder: "Type a message...",
        send: "Send",
    };

    /// Transcript label for a message origin
    pub const fn role(&self, origin: Origin) -> &'static str {
        match origin {
            Origin::User => self.user,
            Origin::System => self.system,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::JAPANESE
    }
}

/// Render prior turns as `"<label>: <text>"` lines, oldest first.
///
/// An empty slice yields the sentinel from `labels`.
pub fn render_history(messages: &[Message], labels: &Labels) -> String {
    if messages.is_empty() {
        return labels.empty_history.to_string();
    }

    messages
        .iter()
        .map(|m| format!("{}: {}", labels.role(m.origin), m.text))
        .collect::<Vec<_>>()
        .join("\n")
}
