//! Error Types

use thiserror::Error;

use crate::transcript::Labels;

/// Result type alias for exchange operations
pub type Result<T> = std::result::Result<T, ExchangeError>;

/// Why a remote exchange failed.
///
/// Every variant is shown to the user as the same fixed text (see
/// [`ExchangeError::user_message`]); the variant only travels as far as the log.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// Endpoint missing or unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request could not be sent or the body could not be read
    #[error("Transport error: {0}")]
    Transport(String),

    /// Body was not the expected reply object
    #[error("Decode error: {0}")]
    Decode(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExchangeError {
    /// Text appended to the conversation in place of a reply
    pub const fn user_message(&self, labels: &Labels) -> &'static str {
        labels.exchange_failed
    }
}
