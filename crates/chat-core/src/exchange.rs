//! Remote Exchange Strategy
//!
//! The only outside collaborator: something that takes the new input plus the
//! serialized history and produces a reply. The browser build talks to an
//! HTTP endpoint (see `chat-runtime`); tests plug in scripted doubles.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let Some(request) = conversation.submit(&mut draft) else { return };
//! let outcome = exchange.exchange(&request).await;
//! conversation.resolve(outcome);
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Request body sent to the endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRequest {
    /// Text the user just submitted
    pub input_text: String,

    /// Prior turns rendered by [`crate::transcript::render_history`]
    pub history: String,
}

/// Successful response body. Unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeReply {
    pub output_text: String,
}

/// Strategy trait for the remote exchange.
///
/// Futures are not required to be `Send`: everything runs on the browser's
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait RemoteExchange {
    /// Send one turn and wait for its reply
    async fn exchange(&self, request: &ExchangeRequest) -> Result<ExchangeReply>;
}
