//! # chat-runtime
//!
//! Remote exchange implementations for the simple-chat client.
//!
//! ## Exchanges
//!
//! - **HTTP** (default): JSON POST to a configured endpoint
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_runtime::http::HttpExchange;
//!
//! let exchange = HttpExchange::from_env();
//! let outcome = exchange.exchange(&request).await;
//! conversation.resolve(outcome);
//! ```

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http")]
pub use http::{ExchangeConfig, HttpExchange, ENDPOINT_ENV};

// Re-export core types for convenience
pub use chat_core::{
    Conversation, ExchangeError, ExchangeReply, ExchangeRequest, Labels, Message, Origin,
    RemoteExchange, Result,
};
