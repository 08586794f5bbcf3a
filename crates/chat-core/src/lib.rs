//! # chat-core
//!
//! Conversation state for a single-page chat client, independent of any UI
//! framework or transport.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Conversation                           │
//! │  ┌─────────────┐   ┌──────────────┐   ┌────────────────────┐  │
//! │  │   submit    │──▶│  Transcript  │──▶│  RemoteExchange    │  │
//! │  │ (user turn) │   │  (history)   │   │    (Strategy)      │  │
//! │  └─────────────┘   └──────────────┘   └─────────┬──────────┘  │
//! │         ▲                                       │             │
//! │         └──────────── resolve (system turn) ◀───┘             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! `submit` and `resolve` are synchronous; the only await is the exchange
//! in between, so the conversation can sit inside a UI signal and never be
//! borrowed across a suspension point.

pub mod error;
pub mod exchange;
pub mod message;
pub mod transcript;

pub use error::{ExchangeError, Result};
pub use exchange::{ExchangeReply, ExchangeRequest, RemoteExchange};
pub use message::{Conversation, Message, MessageId, Origin};
pub use transcript::{render_history, Labels};
