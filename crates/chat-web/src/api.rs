//! API Client

use chat_core::{ExchangeReply, ExchangeRequest, RemoteExchange, Result};
use chat_runtime::{ExchangeConfig, HttpExchange};

/// Exchange posting to the endpoint baked in by `build.rs`
pub fn remote_exchange() -> HttpExchange {
    let endpoint = option_env!("CHAT_ENDPOINT_URL").map(str::to_string);
    HttpExchange::from_config(ExchangeConfig::new(endpoint))
}

/// Send one turn to the backend
pub async fn send_turn(request: &ExchangeRequest) -> Result<ExchangeReply> {
    remote_exchange().exchange(request).await
}
