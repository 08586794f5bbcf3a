//! UI Components

use chat_core::{Message, Origin};
use leptos::prelude::*;

/// Row alignment: user turns on the left, system turns on the right
fn row_class(origin: Origin) -> String {
    format!("message-row message-row-{origin}")
}

fn bubble_class(origin: Origin) -> String {
    format!("message message-{origin}")
}

/// Message bubble component
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    view! {
        <div class=row_class(message.origin)>
            <div class=bubble_class(message.origin)>{message.text}</div>
        </div>
    }
}
