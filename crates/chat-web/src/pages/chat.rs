//! Chat Page

use chat_core::{Conversation, Labels};
use leptos::prelude::*;

use crate::api;
use crate::components::MessageBubble;

const TITLE: &str = "Simple Chat";

/// Whether a key press sends the draft.
///
/// Enter during IME composition confirms the conversion and must not send.
fn commits(key: &str, is_composing: bool) -> bool {
    key == "Enter" && !is_composing
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let labels = Labels::default();
    let conversation = RwSignal::new(Conversation::with_labels(labels));
    let draft = RwSignal::new(String::new());

    let submit = move || {
        let mut text = draft.get_untracked();
        let Some(request) = conversation.try_update(|c| c.submit(&mut text)).flatten() else {
            return;
        };
        // Cleared before the reply arrives
        draft.set(text);

        leptos::task::spawn_local(async move {
            let outcome = api::send_turn(&request).await;
            conversation.update(|c| {
                c.resolve(outcome);
            });
        });
    };

    view! {
        <div class="chat">
            <header class="chat-header">
                <h1>{TITLE}</h1>
            </header>

            <div class="messages">
                <For
                    each=move || conversation.with(|c| c.messages().to_vec())
                    key=|msg| msg.id
                    children=move |msg| view! { <MessageBubble message=msg /> }
                />
            </div>

            <div class="input-area">
                <input
                    type="text"
                    placeholder=labels.placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if commits(&ev.key(), ev.is_composing()) {
                            ev.prevent_default();
                            submit();
                        }
                    }
                />
                <button on:click=move |_| submit()>{labels.send}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_commits() {
        assert!(commits("Enter", false));
    }

    #[test]
    fn test_enter_while_composing_does_not_commit() {
        assert!(!commits("Enter", true));
    }

    #[test]
    fn test_other_keys_do_not_commit() {
        for key in ["a", "Tab", "Escape", "NumpadEnter", " "] {
            assert!(!commits(key, false), "{key} should not commit");
        }
    }
}
