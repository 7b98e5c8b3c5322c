//! Single chat bubble with optional source citations.
//!
//! Sources render in the order the backend sent them; any ranking or
//! filtering already happened server-side.

#[cfg(test)]
#[path = "chat_message_test.rs"]
mod chat_message_test;

use leptos::prelude::*;

use crate::net::types::Source;
use crate::state::chat::{Message, MessageRole};

pub(crate) fn row_class(role: MessageRole) -> &'static str {
    match role {
        MessageRole::User => "chat-message chat-message--user",
        MessageRole::Assistant => "chat-message chat-message--assistant",
    }
}

/// Citations to show: only assistant messages display them.
pub(crate) fn visible_sources(message: &Message) -> &[Source] {
    match (message.role, message.sources.as_deref()) {
        (MessageRole::Assistant, Some(sources)) => sources,
        _ => &[],
    }
}

pub(crate) fn score_label(score: f64) -> String {
    format!("Score: {score}")
}

pub(crate) fn page_label(page_number: Option<u32>) -> Option<String> {
    page_number.map(|page| format!("Page {page}"))
}

pub(crate) fn excerpt_label(content: &str) -> String {
    format!("\"{content}\"")
}

/// Render one message: user right-aligned, assistant left-aligned.
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let sources = visible_sources(&message).to_vec();
    let class = row_class(message.role);

    view! {
        <div class=class>
            <div class="chat-message__bubble">
                <p class="chat-message__content">{message.content}</p>
                {(!sources.is_empty())
                    .then(|| {
                        view! {
                            <div class="chat-message__sources">
                                <p class="chat-message__sources-title">"Sources:"</p>
                                {sources
                                    .into_iter()
                                    .map(|source| {
                                        view! {
                                            <div class="chat-message__source">
                                                <div class="chat-message__source-header">
                                                    <span class="chat-message__document">{source.document_name}</span>
                                                    <span class="chat-message__score">{score_label(source.score)}</span>
                                                </div>
                                                {page_label(source.page_number)
                                                    .map(|label| view! { <p class="chat-message__page">{label}</p> })}
                                                <p class="chat-message__excerpt">{excerpt_label(&source.content)}</p>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}
