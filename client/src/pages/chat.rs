//! Chat page: conversation transcript, prompt input, and upload side panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns `ChatState`. A send appends the user message immediately,
//! then one `POST /chat` runs in the background; its outcome is folded back
//! through `ChatState::finish_send`. At most one request is in flight.

use leptos::prelude::*;

use crate::components::chat_message::ChatMessage;
use crate::components::file_upload::FileUpload;
use crate::net::types::Role;
use crate::state::chat::ChatState;
use crate::util::clock::now_ms;

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| (c.messages.len(), c.is_loading, c.error.is_some()));

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(request) = chat.try_update(|c| c.begin_send(now_ms())).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_chat(&request).await;
            if let Err(e) = &result {
                log::warn!("chat request failed: {e}");
            }
            chat.update(|c| c.finish_send(result, now_ms()));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_role_change = move |ev: leptos::ev::Event| {
        if let Some(role) = Role::from_value(&event_target_value(&ev)) {
            chat.update(|c| c.set_role(role));
        }
    };

    let on_logout = move |_| crate::util::auth::logout();

    view! {
        <div class="chat-page">
            <header class="chat-page__header">
                <h1 class="chat-page__title">"AI Research Assistant"</h1>
                <div class="chat-page__controls">
                    <select
                        class="chat-page__role"
                        prop:value=move || chat.with(|c| c.role.as_str())
                        on:change=on_role_change
                    >
                        {Role::ALL
                            .into_iter()
                            .map(|role| view! { <option value=role.as_str()>{role.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn chat-page__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            <div class="chat-page__body">
                <main class="chat-page__conversation">
                    <div class="chat-page__messages" node_ref=messages_ref>
                        {move || {
                            chat.with(|c| c.messages.clone())
                                .into_iter()
                                .map(|message| view! { <ChatMessage message=message/> })
                                .collect::<Vec<_>>()
                        }}
                        {move || {
                            chat.with(|c| c.is_loading)
                                .then(|| {
                                    view! {
                                        <div class="chat-page__loading">
                                            <span class="chat-page__dot"></span>
                                            <span class="chat-page__dot"></span>
                                            <span class="chat-page__dot"></span>
                                        </div>
                                    }
                                })
                        }}
                        {move || {
                            chat.with(|c| c.error.clone())
                                .map(|error| view! { <div class="chat-page__error">{error}</div> })
                        }}
                    </div>

                    <div class="chat-page__input-row">
                        <input
                            class="chat-page__input"
                            type="text"
                            placeholder="Ask a question about your documents..."
                            prop:value=move || chat.with(|c| c.input.clone())
                            on:input=move |ev| chat.update(|c| c.set_input(event_target_value(&ev)))
                            on:keydown=on_keydown
                        />
                        <button
                            class="btn btn--primary chat-page__send"
                            on:click=on_click
                            disabled=move || !chat.with(ChatState::can_send)
                        >
                            {move || if chat.with(|c| c.is_loading) { "Sending..." } else { "Send" }}
                        </button>
                    </div>
                </main>

                <aside class="chat-page__sidebar">
                    <h2 class="chat-page__sidebar-title">"Upload Documents"</h2>
                    <FileUpload/>
                </aside>
            </div>
        </div>
    }
}
