//! Floating chat widget: launcher icon, transcript, and question input.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submission is sent to `/api/bot` through `net::api::ask_bot`. The
//! conversation state decides whether a submission is allowed and how the
//! reply is displayed; this component only wires events to it.
//!
//! Closing the window hides it without disposing state, so a reply that
//! resolves while the window is closed is still appended and shown on reopen.

use leptos::prelude::*;

use crate::components::chat_message::ChatMessageView;
use crate::components::resize_handle::ResizeHandle;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

/// Enter submits; Shift+Enter and the Enter that commits an IME composition
/// (Hangul input) do not.
pub(crate) fn is_submit_key(key: &str, shift: bool, composing: bool) -> bool {
    key == "Enter" && !shift && !composing
}

/// Chat launcher plus the resizable chat window.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Typing writes `chat` on every keystroke; these memos keep the transcript
    // and the scroll effect subscribed to the log only.
    let messages = Memo::new(move |_| chat.with(|c| c.messages.clone()));
    let message_count = Memo::new(move |_| messages.with(Vec::len));

    Effect::new(move || {
        let _ = message_count.get();

        #[cfg(feature = "hydrate")]
        request_animation_frame(move || {
            if let Some(el) = messages_ref.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        });
    });

    let do_send = move || {
        let Some(question) = chat.try_update(ChatState::begin_submit).flatten() else {
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::ask_bot(&question).await;
            if let Err(err) = &outcome {
                leptos::logging::warn!("bot request failed: {err}");
            }
            // `try_update` is a no-op if the app was torn down mid-request.
            let _ = chat.try_update(|c| c.complete_submit(outcome));
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key(), ev.shift_key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    let pending = move || chat.with(ChatState::is_pending);
    let can_send = move || chat.with(ChatState::can_submit);
    let is_open = move || ui.with(|u| u.chat_open);
    let window_style = move || ui.with(|u| u.chat_size.style());

    view! {
        <button
            class="chat-icon"
            class:chat-icon--open=is_open
            title="챗봇"
            on:click=move |_| ui.update(UiState::toggle_chat)
        >
            "💬"
        </button>

        <div class="chat-window" class:is-open=is_open style=window_style>
            <div class="chat-window__header">"RAG 챗봇"</div>

            <div class="chat-window__messages" node_ref=messages_ref>
                <Show when=move || message_count.get() == 0>
                    <div class="chat-window__empty">"궁금한 내용을 질문해 보세요."</div>
                </Show>

                <For each=move || messages.get() key=|message| message.id.clone() let:message>
                    <ChatMessageView message=message/>
                </For>

                {move || {
                    pending()
                        .then(|| view! { <div class="chat-window__loading">"답변을 기다리는 중..."</div> })
                }}
            </div>

            <div class="chat-window__input-row">
                <input
                    class="chat-window__input"
                    type="text"
                    placeholder="질문을 입력하세요"
                    disabled=pending
                    prop:value=move || chat.with(|c| c.input.clone())
                    on:input=move |ev| chat.update(|c| c.set_input(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-window__send" on:click=on_click disabled=move || !can_send()>
                    "전송"
                </button>
            </div>

            <ResizeHandle/>
        </div>
    }
}
