//! One transcript entry, with a CSV export action for tabular bot replies.

use leptos::prelude::*;

use crate::state::chat::ChatMessage;
use crate::util::csv_export::{DEFAULT_FILENAME, export_csv};

#[component]
pub fn ChatMessageView(message: ChatMessage) -> impl IntoView {
    let has_records = message.has_records();
    let ChatMessage { sender, text, data, .. } = message;
    let class = format!("chat-message chat-message--{}", sender.as_str());

    let export = has_records.then(|| {
        let rows = data.unwrap_or_default();
        view! {
            <button
                class="btn chat-message__export"
                on:click=move |_| {
                    let _ = export_csv(Some(rows.as_slice()), DEFAULT_FILENAME);
                }
            >
                "CSV 다운로드"
            </button>
        }
    });

    view! {
        <div class=class>
            <pre class="chat-message__text">{text}</pre>
            {export}
        </div>
    }
}
