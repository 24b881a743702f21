//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat widget while reading/writing shared state from
//! Leptos context providers.

pub mod chat_message;
pub mod chat_widget;
pub mod resize_handle;
