//! Conversation state for the chat widget.
//!
//! DESIGN
//! ======
//! A submission is a two-phase transition `Idle -> Awaiting -> Idle`. The
//! user message is appended when the phase enters `Awaiting`, and exactly one
//! bot message is appended when it leaves. The message log is append-only for
//! the lifetime of the page session.
//!
//! Response bodies from the answering service have no fixed schema, so
//! `interpret_reply` owns the shape detection and the raw-JSON fallback.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde_json::Value;

/// Display text for a reply that carries data but no `answer`.
pub const DEFAULT_REPLY_TEXT: &str = "결과를 확인하세요.";

/// Display text appended when the request fails for any reason.
pub const REQUEST_FAILED_TEXT: &str = "오류가 발생했습니다.";

/// Who authored a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// CSS modifier used by the transcript.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single entry in the transcript. Never mutated after it is appended.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Transcript render key; unique per message.
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Tabular payload eligible for CSV export (bot messages only).
    pub data: Option<Vec<Value>>,
}

impl ChatMessage {
    fn new(sender: Sender, text: String, data: Option<Vec<Value>>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), sender, text, data }
    }

    /// Whether the message carries rows worth offering for export.
    pub fn has_records(&self) -> bool {
        self.data.as_ref().is_some_and(|rows| !rows.is_empty())
    }
}

/// Submission lifecycle. `Awaiting` is the pending flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConversationPhase {
    #[default]
    Idle,
    Awaiting,
}

/// Display text and optional records derived from one response body.
#[derive(Clone, Debug, PartialEq)]
pub struct BotReply {
    pub text: String,
    pub data: Option<Vec<Value>>,
}

/// State for the chat widget: transcript, input draft, and request phase.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    pub phase: ConversationPhase,
}

impl ChatState {
    pub fn is_pending(&self) -> bool {
        self.phase == ConversationPhase::Awaiting
    }

    /// Whether `begin_submit` would accept the current input.
    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.input.trim().is_empty()
    }

    pub fn set_input(&mut self, text: String) {
        self.input = text;
    }

    /// Start a submission from the current input.
    ///
    /// Returns the question to send, or `None` when the input is blank or a
    /// request is already in flight. On `Some`, the user message has already
    /// been appended and the state is `Awaiting`.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        let question = self.input.clone();
        self.messages
            .push(ChatMessage::new(Sender::User, question.clone(), None));
        self.phase = ConversationPhase::Awaiting;
        Some(question)
    }

    /// Finish the in-flight submission with the response body or an error.
    ///
    /// Appends exactly one bot message, clears the input, and returns to
    /// `Idle`. Returns `false` without touching state if nothing is in flight.
    pub fn complete_submit(&mut self, outcome: Result<Value, String>) -> bool {
        if !self.is_pending() {
            return false;
        }
        let reply = match outcome {
            Ok(body) => interpret_reply(&body),
            Err(_) => BotReply { text: REQUEST_FAILED_TEXT.to_owned(), data: None },
        };
        self.messages
            .push(ChatMessage::new(Sender::Bot, reply.text, reply.data));
        self.input.clear();
        self.phase = ConversationPhase::Idle;
        true
    }
}

/// Derive the bot message content from a response body.
///
/// `answer` (string) supplies the text. Records come from a `db_result` array,
/// or from the body itself when it is an array. A body with neither is shown
/// as pretty-printed JSON.
pub fn interpret_reply(body: &Value) -> BotReply {
    let answer = body.get("answer").and_then(Value::as_str);

    let data = match body.get("db_result") {
        Some(Value::Array(rows)) => Some(rows.clone()),
        _ => body.as_array().cloned(),
    };

    let text = match (answer, &data) {
        (Some(answer), _) => answer.to_owned(),
        (None, Some(_)) => DEFAULT_REPLY_TEXT.to_owned(),
        (None, None) => serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string()),
    };

    BotReply { text, data }
}
