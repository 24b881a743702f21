use serde_json::json;

use super::*;

fn state_with_input(text: &str) -> ChatState {
    let mut state = ChatState::default();
    state.set_input(text.to_owned());
    state
}

// =============================================================
// ChatState defaults
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(state.input.is_empty());
    assert_eq!(state.phase, ConversationPhase::Idle);
    assert!(!state.is_pending());
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn begin_submit_appends_user_message_and_awaits() {
    let mut state = state_with_input("오늘 환자 수는?");

    let question = state.begin_submit();

    assert_eq!(question.as_deref(), Some("오늘 환자 수는?"));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].sender, Sender::User);
    assert_eq!(state.messages[0].text, "오늘 환자 수는?");
    assert!(state.messages[0].data.is_none());
    assert!(state.is_pending());
    // Input stays visible until the response resolves.
    assert_eq!(state.input, "오늘 환자 수는?");
}

#[test]
fn begin_submit_sends_untrimmed_input() {
    let mut state = state_with_input("  cases  ");
    assert_eq!(state.begin_submit().as_deref(), Some("  cases  "));
}

#[test]
fn begin_submit_ignores_blank_input() {
    let mut state = state_with_input("   \t ");
    assert!(state.begin_submit().is_none());
    assert!(state.messages.is_empty());
    assert!(!state.is_pending());
}

#[test]
fn begin_submit_while_pending_is_noop() {
    let mut state = state_with_input("first");
    assert!(state.begin_submit().is_some());

    state.set_input("second".to_owned());
    assert!(!state.can_submit());
    assert!(state.begin_submit().is_none());
    assert_eq!(state.messages.len(), 1);
    assert!(state.is_pending());
}

// =============================================================
// complete_submit
// =============================================================

#[test]
fn complete_submit_success_appends_one_bot_message_and_resets() {
    let mut state = state_with_input("q");
    state.begin_submit();

    assert!(state.complete_submit(Ok(json!({ "answer": "3 cases" }))));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].sender, Sender::Bot);
    assert_eq!(state.messages[1].text, "3 cases");
    assert!(state.input.is_empty());
    assert_eq!(state.phase, ConversationPhase::Idle);
}

#[test]
fn complete_submit_failure_appends_error_message_and_resets() {
    let mut state = state_with_input("q");
    state.begin_submit();

    assert!(state.complete_submit(Err("bot request failed: 500".to_owned())));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].sender, Sender::Bot);
    assert_eq!(state.messages[1].text, REQUEST_FAILED_TEXT);
    assert!(state.messages[1].data.is_none());
    assert!(state.input.is_empty());
    assert!(!state.is_pending());
}

#[test]
fn complete_submit_without_pending_request_is_ignored() {
    let mut state = state_with_input("draft");
    assert!(!state.complete_submit(Ok(json!({ "answer": "stray" }))));
    assert!(state.messages.is_empty());
    assert_eq!(state.input, "draft");
}

#[test]
fn second_completion_for_one_submission_is_ignored() {
    let mut state = state_with_input("q");
    state.begin_submit();
    assert!(state.complete_submit(Ok(json!({ "answer": "a" }))));
    assert!(!state.complete_submit(Err("late".to_owned())));
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn resubmission_after_completion_is_accepted() {
    let mut state = state_with_input("one");
    state.begin_submit();
    state.complete_submit(Err("down".to_owned()));

    state.set_input("two".to_owned());
    assert_eq!(state.begin_submit().as_deref(), Some("two"));
    state.complete_submit(Ok(json!({ "answer": "ok" })));

    let senders: Vec<Sender> = state.messages.iter().map(|m| m.sender).collect();
    assert_eq!(senders, vec![Sender::User, Sender::Bot, Sender::User, Sender::Bot]);
}

#[test]
fn message_ids_are_unique() {
    let mut state = state_with_input("q");
    state.begin_submit();
    state.complete_submit(Ok(json!({ "answer": "a" })));
    assert_ne!(state.messages[0].id, state.messages[1].id);
}

#[test]
fn identical_exchanges_keep_distinct_render_keys() {
    let mut state = ChatState::default();
    for _ in 0..2 {
        state.set_input("same".to_owned());
        state.begin_submit();
        state.complete_submit(Ok(json!({ "answer": "same" })));
    }
    let texts: Vec<_> = state.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["same", "same", "same", "same"]);

    let mut ids: Vec<_> = state.messages.iter().map(|m| m.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn set_input_leaves_transcript_untouched() {
    let mut state = state_with_input("first");
    state.begin_submit();
    state.complete_submit(Ok(json!({ "answer": "a" })));
    let before = state.messages.clone();

    state.set_input("t".to_owned());
    state.set_input("ty".to_owned());
    state.set_input("typing".to_owned());

    assert_eq!(state.messages, before);
    assert_eq!(state.input, "typing");
}

// =============================================================
// interpret_reply
// =============================================================

#[test]
fn interpret_reply_uses_answer_and_db_result() {
    let reply = interpret_reply(&json!({ "answer": "3 cases", "db_result": [{ "id": 1 }] }));
    assert_eq!(reply.text, "3 cases");
    assert_eq!(reply.data, Some(vec![json!({ "id": 1 })]));
}

#[test]
fn interpret_reply_bare_array_uses_default_text() {
    let reply = interpret_reply(&json!([{ "x": 1 }]));
    assert_eq!(reply.text, DEFAULT_REPLY_TEXT);
    assert_eq!(reply.data, Some(vec![json!({ "x": 1 })]));
}

#[test]
fn interpret_reply_db_result_without_answer_uses_default_text() {
    let reply = interpret_reply(&json!({ "db_result": [{ "cnt": 4 }] }));
    assert_eq!(reply.text, DEFAULT_REPLY_TEXT);
    assert_eq!(reply.data, Some(vec![json!({ "cnt": 4 })]));
}

#[test]
fn interpret_reply_string_db_result_is_not_data() {
    let reply = interpret_reply(&json!({ "answer": "no rows", "db_result": "DB 결과 없음" }));
    assert_eq!(reply.text, "no rows");
    assert!(reply.data.is_none());
}

#[test]
fn interpret_reply_unrecognized_shape_falls_back_to_pretty_json() {
    let body = json!({ "detail": "not ready" });
    let reply = interpret_reply(&body);
    assert_eq!(reply.text, "{\n  \"detail\": \"not ready\"\n}");
    assert!(reply.data.is_none());
}

#[test]
fn interpret_reply_non_string_answer_is_ignored() {
    let reply = interpret_reply(&json!({ "answer": 42 }));
    assert_eq!(reply.text, "{\n  \"answer\": 42\n}");
    assert!(reply.data.is_none());
}

#[test]
fn has_records_requires_non_empty_payload() {
    let mut state = state_with_input("q");
    state.begin_submit();
    state.complete_submit(Ok(json!({ "answer": "none", "db_result": [] })));
    let bot = &state.messages[1];
    assert_eq!(bot.data, Some(Vec::new()));
    assert!(!bot.has_records());

    state.set_input("q2".to_owned());
    state.begin_submit();
    state.complete_submit(Ok(json!({ "answer": "3 cases", "db_result": [{ "id": 1 }] })));
    assert!(state.messages[3].has_records());
}

#[test]
fn sender_css_modifiers() {
    assert_eq!(Sender::User.as_str(), "user");
    assert_eq!(Sender::Bot.as_str(), "bot");
}
