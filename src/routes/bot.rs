//! `POST /api/bot`: relay a chat question to the answering service.
//!
//! ERROR HANDLING
//! ==============
//! Blank questions are rejected with 400. Every upstream failure (transport,
//! timeout, non-success status, non-JSON body) maps to 502; the browser
//! treats all of them as one generic failure.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::services::bot::{self, BotError, BotQuestion};
use crate::state::AppState;

pub(crate) fn bot_error_to_status(err: &BotError) -> StatusCode {
    match err {
        BotError::EmptyQuestion => StatusCode::BAD_REQUEST,
        BotError::UpstreamRequest(_)
        | BotError::UpstreamStatus { .. }
        | BotError::UpstreamParse(_)
        | BotError::HttpClientBuild(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Forward the question and return the upstream JSON body verbatim.
pub async fn ask(
    State(state): State<AppState>,
    Json(body): Json<BotQuestion>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    bot::validate_question(&body).map_err(|e| bot_error_to_status(&e))?;

    let question_chars = body.question.chars().count();
    match state.bot.ask(&body).await {
        Ok(reply) => {
            tracing::info!(question_chars, "bot question answered");
            Ok(Json(reply))
        }
        Err(e) => {
            match &e {
                BotError::UpstreamStatus { status, body } => {
                    tracing::warn!(status, body = %body, "bot upstream returned error status");
                }
                other => tracing::warn!(error = %other, "bot upstream request failed"),
            }
            Err(bot_error_to_status(&e))
        }
    }
}

#[cfg(test)]
#[path = "bot_test.rs"]
mod tests;
