//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Transport errors,
//! non-success statuses, and unreadable bodies all collapse into one error
//! string; the chat state treats every failure the same way.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

/// Path of the answering-service proxy.
pub const BOT_ENDPOINT: &str = "/api/bot";

/// Request body for `POST /api/bot`.
#[derive(Debug, Serialize)]
pub struct BotQuestion<'a> {
    pub question: &'a str,
}

#[cfg(any(test, feature = "hydrate"))]
fn bot_request_failed_message(status: u16) -> String {
    format!("bot request failed: {status}")
}

/// Ask the answering service a question via `POST /api/bot`.
///
/// The response body is returned as untyped JSON; its shape is interpreted by
/// [`crate::state::chat::interpret_reply`].
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body is not JSON.
pub async fn ask_bot(question: &str) -> Result<serde_json::Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = BotQuestion { question };
        let resp = gloo_net::http::Request::post(BOT_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(bot_request_failed_message(resp.status()));
        }
        resp.json::<serde_json::Value>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = question;
        Err("not available on server".to_owned())
    }
}
