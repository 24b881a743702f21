//! Forwarding client for the remote answering service.
//!
//! DESIGN
//! ======
//! The answering service (question → NER → SQL → database rows) runs as a
//! separate process. This module relays `{ "question": ... }` to it and hands
//! back the JSON body untouched; interpreting the body's shape is the
//! browser's job.
//!
//! `BotBackend` is the seam route handlers depend on, so handlers can be
//! exercised without a live upstream.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;

/// Path appended to `BOT_UPSTREAM_URL` for questions.
pub const UPSTREAM_BOT_PATH: &str = "/bot";

/// Upper bound on upstream error bodies kept for logging.
const MAX_ERROR_BODY_CHARS: usize = 512;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    /// The question was blank after trimming.
    #[error("question is empty")]
    EmptyQuestion,

    /// The HTTP request to the upstream failed (connect, timeout, I/O).
    #[error("upstream request failed: {0}")]
    UpstreamRequest(String),

    /// The upstream returned a non-success HTTP status.
    #[error("upstream response error: status {status}")]
    UpstreamStatus { status: u16, body: String },

    /// The upstream body was not valid JSON.
    #[error("upstream response parse failed: {0}")]
    UpstreamParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Body of `POST /api/bot`, forwarded upstream as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotQuestion {
    pub question: String,
}

// =============================================================================
// BACKEND
// =============================================================================

#[async_trait]
pub trait BotBackend: Send + Sync {
    /// Ask one question and return the upstream JSON body.
    async fn ask(&self, question: &BotQuestion) -> Result<serde_json::Value, BotError>;
}

/// `BotBackend` that POSTs to the configured upstream over HTTP.
pub struct HttpBotBackend {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpBotBackend {
    /// Build the forwarding client from server config.
    ///
    /// # Errors
    ///
    /// Returns [`BotError::HttpClientBuild`] if the reqwest client cannot be built.
    pub fn new(config: &ServerConfig) -> Result<Self, BotError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| BotError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: upstream_endpoint(&config.bot_upstream_url) })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl BotBackend for HttpBotBackend {
    async fn ask(&self, question: &BotQuestion) -> Result<serde_json::Value, BotError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(question)
            .send()
            .await
            .map_err(|e| BotError::UpstreamRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BotError::UpstreamRequest(e.to_string()))?;

        if !status.is_success() {
            return Err(BotError::UpstreamStatus { status: status.as_u16(), body: truncate_body(&text) });
        }

        parse_body(&text)
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Full upstream URL for questions given the configured base.
pub fn upstream_endpoint(base_url: &str) -> String {
    format!("{}{UPSTREAM_BOT_PATH}", base_url.trim_end_matches('/'))
}

/// Reject blank questions before they reach the upstream.
///
/// # Errors
///
/// Returns [`BotError::EmptyQuestion`] when the question is blank.
pub fn validate_question(question: &BotQuestion) -> Result<(), BotError> {
    if question.question.trim().is_empty() {
        return Err(BotError::EmptyQuestion);
    }
    Ok(())
}

fn parse_body(text: &str) -> Result<serde_json::Value, BotError> {
    serde_json::from_str(text).map_err(|e| BotError::UpstreamParse(e.to_string()))
}

fn truncate_body(text: &str) -> String {
    text.chars().take(MAX_ERROR_BODY_CHARS).collect()
}

#[cfg(test)]
#[path = "bot_test.rs"]
mod tests;
