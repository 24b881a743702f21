//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the answering-service backend behind a trait object so tests can
//! substitute a fake.

use std::sync::Arc;

use crate::services::bot::BotBackend;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub bot: Arc<dyn BotBackend>,
}

impl AppState {
    #[must_use]
    pub fn new(bot: Arc<dyn BotBackend>) -> Self {
        Self { bot }
    }
}
