mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Local `.env` is optional; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let bot = services::bot::HttpBotBackend::new(&config).expect("bot upstream client init failed");
    tracing::info!(upstream = bot.endpoint(), "bot upstream configured");

    let state = state::AppState::new(Arc::new(bot));

    let app = routes::app(state).expect("router init failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "ward-monitor listening");
    axum::serve(listener, app).await.expect("server failed");
}
