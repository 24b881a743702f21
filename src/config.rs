//! Server configuration parsed from environment variables.

use std::num::ParseIntError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BOT_UPSTREAM_URL: &str = "http://127.0.0.1:8001";
pub const DEFAULT_BOT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_BOT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A numeric variable was set but could not be parsed.
    #[error("invalid {var}: {source}")]
    InvalidNumber {
        var: &'static str,
        #[source]
        source: ParseIntError,
    },

    /// The upstream URL is not an absolute http(s) URL.
    #[error("invalid BOT_UPSTREAM_URL '{0}': expected http:// or https://")]
    InvalidUpstreamUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the answering service, without trailing slash.
    pub bot_upstream_url: String,
    pub timeouts: UpstreamTimeouts,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BOT_UPSTREAM_URL`: default `http://127.0.0.1:8001`
    /// - `BOT_REQUEST_TIMEOUT_SECS`: default 120
    /// - `BOT_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env_parse("PORT", DEFAULT_PORT)?;

        let bot_upstream_url = std::env::var("BOT_UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_BOT_UPSTREAM_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        if !(bot_upstream_url.starts_with("http://") || bot_upstream_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUpstreamUrl(bot_upstream_url));
        }

        let timeouts = UpstreamTimeouts {
            request_secs: env_parse("BOT_REQUEST_TIMEOUT_SECS", DEFAULT_BOT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse("BOT_CONNECT_TIMEOUT_SECS", DEFAULT_BOT_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { port, bot_upstream_url, timeouts })
    }
}

fn env_parse<T>(var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    match std::env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|source| ConfigError::InvalidNumber { var, source }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
