//! Client configuration.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use log::warn;

/// Default backend URL for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Default request timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;

const DEFAULT_CREDENTIALS_FILE: &str = "foliotrack/credentials.json";

/// Runtime configuration for the client context.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the tracker REST API.
    pub base_url: String,
    /// Timeout applied to every HTTP request.
    pub timeout: Duration,
    /// Location of the durable credentials file.
    pub credentials_path: PathBuf,
    /// Optional base64 32-byte key enabling credential encryption at rest.
    pub credentials_key: Option<String>,
}

impl ClientConfig {
    /// Builds the configuration from `FT_*` environment variables, falling
    /// back to development defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let base_url =
            env::var("FT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        let timeout_ms = env::var("FT_API_TIMEOUT_MS")
            .ok()
            .map(|raw| parse_timeout_ms(&raw))
            .unwrap_or(DEFAULT_API_TIMEOUT_MS);
        let credentials_path = env::var("FT_CREDENTIALS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CREDENTIALS_FILE));
        let credentials_key = env::var("FT_CREDENTIALS_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
            credentials_path,
            credentials_key,
        }
    }

    /// Configuration pointing at `base_url` with defaults for the rest.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_millis(DEFAULT_API_TIMEOUT_MS),
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            credentials_key: None,
        }
    }
}

fn parse_timeout_ms(raw: &str) -> u64 {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => value,
        _ => {
            warn!(
                "Ignoring invalid FT_API_TIMEOUT_MS value '{}', using {}ms",
                raw, DEFAULT_API_TIMEOUT_MS
            );
            DEFAULT_API_TIMEOUT_MS
        }
    }
}
