//! Client configuration.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::{
    domain::{Mode, Persona},
    infrastructure::gateway::http::CHAT_ENDPOINT_PATH,
};

/// Base URL used when none is given on the command line
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL could not be parsed
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Only http and https are supported
    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    /// A zero timeout would fail every request
    #[error("Request timeout must be at least one second")]
    ZeroTimeout,
}

/// Validated client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the Chat API, always ending with `/`
    base_url: Url,
    pub persona: Persona,
    pub mode: Mode,
    /// Per-request timeout; `None` leaves it to the transport
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Build a configuration from raw command-line values
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an http(s) URL or the
    /// timeout is zero.
    pub fn new(
        base_url: &str,
        persona: Persona,
        mode: Mode,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let mut url = Url::parse(base_url.trim()).map_err(|e| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }

        // Url::join replaces the last path segment unless the path ends with '/'
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let timeout = match timeout_secs {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Self {
            base_url: url,
            persona,
            mode,
            timeout,
        })
    }

    /// Full URL of `POST /api/chat`
    pub fn chat_endpoint(&self) -> Url {
        let mut endpoint = self.base_url.clone();
        let path = format!("{}{}", self.base_url.path(), CHAT_ENDPOINT_PATH);
        endpoint.set_path(&path);
        endpoint
    }
}
