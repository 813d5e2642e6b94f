//! Runtime configuration for the proxy.

use thiserror::Error;

/// Default upstream base URL (TMDb v3 API).
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Fixed locale tag sent with every search request.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Default timeout for outbound calls, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("api key must not be empty")]
    EmptyApiKey,

    #[error("invalid base url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

/// Validated proxy configuration. The credential is injected at startup
/// (CLI flag or environment), never embedded in source.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    pub api_key: String,
    pub base_url: String,
    pub language: String,
    pub request_timeout_secs: u64,
}

impl ProxyConfig {
    pub fn new(
        api_key: String,
        base_url: String,
        request_timeout_secs: u64,
    ) -> Result<Self, ConfigError> {
        if api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if request_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        url::Url::parse(&base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout_secs,
        })
    }
}
