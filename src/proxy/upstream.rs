//! Upstream client for the TMDb API.
//!
//! One `reqwest::Client` is built at startup with a bounded timeout and
//! reused for every outbound call. The credential is attached here, so
//! handlers never see it.

use bytes::Bytes;
use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ProxyConfig;

/// Outcome of a completed outbound call: upstream was reached and answered,
/// with whatever status it chose. The body is opaque bytes, never parsed.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Transport-level failure reaching upstream. Classified the same way the
/// response can fail in practice: timed out, never connected, or died while
/// the body was being read.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request timed out")]
    Timeout,

    #[error("failed to connect to upstream: {0}")]
    Connect(String),

    #[error("failed to read upstream response: {0}")]
    Body(String),

    #[error("upstream request failed: {0}")]
    Other(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            UpstreamError::Timeout
        } else if error.is_connect() {
            UpstreamError::Connect(error.to_string())
        } else if error.is_body() || error.is_decode() {
            UpstreamError::Body(error.to_string())
        } else {
            UpstreamError::Other(error.to_string())
        }
    }
}

pub struct UpstreamClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    language: String,
}

impl UpstreamClient {
    pub fn new(config: &ProxyConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            language: config.language.clone(),
        }
    }

    /// `GET {base}/search/movie` — title search, first page only.
    pub async fn search_movies(&self, query: &str) -> Result<UpstreamResponse, UpstreamError> {
        let url = format!("{}/search/movie", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("language", self.language.as_str()),
                ("page", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        Ok(UpstreamResponse { status, body })
    }

    /// `GET {base}/movie/{id}/credits` — cast and crew for one title.
    /// The id goes into the path verbatim; upstream rejects malformed ones.
    pub async fn movie_credits(&self, id: &str) -> Result<UpstreamResponse, UpstreamError> {
        let url = format!("{}/movie/{}/credits", self.base_url, id);
        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        Ok(UpstreamResponse { status, body })
    }
}
