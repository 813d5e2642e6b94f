use crate::config::ProxyConfig;
use crate::proxy::UpstreamClient;

/// Shared application state. Immutable after startup; handlers share it
/// through an `Arc` and hold nothing else between requests.
pub struct AppState {
    pub config: ProxyConfig,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> Self {
        let upstream = UpstreamClient::new(&config);
        Self { config, upstream }
    }
}
