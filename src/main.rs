use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tmdb_proxy::api::{build_routes, common};
use tmdb_proxy::config::{ProxyConfig, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS};
use tmdb_proxy::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// TMDb API key. Required; sourced from the environment in deployment.
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Upstream base URL (overridable for testing against a mock upstream)
    #[arg(long, env = "TMDB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Timeout for outbound calls, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    request_timeout: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = ProxyConfig::new(args.api_key, args.base_url, args.request_timeout)
        .expect("Invalid configuration");

    tracing::info!(
        base_url = %config.base_url,
        timeout_secs = config.request_timeout_secs,
        "Configuration loaded"
    );

    let state = Arc::new(AppState::new(config));

    let app = build_routes(state).layer(axum::middleware::from_fn(common::request_logger));

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
