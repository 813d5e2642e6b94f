use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;

pub mod common;
mod credits;
mod search;

#[cfg(test)]
pub(crate) mod test_util;

pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Proxy
        .route("/api/search", get(search::search_movies))
        .route("/api/credits", get(credits::movie_credits))
        // Health
        .route("/healthz", get(|| async { "ok" }))
        .with_state(state)
}
