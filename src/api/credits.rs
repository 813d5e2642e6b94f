use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::common::{error_json, relay_json};
use crate::state::AppState;

/// `GET /api/credits?id=...`
///
/// Forwards to the upstream credits resource. The id is interpolated into
/// the upstream path unvalidated; malformed ids are rejected upstream, not
/// here. Duplicate query keys: last value wins.
pub async fn movie_credits(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let id = params.get("id").map(String::as_str).unwrap_or("");

    if id.is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "movie_id required");
    }

    match state.upstream.movie_credits(id).await {
        Ok(upstream) => {
            if !upstream.status.is_success() {
                tracing::warn!(
                    status = %upstream.status,
                    movie_id = id,
                    "upstream credits error relayed as 200"
                );
            }
            relay_json(upstream.body)
        }
        Err(e) => {
            tracing::error!("credits request to upstream failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
