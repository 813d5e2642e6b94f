use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use bytes::Bytes;

use super::common::{error_json, relay_json};
use crate::state::AppState;

/// Minimum trimmed query length before upstream is consulted. Shorter
/// queries are defined to have no results, not treated as errors.
const MIN_QUERY_CHARS: usize = 2;

/// `GET /api/search?query=...`
///
/// Forwards to the upstream title search, first page only, fixed locale.
/// Duplicate query keys: last value wins.
pub async fn search_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let query = params.get("query").map(String::as_str).unwrap_or("");

    if query.trim().chars().count() < MIN_QUERY_CHARS {
        return relay_json(Bytes::from_static(br#"{"results": []}"#));
    }

    match state.upstream.search_movies(query).await {
        Ok(upstream) => {
            if !upstream.status.is_success() {
                tracing::warn!(
                    status = %upstream.status,
                    "upstream search error relayed as 200"
                );
            }
            relay_json(upstream.body)
        }
        Err(e) => {
            tracing::error!("search request to upstream failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
