//! Helpers for exercising the router in-process against a mock upstream.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::Router;
use bytes::Bytes;
use tower::ServiceExt;

use crate::config::ProxyConfig;
use crate::state::AppState;

pub(crate) fn test_router(base_url: &str) -> Router {
    let config = ProxyConfig::new("test-key".into(), base_url.into(), 5).unwrap();
    super::build_routes(Arc::new(AppState::new(config)))
}

pub(crate) async fn send_get(app: Router, uri: &str) -> (StatusCode, HeaderMap, Bytes) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body)
}

pub(crate) fn assert_fixed_headers(headers: &HeaderMap) {
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
