use axum::http::{header, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::Serialize;

/// Error body shape shared by the 400 and 500 branches.
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Fixed headers carried by every proxy response, on every branch. Set
/// explicitly rather than via a CORS layer so they are present even when
/// the request has no Origin header.
fn fixed_headers() -> [(HeaderName, &'static str); 2] {
    [
        (header::CONTENT_TYPE, "application/json"),
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    ]
}

/// 200 with the given bytes relayed verbatim.
pub fn relay_json(body: Bytes) -> Response {
    (StatusCode::OK, fixed_headers(), body).into_response()
}

/// Locally constructed one-field error object.
pub fn error_json(status: StatusCode, message: impl Into<String>) -> Response {
    let body = serde_json::to_vec(&ErrorBody {
        error: message.into(),
    })
    .unwrap_or_default();
    (status, fixed_headers(), body).into_response()
}

pub async fn request_logger(
    req: axum::extract::Request,
    next: axum::middleware::Next,
) -> axum::response::Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = std::time::Instant::now();
    let response = next.run(req).await;
    let duration = start.elapsed();
    tracing::info!(
        "{} {} - status: {}, latency: {}ms",
        method,
        uri,
        response.status(),
        duration.as_millis()
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_json_shape_and_headers() {
        let response = error_json(StatusCode::BAD_REQUEST, "movie_id required");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }

    #[test]
    fn test_error_message_is_escaped() {
        let body = serde_json::to_vec(&ErrorBody {
            error: "bad \"quote\"".into(),
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"], "bad \"quote\"");
    }

    #[test]
    fn test_relay_json_preserves_bytes() {
        let response = relay_json(Bytes::from_static(b"{\"page\":1}"));
        assert_eq!(response.status(), StatusCode::OK);
    }
}
