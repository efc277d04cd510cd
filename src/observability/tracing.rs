//! Per-request spans for `tower_http::trace::TraceLayer`.

use axum::{body::Body, http::Request};
use tracing::Span;

use crate::http::request::request_id_of;

/// Span opened around each request; children inherit the request ID.
pub fn make_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id_of(request),
    )
}
