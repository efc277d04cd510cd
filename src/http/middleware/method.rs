//! GET-only guard for routed paths.
//!
//! Axum answers `HEAD` with the `GET` handler and replies to other methods
//! with an empty 405. Routed paths here accept `GET` alone, and every other
//! method gets the same JSON 405 as a failed handler would.

use axum::{
    extract::Request,
    http::{header::ALLOW, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::error::AppError;

pub const METHOD_NOT_ALLOWED_DETAIL: &str = "Method Not Allowed";

/// Route-level middleware; unknown paths never reach it and stay 404.
pub async fn get_only(req: Request, next: Next) -> Response {
    if req.method() == Method::GET {
        return next.run(req).await;
    }

    tracing::debug!(method = %req.method(), path = %req.uri().path(), "Method not allowed");
    (
        [(ALLOW, "GET")],
        AppError::structured(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_DETAIL),
    )
        .into_response()
}
