//! Error taxonomy for handlers and its translation into responses.
//!
//! # Design Decisions
//! - Exactly two shapes: a deliberate structured failure and an unhandled one
//! - One `IntoResponse` impl decides what the client sees for both
//! - Unhandled errors never leak their message to the client

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Body sent for every unhandled error.
pub const UNHANDLED_BODY: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum AppError {
    /// Raised on purpose with an explicit status and detail.
    #[error("{status}: {message}")]
    Structured { status: StatusCode, message: String },

    /// Anything nobody handled; surfaces as a generic 500.
    #[error("unhandled error: {0}")]
    Unhandled(#[source] BoxError),
}

impl AppError {
    pub fn structured(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Structured {
            status,
            message: message.into(),
        }
    }

    pub fn unhandled(err: impl Into<BoxError>) -> Self {
        Self::Unhandled(err.into())
    }

    /// Status the client will receive.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Structured { status, .. } => *status,
            Self::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::unhandled(err)
    }
}

impl From<InvalidValue> for AppError {
    fn from(err: InvalidValue) -> Self {
        Self::unhandled(err)
    }
}

/// Application-level failure with no dedicated handling.
#[derive(Debug, Error)]
#[error("value error")]
pub struct InvalidValue;

#[derive(Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Structured { status, message } => {
                (status, Json(ErrorBody { detail: &message })).into_response()
            }
            Self::Unhandled(source) => {
                tracing::error!(error = %source, "Unhandled error while serving request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    UNHANDLED_BODY,
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn structured_error_renders_detail() {
        let err = AppError::structured(StatusCode::INTERNAL_SERVER_ERROR, "This is an error 500");
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        assert_eq!(
            body_string(response).await,
            r#"{"detail":"This is an error 500"}"#
        );
    }

    #[tokio::test]
    async fn structured_error_keeps_its_status() {
        let response = AppError::structured(StatusCode::IM_A_TEAPOT, "short and stout").into_response();
        assert_eq!(response.status(), StatusCode::IM_A_TEAPOT);
    }

    #[tokio::test]
    async fn unhandled_error_hides_source() {
        let err = AppError::from(InvalidValue);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response).await;
        assert_eq!(body, UNHANDLED_BODY);
        assert!(!body.contains("value error"));
    }
}
