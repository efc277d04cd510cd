//! Endpoint handlers.
//!
//! Handlers are independent and share nothing but the read-only
//! [`AppState`]. Sleeps suspend only the current request.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::http::error::{AppError, InvalidValue};
use crate::http::server::AppState;
use crate::workload;

pub const IO_TASK_BODY: &str = "IO bound task finish!";
pub const CPU_TASK_BODY: &str = "CPU bound task finish!";
pub const ERROR_DETAIL: &str = "This is an error 500";

/// `{"path": ...}` body shared by several endpoints.
#[derive(Debug, Serialize)]
pub struct PathBody {
    pub path: &'static str,
}

/// `GET /`: one log line per severity, headers included.
pub async fn root(headers: HeaderMap) -> Json<Value> {
    tracing::info!(headers = ?headers, "Request headers");
    tracing::debug!("Debugging log");
    tracing::info!("Info log");
    tracing::warn!("Hey, This is a warning!");
    tracing::error!("Oops! We have an Error");
    tracing::error!(severity = "critical", "Critical error. Please fix this!");
    Json(json!({ "Hello": "World" }))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /io_task`: fixed one second wait.
pub async fn io_task() -> Json<&'static str> {
    tokio::time::sleep(workload::IO_DELAY).await;
    tracing::info!("io task");
    Json(IO_TASK_BODY)
}

/// `GET /cpu_task`: short busy loop, run inline.
pub async fn cpu_task() -> Json<&'static str> {
    workload::burn_cpu();
    tracing::info!("cpu task");
    Json(CPU_TASK_BODY)
}

/// `GET /random_status`
pub async fn random_status() -> (StatusCode, Json<PathBody>) {
    let status = workload::pick_status(&mut rand::thread_rng());
    tracing::info!(status = status.as_u16(), "random status");
    (
        status,
        Json(PathBody {
            path: "/random_status",
        }),
    )
}

/// `GET /random_sleep`
pub async fn random_sleep() -> Json<PathBody> {
    let delay = workload::pick_sleep(&mut rand::thread_rng());
    tokio::time::sleep(delay).await;
    tracing::info!(secs = delay.as_secs(), "random sleep");
    Json(PathBody {
        path: "/random_sleep",
    })
}

/// `GET /chain`: answers 200 only when every hop completed.
pub async fn chain(State(state): State<AppState>) -> Result<Json<PathBody>, AppError> {
    tracing::info!("Chain Start");
    state.chain.run(&state.client).await?;
    tracing::info!("Chain Finished");
    Ok(Json(PathBody { path: "/chain" }))
}

/// `GET /error`: deliberate structured failure.
pub async fn error() -> Result<(), AppError> {
    tracing::error!(severity = "critical", "Critical error. Please fix this!");
    Err(AppError::structured(
        StatusCode::INTERNAL_SERVER_ERROR,
        ERROR_DETAIL,
    ))
}

/// `GET /error_test`: failure nobody handles.
pub async fn error_test() -> Result<(), AppError> {
    tracing::error!("got error!!!!");
    Err(InvalidValue.into())
}

/// Fallback for unknown paths.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
}
