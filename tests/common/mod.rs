//! Shared utilities for integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode, Uri},
    Router,
};
use demo_service::{HttpServer, ServiceConfig, Shutdown};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Ordered record of `name:path` hits across recording backends.
pub type HitLog = Arc<Mutex<Vec<String>>>;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Fully layered router for in-process requests.
pub fn app(config: ServiceConfig) -> Router {
    HttpServer::new(config).unwrap().router()
}

/// Send `GET path` through the router without a socket.
pub async fn get(app: &Router, path: &str) -> TestResponse {
    send(app, Request::get(path).body(Body::empty()).unwrap()).await
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

/// Serve the demo service on an already bound listener until the returned
/// `Shutdown` fires.
pub async fn spawn_service(listener: TcpListener, config: ServiceConfig) -> Shutdown {
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config).unwrap();
    let stop = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, stop).await;
    });
    // Let the accept loop start.
    tokio::time::sleep(Duration::from_millis(50)).await;
    shutdown
}

pub async fn local_listener() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    (listener, addr)
}

/// Backend answering every path with `status`, appending `name:path` to `log`.
pub async fn start_recording_backend(name: &'static str, status: StatusCode, log: HitLog) -> SocketAddr {
    let (listener, addr) = local_listener().await;
    let app = Router::new().fallback(move |uri: Uri| {
        let log = log.clone();
        async move {
            log.lock().unwrap().push(format!("{}:{}", name, uri.path()));
            (status, "ok")
        }
    });
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// An address on which nothing is listening.
pub async fn closed_port() -> SocketAddr {
    let (listener, addr) = local_listener().await;
    drop(listener);
    addr
}

pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
