//! Synthetic HTTP endpoints for exercising observability and load-testing
//! tooling.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client ──▶ request ID ──▶ trace span ──▶ CORS ──▶ router ──▶ handlers
//!                                                        │          │
//!                                                     metrics    workload / chain
//!                                                                   │
//!                                                          downstream services
//! ```
//!
//! Every handler is stateless; the only shared data is the immutable
//! [`ServiceConfig`] read from the environment at startup.

pub mod chain;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod workload;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
