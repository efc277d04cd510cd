//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Every request produces:
//!     → tracing.rs (span carrying method, uri and request ID)
//!     → metrics.rs (request counter and latency histogram)
//!     → logging.rs (fmt subscriber writing log lines to stdout)
//!
//! Consumers:
//!     → Log collectors scraping stdout
//!     → Prometheus scraping METRICS_ADDRESS (when set)
//! ```

pub mod logging;
pub mod metrics;
pub mod tracing;
