//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read & parse raw values, apply defaults)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!     → shared via Arc with the handlers that need it
//! ```
//!
//! # Design Decisions
//! - Read once at startup, never reloaded
//! - Every variable has a default so an empty environment is valid
//! - Parsing errors and semantic errors are reported separately

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{from_env, from_lookup, ConfigError};
pub use schema::ServiceConfig;
