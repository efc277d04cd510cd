//! Middleware applied around the handler set.

pub mod cors;
pub mod method;

pub use cors::cors_middleware;
pub use method::get_only;
