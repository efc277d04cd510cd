//! Configuration loading from the process environment.

use std::net::SocketAddr;
use thiserror::Error;

use crate::config::schema::{local_authority, ServiceConfig, DEFAULT_EXPOSE_PORT};
use crate::config::validation::{validate_config, ValidationError};

pub const EXPOSE_PORT: &str = "EXPOSE_PORT";
pub const TARGET_ONE_SVC: &str = "TARGET_ONE_SVC";
pub const TARGET_TWO_SVC: &str = "TARGET_TWO_SVC";
pub const TIME_BOMB: &str = "TIME_BOMB";
pub const METRICS_ADDRESS: &str = "METRICS_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid EXPOSE_PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid METRICS_ADDRESS {value:?}: {source}")]
    InvalidMetricsAddress {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from the process environment.
pub fn from_env() -> Result<ServiceConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Load and validate configuration from an arbitrary variable source.
pub fn from_lookup<F>(lookup: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let expose_port = match lookup(EXPOSE_PORT) {
        Some(value) => value
            .trim()
            .parse::<u16>()
            .map_err(|source| ConfigError::InvalidPort { value, source })?,
        None => DEFAULT_EXPOSE_PORT,
    };

    let target_one_svc = lookup(TARGET_ONE_SVC).unwrap_or_else(|| local_authority(expose_port));
    let target_two_svc = lookup(TARGET_TWO_SVC).unwrap_or_else(|| local_authority(expose_port));

    let time_bomb = lookup(TIME_BOMB).map(|v| parse_flag(&v)).unwrap_or(false);

    let metrics_address = match lookup(METRICS_ADDRESS).filter(|v| !v.trim().is_empty()) {
        Some(value) => Some(
            value
                .trim()
                .parse::<SocketAddr>()
                .map_err(|source| ConfigError::InvalidMetricsAddress { value, source })?,
        ),
        None => None,
    };

    let config = ServiceConfig {
        expose_port,
        target_one_svc,
        target_two_svc,
        time_bomb,
        metrics_address,
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Only a case-insensitive `"true"` (surrounding whitespace ignored) enables a flag.
pub fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
