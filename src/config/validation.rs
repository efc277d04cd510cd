//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (the loader handles syntax)
//! - Check that chain targets are usable `host[:port]` authorities
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::loader::{TARGET_ONE_SVC, TARGET_TWO_SVC};
use crate::config::schema::ServiceConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("EXPOSE_PORT must not be 0")]
    ZeroPort,

    #[error("{field} {value:?} is not a host[:port] address")]
    InvalidTarget { field: &'static str, value: String },
}

pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.expose_port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    for (field, value) in [
        (TARGET_ONE_SVC, &config.target_one_svc),
        (TARGET_TWO_SVC, &config.target_two_svc),
    ] {
        if !is_authority(value) {
            errors.push(ValidationError::InvalidTarget {
                field,
                value: value.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// True when `value` is a bare `host[:port]` authority. Without a port the
/// target is reached on 80.
fn is_authority(value: &str) -> bool {
    // Url::parse also rejects ports that are not a u16.
    let Ok(url) = Url::parse(&format!("http://{}", value)) else {
        return false;
    };

    url.host_str().is_some_and(|h| !h.is_empty())
        && url.username().is_empty()
        && url.password().is_none()
        && url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn accepts_host_port_forms() {
        assert!(is_authority("localhost:8000"));
        assert!(is_authority("svc-one.default.svc.cluster.local:80"));
        assert!(is_authority("10.1.2.3:8080"));
        assert!(is_authority("[::1]:8000"));
    }

    #[test]
    fn port_may_be_omitted() {
        assert!(is_authority("svc-one"));
        assert!(is_authority("localhost"));

        let mut config = ServiceConfig::default();
        config.target_one_svc = "svc-one".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn rejects_malformed_targets() {
        assert!(!is_authority(""));
        assert!(!is_authority("localhost:http"));
        assert!(!is_authority("localhost:70000"));
        assert!(!is_authority("http://localhost:8000"));
        assert!(!is_authority("localhost:8000/io_task"));
        assert!(!is_authority("user@localhost:8000"));
    }

    #[test]
    fn collects_every_error() {
        let mut config = ServiceConfig::default();
        config.expose_port = 0;
        config.target_one_svc = "nope:port".into();
        config.target_two_svc = "also/bad".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0], ValidationError::ZeroPort);
    }
}
