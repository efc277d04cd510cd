//! Configuration schema definitions.

use std::net::{Ipv4Addr, SocketAddr};

/// Port used when `EXPOSE_PORT` is not set.
pub const DEFAULT_EXPOSE_PORT: u16 = 8000;

/// Process-wide configuration, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Listening port. Also the port of the first `/chain` hop.
    pub expose_port: u16,

    /// `host:port` of the service called for the second `/chain` hop.
    pub target_one_svc: String,

    /// `host:port` of the service called for the third `/chain` hop.
    pub target_two_svc: String,

    /// Recognized but not wired to any behavior.
    pub time_bomb: bool,

    /// Prometheus scrape endpoint; disabled when `None`.
    pub metrics_address: Option<SocketAddr>,
}

impl ServiceConfig {
    /// Configuration with every target defaulting to this service itself.
    pub fn with_port(expose_port: u16) -> Self {
        let local = local_authority(expose_port);
        Self {
            expose_port,
            target_one_svc: local.clone(),
            target_two_svc: local,
            time_bomb: false,
            metrics_address: None,
        }
    }

    /// Address the HTTP listener binds to (all interfaces).
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.expose_port))
    }

    /// `host:port` under which this service reaches itself.
    pub fn self_authority(&self) -> String {
        local_authority(self.expose_port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::with_port(DEFAULT_EXPOSE_PORT)
    }
}

pub(crate) fn local_authority(port: u16) -> String {
    format!("localhost:{}", port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_targets_at_self() {
        let config = ServiceConfig::default();
        assert_eq!(config.expose_port, 8000);
        assert_eq!(config.target_one_svc, "localhost:8000");
        assert_eq!(config.target_two_svc, "localhost:8000");
        assert!(!config.time_bomb);
        assert!(config.metrics_address.is_none());
    }

    #[test]
    fn bind_address_uses_all_interfaces() {
        let config = ServiceConfig::with_port(9100);
        assert_eq!(config.bind_address().to_string(), "0.0.0.0:9100");
        assert_eq!(config.self_authority(), "localhost:9100");
    }
}
