//! Ordered outbound call pipeline behind `/chain`.
//!
//! # Design Decisions
//! - Hops run strictly one after another; the next starts only once the
//!   previous response body has been fully read
//! - The first transport failure aborts the remaining hops
//! - A non-2xx status is still a completed hop
//! - No timeout, retry or cancellation

use crate::config::ServiceConfig;

/// One outbound GET in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// Label used in logs.
    pub name: &'static str,
    pub url: String,
}

/// Fixed sequence of hops derived from the configuration.
#[derive(Debug, Clone)]
pub struct Chain {
    hops: Vec<Hop>,
}

impl Chain {
    /// Self root, then target one's `/io_task`, then target two's `/cpu_task`.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let hops = vec![
            Hop {
                name: "self",
                url: format!("http://{}/", config.self_authority()),
            },
            Hop {
                name: "target_one",
                url: format!("http://{}/io_task", config.target_one_svc),
            },
            Hop {
                name: "target_two",
                url: format!("http://{}/cpu_task", config.target_two_svc),
            },
        ];
        Self { hops }
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Issue every hop in order, stopping at the first failure.
    pub async fn run(&self, client: &reqwest::Client) -> Result<(), reqwest::Error> {
        for hop in &self.hops {
            tracing::debug!(hop = hop.name, url = %hop.url, "Chain hop starting");

            let response = client.get(&hop.url).send().await.inspect_err(|e| {
                tracing::warn!(hop = hop.name, url = %hop.url, error = %e, "Chain hop failed");
            })?;
            let status = response.status();
            response.bytes().await?;

            tracing::debug!(hop = hop.name, status = %status, "Chain hop finished");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hops_follow_config_in_order() {
        let mut config = ServiceConfig::with_port(8123);
        config.target_one_svc = "one.internal:9001".into();
        config.target_two_svc = "two.internal:9002".into();

        let chain = Chain::from_config(&config);
        let urls: Vec<&str> = chain.hops().iter().map(|h| h.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "http://localhost:8123/",
                "http://one.internal:9001/io_task",
                "http://two.internal:9002/cpu_task",
            ]
        );
    }

    #[test]
    fn default_targets_loop_back_to_self() {
        let chain = Chain::from_config(&ServiceConfig::default());
        assert!(chain
            .hops()
            .iter()
            .all(|h| h.url.starts_with("http://localhost:8000/")));
    }
}
