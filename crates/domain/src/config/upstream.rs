use serde::{Deserialize, Serialize};

/// Upstream resolver configuration.
///
/// A single upstream, a single attempt per query. A query that outlives
/// `query_timeout` is abandoned, not retried.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_upstream_address")]
    pub address: String,

    #[serde(default = "default_upstream_port")]
    pub port: u16,

    /// Seconds to wait for the upstream exchange (default: 20)
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,
}

fn default_upstream_address() -> String {
    "8.8.8.8".to_string()
}

fn default_upstream_port() -> u16 {
    53
}

fn default_query_timeout() -> u64 {
    20
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: default_upstream_address(),
            port: default_upstream_port(),
            query_timeout: default_query_timeout(),
        }
    }
}
