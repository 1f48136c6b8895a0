use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicIpConfig {
    /// Tried in order; the first body that parses as an IPv4 literal wins.
    #[serde(default = "default_ipv4_endpoints")]
    pub ipv4_endpoints: Vec<String>,

    #[serde(default = "default_ipv6_endpoints")]
    pub ipv6_endpoints: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl PublicIpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for PublicIpConfig {
    fn default() -> Self {
        Self {
            ipv4_endpoints: default_ipv4_endpoints(),
            ipv6_endpoints: default_ipv6_endpoints(),
            timeout_secs: default_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_ipv4_endpoints() -> Vec<String> {
    vec![
        "https://ipv4.icanhazip.com".to_string(),
        "https://api.ipify.org".to_string(),
        "https://v4.ident.me".to_string(),
        "https://ipecho.net/plain".to_string(),
    ]
}

fn default_ipv6_endpoints() -> Vec<String> {
    vec![
        "https://ipv6.icanhazip.com".to_string(),
        "https://v6.ident.me".to_string(),
    ]
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_cache_ttl_secs() -> u64 {
    300
}
