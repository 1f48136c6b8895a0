#![allow(dead_code)]

mod mocks;

pub use mocks::{FakeClock, MockPublicIpFetcher};

use digkit_application::services::PublicIpResolver;
use digkit_domain::config::PublicIpConfig;
use std::sync::Arc;

pub const V4_PRIMARY: &str = "https://v4-primary.test";
pub const V4_SECONDARY: &str = "https://v4-secondary.test";
pub const V6_PRIMARY: &str = "https://v6-primary.test";
pub const V6_SECONDARY: &str = "https://v6-secondary.test";

pub fn test_config() -> PublicIpConfig {
    PublicIpConfig {
        ipv4_endpoints: vec![V4_PRIMARY.to_string(), V4_SECONDARY.to_string()],
        ipv6_endpoints: vec![V6_PRIMARY.to_string(), V6_SECONDARY.to_string()],
        timeout_secs: 1,
        cache_ttl_secs: 300,
    }
}

pub fn make_resolver(
    fetcher: Arc<MockPublicIpFetcher>,
    clock: Arc<FakeClock>,
) -> PublicIpResolver {
    PublicIpResolver::new(fetcher, clock, &test_config())
}
