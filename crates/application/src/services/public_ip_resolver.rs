use arc_swap::ArcSwapOption;
use digkit_domain::config::PublicIpConfig;
use digkit_domain::PublicIps;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use crate::ports::{Clock, PublicIpFetcher};

struct CachedPublicIps {
    ips: PublicIps,
    fetched_at: Instant,
}

/// Looks up this host's public addresses and keeps them for a TTL.
///
/// The cache is a single snapshot swapped atomically, so readers always see
/// an IPv4/IPv6 pair from the same refresh. Refreshes are not serialized:
/// queries that find the cache stale at the same time each fetch, and the
/// last one to finish wins.
pub struct PublicIpResolver {
    fetcher: Arc<dyn PublicIpFetcher>,
    clock: Arc<dyn Clock>,
    ipv4_endpoints: Vec<String>,
    ipv6_endpoints: Vec<String>,
    timeout: Duration,
    ttl: Duration,
    cache: ArcSwapOption<CachedPublicIps>,
}

impl PublicIpResolver {
    pub fn new(
        fetcher: Arc<dyn PublicIpFetcher>,
        clock: Arc<dyn Clock>,
        config: &PublicIpConfig,
    ) -> Self {
        Self {
            fetcher,
            clock,
            ipv4_endpoints: config.ipv4_endpoints.clone(),
            ipv6_endpoints: config.ipv6_endpoints.clone(),
            timeout: config.timeout(),
            ttl: config.cache_ttl(),
            cache: ArcSwapOption::empty(),
        }
    }

    /// Returns the cached addresses while they are fresh.
    pub fn cached(&self) -> Option<PublicIps> {
        let now = self.clock.instant();
        let entry = self.cache.load();
        entry
            .as_ref()
            .filter(|entry| now.saturating_duration_since(entry.fetched_at) < self.ttl)
            .map(|entry| entry.ips)
    }

    /// Never fails: endpoints that error, time out or return garbage are
    /// skipped, and loopback addresses stand in when every endpoint fails.
    pub async fn get_public_ips(&self) -> PublicIps {
        if let Some(ips) = self.cached() {
            return ips;
        }
        self.refresh().await
    }

    #[instrument(skip(self))]
    pub async fn refresh(&self) -> PublicIps {
        let started_at = self.clock.instant();
        info!("Fetching fresh public IP addresses");

        let ipv4 = self
            .first_valid::<Ipv4Addr>(&self.ipv4_endpoints, "IPv4")
            .await
            .unwrap_or_else(|| {
                warn!(fallback = %PublicIps::FALLBACK_IPV4, "Using IPv4 fallback");
                PublicIps::FALLBACK_IPV4
            });

        let ipv6 = self
            .first_valid::<Ipv6Addr>(&self.ipv6_endpoints, "IPv6")
            .await
            .unwrap_or_else(|| {
                warn!(fallback = %PublicIps::FALLBACK_IPV6, "Using IPv6 fallback");
                PublicIps::FALLBACK_IPV6
            });

        let ips = PublicIps::new(ipv4, ipv6);
        self.cache.store(Some(Arc::new(CachedPublicIps {
            ips,
            fetched_at: started_at,
        })));

        info!(ipv4 = %ips.ipv4, ipv6 = %ips.ipv6, "Public IP addresses cached");
        ips
    }

    /// First endpoint body that parses as an address of the wanted family.
    async fn first_valid<T: FromStr>(
        &self,
        endpoints: &[String],
        family: &'static str,
    ) -> Option<T> {
        for endpoint in endpoints {
            let body =
                match tokio::time::timeout(self.timeout, self.fetcher.fetch(endpoint, self.timeout))
                    .await
                {
                    Ok(Ok(body)) => body,
                    Ok(Err(e)) => {
                        warn!(endpoint = %endpoint, family, error = %e, "Public IP lookup failed");
                        continue;
                    }
                    Err(_) => {
                        warn!(endpoint = %endpoint, family, "Public IP lookup timed out");
                        continue;
                    }
                };

            let candidate = body.trim();
            if let Ok(address) = candidate.parse::<T>() {
                debug!(endpoint = %endpoint, family, address = %candidate, "Public IP fetched");
                return Some(address);
            }

            debug!(endpoint = %endpoint, family, "Endpoint returned no usable address");
        }
        None
    }
}
