use digkit_application::ports::Clock;
use digkit_application::services::PublicIpResolver;
use digkit_application::use_cases::HandleDnsQueryUseCase;
use digkit_domain::Config;
use digkit_infrastructure::system::{HttpPublicIpFetcher, SystemClock};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub public_ips: Arc<PublicIpResolver>,
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> Self {
        info!(
            ipv4_endpoints = config.public_ip.ipv4_endpoints.len(),
            ipv6_endpoints = config.public_ip.ipv6_endpoints.len(),
            cache_ttl_secs = config.public_ip.cache_ttl_secs,
            "Initializing DNS services"
        );

        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
        let public_ips = Arc::new(PublicIpResolver::new(
            Arc::new(HttpPublicIpFetcher::new()),
            clock.clone(),
            &config.public_ip,
        ));
        let handler_use_case = Arc::new(HandleDnsQueryUseCase::new(public_ips.clone(), clock));

        Self {
            public_ips,
            handler_use_case,
        }
    }

    /// Fills the public IP cache in the background so the first `ip` query
    /// does not pay for the lookup.
    pub fn warm_public_ips(&self) {
        let public_ips = self.public_ips.clone();
        tokio::spawn(async move {
            public_ips.refresh().await;
        });
    }
}
