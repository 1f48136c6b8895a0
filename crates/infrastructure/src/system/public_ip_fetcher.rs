//! Plain-text "what is my IP" lookups over HTTP(S)
//!
//! Each endpoint answers a GET with the caller's address as the body,
//! optionally followed by whitespace. Validation of the body is left to the
//! resolver, this adapter only moves bytes.

use async_trait::async_trait;
use digkit_application::ports::PublicIpFetcher;
use digkit_domain::DomainError;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Shared client with connection pooling. Per-request timeouts override the default.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(concat!("digkit/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(2)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
});

pub struct HttpPublicIpFetcher {
    client: reqwest::Client,
}

impl HttpPublicIpFetcher {
    pub fn new() -> Self {
        Self {
            client: SHARED_CLIENT.clone(),
        }
    }
}

impl Default for HttpPublicIpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PublicIpFetcher for HttpPublicIpFetcher {
    async fn fetch(&self, endpoint: &str, timeout: Duration) -> Result<String, DomainError> {
        debug!(endpoint = %endpoint, timeout_ms = timeout.as_millis() as u64, "Fetching public IP");

        let response = self
            .client
            .get(endpoint)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| lookup_error(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::PublicIpLookupFailed {
                endpoint: endpoint.to_string(),
                reason: format!("HTTP {}", status),
            });
        }

        response.text().await.map_err(|e| lookup_error(endpoint, e))
    }
}

fn lookup_error(endpoint: &str, e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        DomainError::PublicIpLookupTimeout {
            endpoint: endpoint.to_string(),
        }
    } else {
        DomainError::PublicIpLookupFailed {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        }
    }
}
