use async_trait::async_trait;
use digkit_domain::DomainError;
use std::time::Duration;

#[async_trait]
pub trait PublicIpFetcher: Send + Sync {
    /// Fetch the raw response body of a "what is my IP" endpoint.
    async fn fetch(&self, endpoint: &str, timeout: Duration) -> Result<String, DomainError>;
}
