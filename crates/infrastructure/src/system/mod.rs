pub mod clock;
pub mod public_ip_fetcher;

pub use clock::SystemClock;
pub use public_ip_fetcher::HttpPublicIpFetcher;
