mod clock;
mod public_ip_fetcher;

pub use clock::Clock;
pub use public_ip_fetcher::PublicIpFetcher;
