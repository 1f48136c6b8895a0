pub mod public_ip_resolver;
pub mod query_router;
pub mod response_builder;

pub use public_ip_resolver::PublicIpResolver;
pub use query_router::QueryRouter;
pub use response_builder::{ResponseBuilder, ResponseContext};
