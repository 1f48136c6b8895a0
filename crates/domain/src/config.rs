pub mod errors;
pub mod logging;
pub mod public_ip;
pub mod responder;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use public_ip::PublicIpConfig;
pub use responder::ResponderConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
