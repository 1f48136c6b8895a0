//! digkit Domain Layer
pub mod base64_codec;
pub mod cidr;
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod intent;
pub mod ip_address;
pub mod public_ips;

pub use base64_codec::{decode_base64, encode_base64, try_decode_base64, INVALID_BASE64};
pub use cidr::{subnet_mask_from_prefix, usable_hosts, CidrPrefix};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{Answer, RecordType};
pub use dns_request::DnsRequest;
pub use errors::DomainError;
pub use intent::Intent;
pub use ip_address::{is_valid_ipv4, is_valid_ipv6};
pub use public_ips::PublicIps;
