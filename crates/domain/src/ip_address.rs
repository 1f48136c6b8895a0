use std::net::{Ipv4Addr, Ipv6Addr};

/// Literal-syntax check only; nothing is resolved.
pub fn is_valid_ipv4(candidate: &str) -> bool {
    candidate.parse::<Ipv4Addr>().is_ok()
}

pub fn is_valid_ipv6(candidate: &str) -> bool {
    candidate.parse::<Ipv6Addr>().is_ok()
}
