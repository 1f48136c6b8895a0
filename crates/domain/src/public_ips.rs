use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Externally visible addresses of this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicIps {
    pub ipv4: Ipv4Addr,
    pub ipv6: Ipv6Addr,
}

impl PublicIps {
    pub const FALLBACK_IPV4: Ipv4Addr = Ipv4Addr::LOCALHOST;
    pub const FALLBACK_IPV6: Ipv6Addr = Ipv6Addr::LOCALHOST;

    pub fn new(ipv4: Ipv4Addr, ipv6: Ipv6Addr) -> Self {
        Self { ipv4, ipv6 }
    }

    pub fn fallback() -> Self {
        Self::new(Self::FALLBACK_IPV4, Self::FALLBACK_IPV6)
    }
}

impl fmt::Display for PublicIps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IPv4: {}, IPv6: {}", self.ipv4, self.ipv6)
    }
}
