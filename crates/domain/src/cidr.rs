use crate::DomainError;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 prefix length, always within `0..=32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CidrPrefix(u8);

impl CidrPrefix {
    pub const MAX: u8 = 32;

    pub fn new(bits: u8) -> Result<Self, DomainError> {
        if bits > Self::MAX {
            return Err(DomainError::InvalidPrefix(bits.to_string()));
        }
        Ok(Self(bits))
    }

    /// Parses a query label as a prefix.
    ///
    /// Only plain decimal digits are accepted: no sign, no whitespace and no
    /// leading zeros (`"0"` itself is fine).
    pub fn parse_label(label: &str) -> Option<Self> {
        if label.is_empty() || label.len() > 2 || !label.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if label.len() > 1 && label.starts_with('0') {
            return None;
        }
        label.parse::<u8>().ok().and_then(|bits| Self::new(bits).ok())
    }

    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CidrPrefix {
    type Error = DomainError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl FromStr for CidrPrefix {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s).ok_or_else(|| DomainError::InvalidPrefix(s.to_string()))
    }
}

impl fmt::Display for CidrPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

/// Number of assignable host addresses in a subnet of the given prefix.
///
/// Network and broadcast addresses are excluded, except for point-to-point
/// `/31` links (2 hosts) and single-host `/32` routes.
pub fn usable_hosts(prefix: CidrPrefix) -> u64 {
    match prefix.bits() {
        31 => 2,
        32 => 1,
        bits => (1u64 << (32 - bits)).saturating_sub(2),
    }
}

pub fn subnet_mask_from_prefix(prefix: CidrPrefix) -> Ipv4Addr {
    match prefix.bits() {
        // u32 << 32 overflows
        0 => Ipv4Addr::UNSPECIFIED,
        bits => Ipv4Addr::from(u32::MAX << (32 - bits)),
    }
}
