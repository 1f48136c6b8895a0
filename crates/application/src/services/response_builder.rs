use chrono::Timelike;
use digkit_domain::{
    decode_base64, encode_base64, subnet_mask_from_prefix, usable_hosts, Answer, CidrPrefix,
    Intent, RecordType,
};
use std::net::{Ipv4Addr, Ipv6Addr};
use tracing::debug;

use super::PublicIpResolver;
use crate::ports::Clock;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Everything about the current request the builder may need besides the
/// intent itself.
pub struct ResponseContext<'a> {
    pub client_address: &'a str,
    pub public_ips: &'a PublicIpResolver,
    pub clock: &'a dyn Clock,
}

/// Turns an intent into answers for the requested record type.
///
/// Each intent only serves some record types; asking for any other type
/// yields no answers rather than an error.
pub struct ResponseBuilder;

impl ResponseBuilder {
    pub async fn build(
        intent: &Intent,
        record_type: RecordType,
        ctx: &ResponseContext<'_>,
    ) -> Vec<Answer> {
        match intent {
            Intent::CidrUsableCount(prefix) => Self::usable_count(*prefix, record_type),
            Intent::CidrSubnetMask(prefix) => Self::subnet_mask(*prefix, record_type),
            Intent::CurrentTime => Self::current_time(ctx.clock, record_type),
            Intent::ServerPublicIp => Self::server_ip(ctx.public_ips, record_type).await,
            Intent::ClientIp => Self::client_ip(ctx.client_address, record_type),
            Intent::Base64Encode(payload) => Self::encode(payload, record_type),
            Intent::Base64Decode(payload) => Self::decode(payload, record_type),
            Intent::Unrecognized => Vec::new(),
        }
    }

    fn usable_count(prefix: CidrPrefix, record_type: RecordType) -> Vec<Answer> {
        match record_type {
            RecordType::TXT => vec![Answer::txt(usable_hosts(prefix).to_string())],
            _ => Vec::new(),
        }
    }

    fn subnet_mask(prefix: CidrPrefix, record_type: RecordType) -> Vec<Answer> {
        match record_type {
            RecordType::A => vec![Answer::A(subnet_mask_from_prefix(prefix))],
            _ => Vec::new(),
        }
    }

    fn current_time(clock: &dyn Clock, record_type: RecordType) -> Vec<Answer> {
        let now = clock.local_now();
        match record_type {
            RecordType::TXT => vec![Answer::txt(now.format(TIME_FORMAT).to_string())],
            // Placeholder address that changes every second. It does not
            // encode the time in any recoverable way.
            RecordType::A => {
                let host = (now.second() % 255 + 1) as u8;
                vec![Answer::A(Ipv4Addr::new(127, 0, 0, host))]
            }
            _ => Vec::new(),
        }
    }

    async fn server_ip(resolver: &PublicIpResolver, record_type: RecordType) -> Vec<Answer> {
        let ips = resolver.get_public_ips().await;
        let answer = match record_type {
            RecordType::AAAA => Answer::Aaaa(ips.ipv6),
            RecordType::TXT => Answer::txt(ips.to_string()),
            _ => Answer::A(ips.ipv4),
        };
        vec![answer]
    }

    /// Echoes the client's source address. A and AAAA are only used when the
    /// address family matches; otherwise the address goes out as text.
    fn client_ip(client_address: &str, record_type: RecordType) -> Vec<Answer> {
        let as_a = || client_address.parse::<Ipv4Addr>().ok().map(Answer::A);
        let as_aaaa = || client_address.parse::<Ipv6Addr>().ok().map(Answer::Aaaa);

        let answer = match record_type {
            RecordType::TXT => None,
            RecordType::A => as_a(),
            RecordType::AAAA => as_aaaa(),
            _ => as_a().or_else(as_aaaa),
        }
        .unwrap_or_else(|| Answer::txt(client_address));

        vec![answer]
    }

    fn encode(payload: &str, record_type: RecordType) -> Vec<Answer> {
        match record_type {
            RecordType::TXT => vec![Answer::txt(encode_base64(payload))],
            _ => Vec::new(),
        }
    }

    fn decode(payload: &str, record_type: RecordType) -> Vec<Answer> {
        match record_type {
            RecordType::TXT => {
                let decoded = decode_base64(payload);
                debug!(payload_len = payload.len(), "Decoded base64 payload");
                vec![Answer::txt(decoded)]
            }
            _ => Vec::new(),
        }
    }
}
