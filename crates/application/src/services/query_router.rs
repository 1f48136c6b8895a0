use digkit_domain::{CidrPrefix, Intent};

const CIDR_LABEL: &str = "cidr";
const MASK_LABEL: &str = "mask";
const TIME_NAME: &str = "time";
const SERVER_IP_NAME: &str = "ip";
const CLIENT_IP_NAME: &str = "myip";
const ENCODE_LABEL: &str = "b64";
const DECODE_LABEL: &str = "d64";

/// Maps query names onto intents.
///
/// Rules are tried in a fixed order and the first match wins. Fixed labels are
/// compared case-insensitively; anything carried into the intent keeps the
/// case it arrived with. A rule whose parameter does not parse simply does not
/// match, so later rules still get a chance.
pub struct QueryRouter;

impl QueryRouter {
    pub fn classify(name: &str) -> Intent {
        let name = name.strip_suffix('.').unwrap_or(name);
        let labels: Vec<&str> = name.split('.').collect();

        if let Some(prefix) = Self::cidr_usable_count(&labels) {
            return Intent::CidrUsableCount(prefix);
        }

        if let Some(prefix) = Self::cidr_subnet_mask(&labels) {
            return Intent::CidrSubnetMask(prefix);
        }

        if name.eq_ignore_ascii_case(TIME_NAME) {
            return Intent::CurrentTime;
        }

        if name.eq_ignore_ascii_case(SERVER_IP_NAME) {
            return Intent::ServerPublicIp;
        }

        if name.eq_ignore_ascii_case(CLIENT_IP_NAME) {
            return Intent::ClientIp;
        }

        match labels.split_first() {
            Some((first, rest)) if !rest.is_empty() && first.eq_ignore_ascii_case(ENCODE_LABEL) => {
                Intent::Base64Encode(rest.join("."))
            }
            // base64 payloads longer than 63 bytes arrive split over several
            // labels, so the chunks are glued back together
            Some((first, rest)) if !rest.is_empty() && first.eq_ignore_ascii_case(DECODE_LABEL) => {
                Intent::Base64Decode(rest.concat())
            }
            _ => Intent::Unrecognized,
        }
    }

    fn cidr_usable_count(labels: &[&str]) -> Option<CidrPrefix> {
        match labels {
            [prefix, cidr] if cidr.eq_ignore_ascii_case(CIDR_LABEL) => {
                CidrPrefix::parse_label(prefix)
            }
            _ => None,
        }
    }

    fn cidr_subnet_mask(labels: &[&str]) -> Option<CidrPrefix> {
        match labels {
            [prefix, mask, cidr]
                if mask.eq_ignore_ascii_case(MASK_LABEL) && cidr.eq_ignore_ascii_case(CIDR_LABEL) =>
            {
                CidrPrefix::parse_label(prefix)
            }
            _ => None,
        }
    }
}
