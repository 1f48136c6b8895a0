use crate::CidrPrefix;

/// What a query name asks the responder to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// `<prefix>.cidr`
    CidrUsableCount(CidrPrefix),
    /// `<prefix>.mask.cidr`
    CidrSubnetMask(CidrPrefix),
    /// `time`
    CurrentTime,
    /// `ip`
    ServerPublicIp,
    /// `myip`
    ClientIp,
    /// `b64.<text>`
    Base64Encode(String),
    /// `d64.<base64 chunks>`
    Base64Decode(String),
    Unrecognized,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::CidrUsableCount(_) => "cidr_usable_count",
            Intent::CidrSubnetMask(_) => "cidr_subnet_mask",
            Intent::CurrentTime => "current_time",
            Intent::ServerPublicIp => "server_public_ip",
            Intent::ClientIp => "client_ip",
            Intent::Base64Encode(_) => "base64_encode",
            Intent::Base64Decode(_) => "base64_decode",
            Intent::Unrecognized => "unrecognized",
        }
    }
}
