use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid CIDR prefix: {0}")]
    InvalidPrefix(String),

    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),

    #[error("Decoded payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("Public IP lookup against {endpoint} failed: {reason}")]
    PublicIpLookupFailed { endpoint: String, reason: String },

    #[error("Public IP lookup against {endpoint} timed out")]
    PublicIpLookupTimeout { endpoint: String },
}
