use super::RecordType;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// A single answer produced for a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Txt(String),
}

impl Answer {
    pub fn txt(value: impl Into<String>) -> Self {
        Answer::Txt(value.into())
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            Answer::A(_) => RecordType::A,
            Answer::Aaaa(_) => RecordType::AAAA,
            Answer::Txt(_) => RecordType::TXT,
        }
    }

    /// Presentation form: dotted quad, colon-form IPv6 or the raw text.
    pub fn value(&self) -> String {
        match self {
            Answer::A(addr) => addr.to_string(),
            Answer::Aaaa(addr) => addr.to_string(),
            Answer::Txt(text) => text.clone(),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.record_type(), self.value())
    }
}
