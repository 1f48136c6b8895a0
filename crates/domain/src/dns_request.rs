use super::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub domain: Arc<str>,
    pub record_type: RecordType,
    pub client_address: Arc<str>,
}

impl DnsRequest {
    pub fn new(
        domain: impl Into<Arc<str>>,
        record_type: RecordType,
        client_address: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            domain: domain.into(),
            record_type,
            client_address: client_address.into(),
        }
    }
}
