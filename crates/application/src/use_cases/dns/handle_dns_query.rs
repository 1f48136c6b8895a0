use crate::ports::Clock;
use crate::services::{PublicIpResolver, QueryRouter, ResponseBuilder, ResponseContext};
use digkit_domain::{Answer, DnsRequest, Intent};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    pub intent: Intent,
    pub answers: Vec<Answer>,
}

pub struct HandleDnsQueryUseCase {
    public_ips: Arc<PublicIpResolver>,
    clock: Arc<dyn Clock>,
}

impl HandleDnsQueryUseCase {
    pub fn new(public_ips: Arc<PublicIpResolver>, clock: Arc<dyn Clock>) -> Self {
        Self { public_ips, clock }
    }

    /// Always produces an outcome; unknown names and unserved record types
    /// come back with an empty answer list.
    pub async fn execute(&self, request: &DnsRequest) -> QueryOutcome {
        let start = Instant::now();
        let intent = QueryRouter::classify(&request.domain);

        let ctx = ResponseContext {
            client_address: &request.client_address,
            public_ips: &self.public_ips,
            clock: self.clock.as_ref(),
        };
        let answers = ResponseBuilder::build(&intent, request.record_type, &ctx).await;

        debug!(
            domain = %request.domain,
            record_type = %request.record_type,
            intent = intent.label(),
            answers = answers.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Query handled"
        );

        QueryOutcome { intent, answers }
    }
}
