use crate::dns::record_type_map::RecordTypeMapper;
use crate::dns::records::answer_to_record;
use digkit_application::use_cases::HandleDnsQueryUseCase;
use digkit_domain::DnsRequest;
use hickory_proto::op::{Header, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::{Name, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
    answer_ttl: u32,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>, answer_ttl: u32) -> Self {
        Self {
            use_case,
            answer_ttl,
        }
    }

    /// Joins the raw label bytes. `Name::to_ascii` backslash-escapes `=`, `+`
    /// and `/`, which base64 payloads are made of.
    fn query_domain(name: &Name) -> String {
        name.iter()
            .map(String::from_utf8_lossy)
            .collect::<Vec<_>>()
            .join(".")
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        if request.message_type() != MessageType::Query || request.op_code() != OpCode::Query {
            warn!(op_code = ?request.op_code(), "Unsupported message");
            return send_error_response(request, &mut response_handle, ResponseCode::NotImp).await;
        }

        let request_info = request.request_info();
        // LowerQuery folds case; the payload labels of b64/d64 names need it intact.
        let qname = request_info.query.original().name().clone();
        let domain = Self::query_domain(&qname);
        let hickory_record_type = request_info.query.query_type();
        let client_ip = request.src().ip().to_canonical();

        info!(domain = %domain, record_type = ?hickory_record_type, client = %client_ip, "DNS query received");

        let record_type = RecordTypeMapper::from_hickory(hickory_record_type);
        let dns_request = DnsRequest::new(domain.as_str(), record_type, client_ip.to_string());
        let outcome = self.use_case.execute(&dns_request).await;

        if outcome.answers.is_empty() {
            debug!(domain = %domain, intent = outcome.intent.label(), "No answers");
        }

        let answers: Vec<Record> = outcome
            .answers
            .iter()
            .map(|answer| answer_to_record(&qname, answer, self.answer_ttl))
            .collect();

        let builder = MessageResponseBuilder::from_message_request(request);
        let header = response_header(request);
        let response = builder.build(
            header,
            answers.iter(),
            &[] as &[Record],
            &[] as &[Record],
            &[] as &[Record],
        );

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, domain = %domain, "Failed to send response");
                ResponseInfo::from(header)
            }
        }
    }
}

fn response_header(request: &Request) -> Header {
    let mut header = Header::response_from_request(request.header());
    header.set_authoritative(true);
    header.set_recursion_available(false);
    header
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = response_header(request);
    header.set_response_code(code);
    let response = builder.build(
        header,
        &[] as &[Record],
        &[] as &[Record],
        &[] as &[Record],
        &[] as &[Record],
    );

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(header)
        }
    }
}
