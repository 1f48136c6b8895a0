#![allow(dead_code)]

use async_trait::async_trait;
use digkit_application::ports::PublicIpFetcher;
use digkit_application::services::PublicIpResolver;
use digkit_application::use_cases::HandleDnsQueryUseCase;
use digkit_domain::config::PublicIpConfig;
use digkit_domain::DomainError;
use digkit_infrastructure::dns::DnsServerHandler;
use digkit_infrastructure::system::SystemClock;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hickory_server::ServerFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;

pub const PUBLIC_V4: &str = "198.51.100.7";
pub const PUBLIC_V6: &str = "2001:db8::7";

const V4_ENDPOINT: &str = "https://v4.test";
const V6_ENDPOINT: &str = "https://v6.test";

/// Answers the two test endpoints with fixed addresses.
pub struct StaticFetcher;

#[async_trait]
impl PublicIpFetcher for StaticFetcher {
    async fn fetch(&self, endpoint: &str, _timeout: Duration) -> Result<String, DomainError> {
        match endpoint {
            V4_ENDPOINT => Ok(format!("{PUBLIC_V4}\n")),
            V6_ENDPOINT => Ok(format!("{PUBLIC_V6}\n")),
            _ => Err(DomainError::PublicIpLookupFailed {
                endpoint: endpoint.to_string(),
                reason: "unknown endpoint".to_string(),
            }),
        }
    }
}

pub fn make_handler(answer_ttl: u32) -> DnsServerHandler {
    let config = PublicIpConfig {
        ipv4_endpoints: vec![V4_ENDPOINT.to_string()],
        ipv6_endpoints: vec![V6_ENDPOINT.to_string()],
        timeout_secs: 1,
        cache_ttl_secs: 300,
    };
    let clock = Arc::new(SystemClock::new());
    let resolver = Arc::new(PublicIpResolver::new(
        Arc::new(StaticFetcher),
        clock.clone(),
        &config,
    ));
    let use_case = Arc::new(HandleDnsQueryUseCase::new(resolver, clock));
    DnsServerHandler::new(use_case, answer_ttl)
}

/// Binds the handler on an ephemeral loopback UDP port.
pub async fn spawn_server(handler: DnsServerHandler) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();

    let mut server = ServerFuture::new(handler);
    server.register_socket(socket);
    tokio::spawn(async move {
        let _ = server.block_until_done().await;
    });

    addr
}

pub async fn send_query(server: SocketAddr, name: &str, record_type: RecordType) -> Message {
    send_message(server, OpCode::Query, name, record_type).await
}

/// Builds the name from raw labels so bytes like `=` or `/` go out unescaped.
pub async fn send_labels(
    server: SocketAddr,
    labels: &[&str],
    record_type: RecordType,
) -> Message {
    let name = Name::from_labels(labels.iter().map(|label| label.as_bytes())).unwrap();
    send_named(server, OpCode::Query, name, record_type).await
}

pub async fn send_message(
    server: SocketAddr,
    op_code: OpCode,
    name: &str,
    record_type: RecordType,
) -> Message {
    send_named(server, op_code, Name::from_ascii(name).unwrap(), record_type).await
}

async fn send_named(
    server: SocketAddr,
    op_code: OpCode,
    name: Name,
    record_type: RecordType,
) -> Message {
    let mut request = Message::new();
    request
        .set_id(4242)
        .set_message_type(MessageType::Query)
        .set_op_code(op_code)
        .set_recursion_desired(true);
    request.add_query(Query::query(name, record_type));

    let client = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    client
        .send_to(&request.to_vec().unwrap(), server)
        .await
        .unwrap();

    let mut buf = vec![0u8; 4096];
    let (len, _) = tokio::time::timeout(Duration::from_secs(5), client.recv_from(&mut buf))
        .await
        .expect("no response from server")
        .unwrap();

    Message::from_vec(&buf[..len]).unwrap()
}
