pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dnsee_domain::TransportProtocol;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: bytes::Bytes,
    /// Which protocol was used
    pub protocol_used: &'static str,
}

/// Failure of a single send/receive round.
///
/// Kept apart from `DomainError` so the exchanger can attach the query and
/// server it was working on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("timeout {0}")]
    Timeout(&'static str),

    #[error("{0}")]
    Io(String),
}

/// Trait for sending raw DNS messages over the wire
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError>;
}

/// Enum-dispatched transport, no Box/vtable needed.
pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, TransportError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }
}

/// Create the transport for `protocol` talking to `server_addr`.
pub fn create_transport(protocol: TransportProtocol, server_addr: SocketAddr) -> Transport {
    match protocol {
        TransportProtocol::Udp => Transport::Udp(udp::UdpTransport::new(server_addr)),
        TransportProtocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(server_addr)),
    }
}
