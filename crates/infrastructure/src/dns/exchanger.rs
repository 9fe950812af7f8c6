use super::forwarding::{MessageBuilder, ResponseParser};
use super::transport::{create_transport, TransportError};
use async_trait::async_trait;
use dnsee_application::ports::{DnsAnswer, DnsExchanger};
use dnsee_domain::{DnsQuery, DomainError, ResolverAddr, TransportProtocol};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

/// `DnsExchanger` speaking the DNS wire protocol over UDP or TCP.
///
/// Each call builds a fresh message with a random ID, sends it once and
/// parses the reply. There is no retry or fallback between transports.
pub struct WireDnsExchanger {
    protocol: TransportProtocol,
    timeout: Duration,
}

impl WireDnsExchanger {
    pub fn new(protocol: TransportProtocol, timeout: Duration) -> Self {
        Self { protocol, timeout }
    }

    async fn resolve(&self, server: &ResolverAddr) -> Result<SocketAddr, String> {
        if let Some(addr) = server.socket_addr() {
            return Ok(addr);
        }

        let mut addrs = tokio::net::lookup_host((server.host(), server.port()))
            .await
            .map_err(|e| format!("cannot resolve server address: {}", e))?;

        let addr = addrs
            .next()
            .ok_or_else(|| "server name resolved to no addresses".to_string())?;

        debug!(server = %server, resolved = %addr, "Resolved DNS server name");
        Ok(addr)
    }
}

#[async_trait]
impl DnsExchanger for WireDnsExchanger {
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: &ResolverAddr,
    ) -> Result<DnsAnswer, DomainError> {
        let message = MessageBuilder::build_query(query)?;
        let message_bytes = MessageBuilder::to_wire(&message)?;

        let transport_error = |reason: String| DomainError::Transport {
            query: query.to_string(),
            server: server.to_string(),
            reason,
        };

        let server_addr = self.resolve(server).await.map_err(transport_error)?;
        let transport = create_transport(self.protocol, server_addr);

        let started = Instant::now();
        let response = transport
            .send(&message_bytes, self.timeout)
            .await
            .map_err(|e| {
                debug!(server = %server, error = %e, "DNS query failed:\n{}", message);
                match e {
                    TransportError::Timeout(_) => DomainError::QueryTimeout {
                        query: query.to_string(),
                        server: server.to_string(),
                    },
                    TransportError::Io(_) => transport_error(e.to_string()),
                }
            })?;
        let rtt = started.elapsed();

        let parsed = ResponseParser::parse(&response.bytes)?;

        if parsed.id != message.id() {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response ID {} does not match query ID {} from {}",
                parsed.id,
                message.id(),
                server
            )));
        }

        debug!(
            query = %query,
            server = %server,
            protocol = response.protocol_used,
            rcode = parsed.status(),
            "DNS exchange complete"
        );

        Ok(DnsAnswer {
            response_code: parsed.status().to_string(),
            truncated: parsed.truncated,
            records: parsed.records,
            rtt,
        })
    }
}
