use async_trait::async_trait;
use dnsee_domain::{DnsQuery, DnsRecord, DomainError, ResolverAddr};
use std::time::Duration;

/// Parsed reply to a single query
#[derive(Debug, Clone)]
pub struct DnsAnswer {
    /// Answer section, in the order the server sent it
    pub records: Vec<DnsRecord>,
    pub response_code: String,
    pub truncated: bool,
    /// Round-trip time of the exchange
    pub rtt: Duration,
}

impl DnsAnswer {
    pub fn new(records: Vec<DnsRecord>) -> Self {
        Self {
            records,
            response_code: "NOERROR".to_string(),
            truncated: false,
            rtt: Duration::ZERO,
        }
    }
}

/// One synchronous request/response exchange with a DNS server.
///
/// Implementations own the wire format and transport; callers only see typed
/// records. There is no retry: any failure is returned as-is.
#[async_trait]
pub trait DnsExchanger: Send + Sync {
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: &ResolverAddr,
    ) -> Result<DnsAnswer, DomainError>;
}
