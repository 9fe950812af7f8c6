use async_trait::async_trait;
use dnsee_application::ports::{DnsAnswer, DnsExchanger, SystemResolverReader};
use dnsee_domain::{DnsQuery, DnsRecord, DomainError, RecordData, RecordType, ResolverAddr};
use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock DnsExchanger
// ============================================================================

#[derive(Clone, Default)]
pub struct MockDnsExchanger {
    answers: Arc<RwLock<HashMap<RecordType, DnsAnswer>>>,
    failing: Arc<RwLock<Option<RecordType>>>,
    sent: Arc<RwLock<Vec<(DnsQuery, ResolverAddr)>>>,
}

impl MockDnsExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer queries of `record_type` with `records`
    pub async fn set_answer(&self, record_type: RecordType, records: Vec<DnsRecord>) {
        let mut answer = DnsAnswer::new(records);
        answer.rtt = Duration::from_millis(12);
        self.answers.write().await.insert(record_type, answer);
    }

    pub async fn set_raw_answer(&self, record_type: RecordType, answer: DnsAnswer) {
        self.answers.write().await.insert(record_type, answer);
    }

    /// Fail every exchange for `record_type`
    pub async fn fail_on(&self, record_type: RecordType) {
        *self.failing.write().await = Some(record_type);
    }

    /// Queries received so far, in order
    pub async fn sent(&self) -> Vec<(DnsQuery, ResolverAddr)> {
        self.sent.read().await.clone()
    }

    pub async fn sent_types(&self) -> Vec<RecordType> {
        self.sent
            .read()
            .await
            .iter()
            .map(|(q, _)| q.record_type)
            .collect()
    }
}

#[async_trait]
impl DnsExchanger for MockDnsExchanger {
    async fn exchange(
        &self,
        query: &DnsQuery,
        server: &ResolverAddr,
    ) -> Result<DnsAnswer, DomainError> {
        self.sent.write().await.push((query.clone(), server.clone()));

        if *self.failing.read().await == Some(query.record_type) {
            return Err(DomainError::Transport {
                query: query.to_string(),
                server: server.to_string(),
                reason: "connection refused".to_string(),
            });
        }

        Ok(self
            .answers
            .read()
            .await
            .get(&query.record_type)
            .cloned()
            .unwrap_or_else(|| DnsAnswer::new(vec![])))
    }
}

// ============================================================================
// Mock SystemResolverReader
// ============================================================================

pub struct MockSystemResolver {
    result: Result<Vec<String>, DomainError>,
    calls: Arc<RwLock<u32>>,
}

impl MockSystemResolver {
    pub fn with_nameservers(servers: &[&str]) -> Self {
        Self {
            result: Ok(servers.iter().map(|s| s.to_string()).collect()),
            calls: Arc::new(RwLock::new(0)),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::new(RwLock::new(0)),
        }
    }

    pub async fn calls(&self) -> u32 {
        *self.calls.read().await
    }
}

#[async_trait]
impl SystemResolverReader for MockSystemResolver {
    async fn nameservers(&self) -> Result<Vec<String>, DomainError> {
        *self.calls.write().await += 1;
        self.result.clone()
    }
}

// ============================================================================
// Record builders
// ============================================================================

pub fn a_record(name: &str, ttl: u32, ip: &str) -> DnsRecord {
    DnsRecord::new(name, ttl, RecordData::A(ip.parse::<Ipv4Addr>().unwrap()))
}

pub fn aaaa_record(name: &str, ttl: u32, ip: &str) -> DnsRecord {
    DnsRecord::new(name, ttl, RecordData::AAAA(ip.parse::<Ipv6Addr>().unwrap()))
}

pub fn cname_record(name: &str, ttl: u32, target: &str) -> DnsRecord {
    DnsRecord::new(name, ttl, RecordData::CNAME(target.to_string()))
}

pub fn mx_record(name: &str, ttl: u32, preference: u16, exchange: &str) -> DnsRecord {
    DnsRecord::new(
        name,
        ttl,
        RecordData::MX {
            preference,
            exchange: exchange.to_string(),
        },
    )
}

pub fn txt_record(name: &str, ttl: u32, chunks: &[&str]) -> DnsRecord {
    DnsRecord::new(
        name,
        ttl,
        RecordData::TXT(chunks.iter().map(|c| c.to_string()).collect()),
    )
}

pub fn ns_record(name: &str, ttl: u32, target: &str) -> DnsRecord {
    DnsRecord::new(name, ttl, RecordData::NS(target.to_string()))
}

pub fn ptr_record(name: &str, ttl: u32, target: &str) -> DnsRecord {
    DnsRecord::new(name, ttl, RecordData::PTR(target.to_string()))
}

pub fn soa_record(name: &str, ttl: u32, mname: &str, rname: &str) -> DnsRecord {
    DnsRecord::new(
        name,
        ttl,
        RecordData::SOA {
            mname: mname.to_string(),
            rname: rname.to_string(),
            serial: 2024010101,
            refresh: 7200,
            retry: 3600,
            expire: 1_209_600,
            minimum: 3600,
        },
    )
}
