use crate::dns_record::{DnsRecord, RecordType};
use std::time::Duration;

/// Answer section of one dispatched query, tagged with the type that produced it
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub record_type: RecordType,
    pub records: Vec<DnsRecord>,
    /// Response code as reported by the server (NOERROR, NXDOMAIN, ...)
    pub response_code: String,
    pub rtt: Duration,
}

impl QueryResult {
    pub fn new(record_type: RecordType, records: Vec<DnsRecord>) -> Self {
        Self {
            record_type,
            records,
            response_code: "NOERROR".to_string(),
            rtt: Duration::ZERO,
        }
    }
}
