use super::RecordType;
use std::fmt;
use std::sync::Arc;

/// DNS query (domain + record type).
/// Uses `Arc<str>` so one domain is shared by every per-type query of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Domain in canonical fully-qualified form (exactly one trailing dot).
    pub fn fqdn(&self) -> String {
        to_fqdn(&self.domain)
    }
}

/// Append the root label to `domain` unless it is already fully qualified.
pub fn to_fqdn(domain: &str) -> String {
    let trimmed = domain.trim_end_matches('.');
    let mut fqdn = String::with_capacity(trimmed.len() + 1);
    fqdn.push_str(trimmed);
    fqdn.push('.');
    fqdn
}

impl fmt::Display for DnsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.fqdn(), self.record_type)
    }
}
