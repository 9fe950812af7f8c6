//! dnsee Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod query_result;
pub mod resolver_addr;

pub use config::{CliOverrides, Config, ConfigError, TransportProtocol};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsRecord, RecordData, RecordType};
pub use errors::DomainError;
pub use query_result::QueryResult;
pub use resolver_addr::{ResolverAddr, DEFAULT_DNS_PORT};
