mod dns_exchanger;
mod system_resolver;

pub use dns_exchanger::{DnsAnswer, DnsExchanger};
pub use system_resolver::SystemResolverReader;

// Re-export for convenience
pub use dnsee_domain::{DnsQuery, ResolverAddr};
