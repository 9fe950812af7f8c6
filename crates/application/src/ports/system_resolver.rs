use async_trait::async_trait;
use dnsee_domain::DomainError;

/// Reads the operating system's resolver configuration
#[async_trait]
pub trait SystemResolverReader: Send + Sync {
    /// Nameserver addresses in configuration order.
    async fn nameservers(&self) -> Result<Vec<String>, DomainError>;
}
