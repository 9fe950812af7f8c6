use crate::ports::SystemResolverReader;
use dnsee_domain::{DomainError, ResolverAddr};
use std::sync::Arc;
use tracing::{debug, info};

/// Decides which DNS server a lookup is sent to.
///
/// An explicit address always wins. Otherwise the first nameserver from the
/// system resolver configuration is used; there is no built-in fallback
/// server, so a missing or unreadable configuration is an error.
pub struct ResolverSelector {
    system_reader: Arc<dyn SystemResolverReader>,
    system_config_supported: bool,
}

impl ResolverSelector {
    pub fn new(system_reader: Arc<dyn SystemResolverReader>) -> Self {
        Self::with_platform_support(system_reader, !cfg!(windows))
    }

    /// Build a selector with an explicit answer to "does this OS have a
    /// readable resolver configuration file?".
    pub fn with_platform_support(
        system_reader: Arc<dyn SystemResolverReader>,
        system_config_supported: bool,
    ) -> Self {
        Self {
            system_reader,
            system_config_supported,
        }
    }

    pub async fn select(
        &self,
        explicit: Option<&str>,
        port: u16,
    ) -> Result<ResolverAddr, DomainError> {
        if let Some(server) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
            let addr = ResolverAddr::parse(server, port)?;
            debug!(resolver = %addr, "Using explicitly configured DNS server");
            return Ok(addr);
        }

        if !self.system_config_supported {
            return Err(DomainError::UnsupportedPlatform(std::env::consts::OS));
        }

        let nameservers = self.system_reader.nameservers().await?;
        let first = nameservers.first().ok_or_else(|| {
            DomainError::ResolverConfig("no nameserver entries found".to_string())
        })?;

        let addr = ResolverAddr::parse(first, port)?;
        info!(
            resolver = %addr,
            available = nameservers.len(),
            "Using system DNS server"
        );
        Ok(addr)
    }
}
