use async_trait::async_trait;
use dnsee_application::ports::SystemResolverReader;
use dnsee_domain::DomainError;
use std::net::IpAddr;
use tokio::fs;
use tracing::{debug, warn};

pub const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// Extract `nameserver` addresses from resolv.conf content, in file order.
///
/// Comment lines (`#` or `;`) and other directives are ignored. An IPv6
/// zone suffix (`fe80::1%eth0`) is dropped. Entries that are not IP
/// literals are skipped with a warning.
pub fn parse_nameservers(content: &str) -> Vec<String> {
    let mut servers = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let mut fields = line.split_whitespace();
        if fields.next() != Some("nameserver") {
            continue;
        }

        let Some(value) = fields.next() else {
            warn!(line = line, "nameserver entry without an address");
            continue;
        };

        let addr = value.split('%').next().unwrap_or(value);
        match addr.parse::<IpAddr>() {
            Ok(ip) => servers.push(ip.to_string()),
            Err(e) => {
                warn!(error = %e, entry = value, "Invalid nameserver address in resolv.conf");
            }
        }
    }

    servers
}

/// Reads nameservers from the system resolver configuration file
pub struct ResolvConfReader {
    path: String,
}

impl ResolvConfReader {
    pub fn new() -> Self {
        Self {
            path: DEFAULT_RESOLV_CONF.to_string(),
        }
    }

    /// Create a reader for a custom file path (useful for testing)
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for ResolvConfReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemResolverReader for ResolvConfReader {
    async fn nameservers(&self) -> Result<Vec<String>, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::ResolverConfig(format!("Failed to read {}: {}", self.path, e))
        })?;

        let servers = parse_nameservers(&content);
        debug!(path = %self.path, nameservers = servers.len(), "resolv.conf parsed");
        Ok(servers)
    }
}
