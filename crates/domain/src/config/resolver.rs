use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::resolver_addr::DEFAULT_DNS_PORT;

/// Wire transport used for the query exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportProtocol {
    #[default]
    Udp,
    Tcp,
}

impl TransportProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportProtocol::Udp => "UDP",
            TransportProtocol::Tcp => "TCP",
        }
    }
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolver selection and exchange settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// DNS server to query. When unset, the first nameserver of the system
    /// resolver configuration is used.
    #[serde(default)]
    pub server: Option<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-exchange timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub protocol: TransportProtocol,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Explicit server, treating an empty string as unset.
    pub fn explicit_server(&self) -> Option<&str> {
        self.server.as_deref().filter(|s| !s.trim().is_empty())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server: None,
            port: default_port(),
            timeout_ms: default_timeout_ms(),
            protocol: TransportProtocol::Udp,
        }
    }
}

fn default_port() -> u16 {
    DEFAULT_DNS_PORT
}

fn default_timeout_ms() -> u64 {
    5000
}
