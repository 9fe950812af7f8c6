use crate::errors::DomainError;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

pub const DEFAULT_DNS_PORT: u16 = 53;

/// The DNS server a lookup is sent to.
///
/// `host` is kept exactly as the user or resolv.conf supplied it (minus any
/// surrounding brackets); it is usually an IP literal but may be a host name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolverAddr {
    host: Arc<str>,
    port: u16,
}

impl ResolverAddr {
    /// Accepts an IPv4 literal, an IPv6 literal (optionally bracketed) or a
    /// host name. A port glued onto the host (`1.1.1.1:53`, `[::1]:53`) is
    /// rejected; the port always comes from `port`.
    pub fn parse(input: &str, port: u16) -> Result<Self, DomainError> {
        let input = input.trim();
        let invalid = |reason: &str| {
            DomainError::InvalidServerAddress(format!("'{}': {}", input, reason))
        };

        let host = match input.strip_prefix('[') {
            Some(rest) => {
                let inner = rest
                    .strip_suffix(']')
                    .ok_or_else(|| invalid("pass the port with --dns-server-port"))?;
                if !matches!(inner.parse::<IpAddr>(), Ok(IpAddr::V6(_))) {
                    return Err(invalid("brackets must enclose an IPv6 address"));
                }
                inner
            }
            None => input,
        };

        if host.is_empty() {
            return Err(invalid("empty address"));
        }
        if host.parse::<IpAddr>().is_err() {
            if host.contains(':') {
                return Err(invalid("pass the port with --dns-server-port"));
            }
            if host.chars().any(|c| c.is_whitespace() || c == '/') {
                return Err(invalid("not an IP address or host name"));
            }
        }

        Ok(Self {
            host: Arc::from(host),
            port,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// IP literal form of the host, if it is one.
    pub fn ip(&self) -> Option<IpAddr> {
        self.host.parse().ok()
    }

    /// Socket address when the host is an IP literal; `None` for host names.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        self.ip().map(|ip| SocketAddr::new(ip, self.port))
    }
}

impl fmt::Display for ResolverAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
