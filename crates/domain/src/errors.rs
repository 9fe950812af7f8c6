use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Invalid DNS server address {0}")]
    InvalidServerAddress(String),

    #[error("Unable to retrieve DNS configuration: {0}")]
    ResolverConfig(String),

    #[error("Unable to retrieve DNS configuration on {0}")]
    UnsupportedPlatform(&'static str),

    #[error("Query {query} to {server} failed: {reason}")]
    Transport {
        query: String,
        server: String,
        reason: String,
    },

    #[error("Query {query} to {server} timed out")]
    QueryTimeout { query: String, server: String },
}

impl DomainError {
    /// True when no resolver address could be derived and the user has to
    /// pass one explicitly.
    pub fn needs_explicit_server(&self) -> bool {
        matches!(
            self,
            DomainError::ResolverConfig(_) | DomainError::UnsupportedPlatform(_)
        )
    }
}
