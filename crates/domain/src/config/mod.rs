//! Configuration module for dnsee
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Which DNS server to ask and how
//! - `output`: Terminal rendering
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use resolver::{ResolverConfig, TransportProtocol};
pub use root::{CliOverrides, Config};
