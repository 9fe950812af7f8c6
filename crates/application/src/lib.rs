//! dnsee Application Layer
//!
//! Ports implemented by the infrastructure layer, the services that pick a
//! resolver and format answers, and the lookup use case that ties them
//! together.
pub mod ports;
pub mod services;
pub mod use_cases;
