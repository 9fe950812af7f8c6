#![allow(dead_code)]
pub mod fixtures;
pub mod test_server;

pub use fixtures::*;
pub use test_server::*;
