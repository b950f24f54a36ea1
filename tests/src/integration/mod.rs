//! # Integration Tests
//!
//! Cross-crate flows through the public API.

pub mod network_flows;
