//! # Rosetta Proxy Test Suite
//!
//! Unified test crate containing cross-crate integration flows: the network
//! subsystem driven end to end through its public `NetworkApi` trait over a
//! mock full node, asserting on the serialized wire schema.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rosetta-tests
//! ```

pub mod integration;
