//! # Network Subsystem Configuration
//!
//! Process-wide static registries (blockchain name, schema version,
//! operation types) plus the sync-gating and deadline knobs. Injected into
//! the service at construction rather than read as ambient globals, so the
//! core stays testable without a live process.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Network subsystem configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Blockchain name constant reported in network identifiers.
    pub blockchain: String,

    /// Version of the wire schema this service speaks.
    pub rosetta_version: String,

    /// Supported operation-type labels (externally defined registry).
    pub operation_types: Vec<String>,

    /// How far `current_height` may trail a known `target_height` while
    /// still counting as synced. Zero: current must reach the target.
    pub sync_height_tolerance: u64,

    /// Per-node-query deadline in milliseconds.
    pub query_timeout_ms: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            blockchain: "Filecoin".to_string(),
            rosetta_version: "1.4.0".to_string(),
            operation_types: vec!["Transfer".to_string(), "Reward".to_string()],
            sync_height_tolerance: 0,
            query_timeout_ms: 30_000,
        }
    }
}

impl NetworkConfig {
    /// Create a config for testing (short deadlines).
    pub fn for_testing() -> Self {
        Self {
            query_timeout_ms: 250,
            ..Self::default()
        }
    }

    /// The per-query deadline as a [`Duration`].
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}
