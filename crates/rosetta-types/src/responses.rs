//! # Schema Responses
//!
//! Top-level response aggregates plus the capability descriptor types
//! (`Version`, `Allow`, `OperationStatus`, `ErrorDescriptor`).

use serde::{Deserialize, Serialize};

use crate::identifiers::{BlockIdentifier, NetworkIdentifier, Peer, SyncStatus};

/// Response to a network-list query.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkListResponse {
    /// The networks this service can answer for.
    pub network_identifiers: Vec<NetworkIdentifier>,
}

/// Response to a network-status query. Constructed fresh per request; the
/// assembler either populates every field or returns an error.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkStatusResponse {
    /// Identifier of the block the service considers current.
    pub current_block_identifier: BlockIdentifier,
    /// Timestamp of the current block, in milliseconds since epoch.
    pub current_block_timestamp: i64,
    /// Identifier of the genesis block.
    pub genesis_block_identifier: BlockIdentifier,
    /// Currently connected peers, in the node's reporting order.
    pub peers: Vec<Peer>,
    /// Normalized sync progress at the moment of the query.
    pub sync_status: SyncStatus,
}

/// Version strings advertised by a network-options query.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Version {
    /// Version of the schema this service speaks.
    pub rosetta_version: String,
    /// Version string of the underlying node.
    pub node_version: String,
}

/// One operation status label supported by this service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationStatus {
    /// Status label (e.g. `"Success"`).
    pub status: String,
    /// Whether an operation with this status took effect.
    pub successful: bool,
}

impl OperationStatus {
    /// Create a new operation status entry.
    pub fn new(status: impl Into<String>, successful: bool) -> Self {
        Self {
            status: status.into(),
            successful,
        }
    }
}

/// Stable, machine-consumable description of one error kind this service can
/// emit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDescriptor {
    /// Stable numeric code.
    pub code: u32,
    /// Human-readable message. Never contains node addresses or backtraces.
    pub message: String,
    /// Whether retrying the whole request may succeed.
    pub retriable: bool,
}

/// Capability descriptor: what this service supports and which errors it can
/// emit.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Allow {
    /// Supported operation statuses.
    pub operation_statuses: Vec<OperationStatus>,
    /// Supported operation type labels.
    pub operation_types: Vec<String>,
    /// Every error descriptor this service can return.
    pub errors: Vec<ErrorDescriptor>,
}

/// Response to a network-options query.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkOptionsResponse {
    /// Version information.
    pub version: Version,
    /// Capability descriptor.
    pub allow: Allow,
}
