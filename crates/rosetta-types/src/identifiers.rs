//! # Schema Identifiers
//!
//! Identifier and status value types of the wire schema.
//!
//! ## Clusters
//!
//! - **Network**: `NetworkIdentifier`
//! - **Blocks**: `BlockIdentifier`
//! - **Peers & sync**: `Peer`, `SyncStatus`

use serde::{Deserialize, Serialize};

/// Identifies one blockchain network (e.g. a mainnet or a testnet).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkIdentifier {
    /// Name of the blockchain itself.
    pub blockchain: String,
    /// Name of the specific network (chain) being queried.
    pub network: String,
}

impl NetworkIdentifier {
    /// Create a new network identifier.
    pub fn new(blockchain: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            blockchain: blockchain.into(),
            network: network.into(),
        }
    }
}

/// Identifies one block by height and canonical hash.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockIdentifier {
    /// Block height.
    pub index: i64,
    /// Canonical hash of the block (a tipset-key hash for tipset chains).
    pub hash: String,
}

impl BlockIdentifier {
    /// Create a new block identifier.
    pub fn new(index: i64, hash: impl Into<String>) -> Self {
        Self {
            index,
            hash: hash.into(),
        }
    }
}

/// One currently connected network peer.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Peer {
    /// Opaque peer identifier as reported by the node.
    pub peer_id: String,
}

impl Peer {
    /// Create a new peer entry.
    pub fn new(peer_id: impl Into<String>) -> Self {
        Self {
            peer_id: peer_id.into(),
        }
    }
}

/// Normalized chain-sync progress. Derived fresh on every status query;
/// a pure value type with no persistent identity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncStatus {
    /// Height the node has synced up to.
    pub current_index: i64,
    /// Height the node is syncing towards; `None` when the node does not
    /// report a target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_index: Option<i64>,
    /// Normalized sync-stage label.
    pub stage: String,
    /// Whether the node considers itself fully synced.
    pub synced: bool,
}
