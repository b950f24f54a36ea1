//! # Domain Entities
//!
//! The node-native chain-state types this subsystem translates: block CIDs,
//! tipset keys, tipsets, and raw sync progress. Immutable once observed;
//! nothing here is cached across requests.

use serde::{Deserialize, Serialize};

/// Conversion factor between node-native second timestamps and the
/// externally reported millisecond timestamps.
pub const FACTOR_SECOND_TO_MILLISECOND: i64 = 1000;

/// One block identifier inside a tipset key: the block's canonical byte
/// encoding plus its display string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockCid {
    /// Canonical byte encoding of the identifier. Empty means malformed.
    bytes: Vec<u8>,
    /// Display form (e.g. a base32 CID string).
    display: String,
}

impl BlockCid {
    /// Create a block CID from its canonical bytes and display string.
    pub fn new(bytes: Vec<u8>, display: impl Into<String>) -> Self {
        Self {
            bytes,
            display: display.into(),
        }
    }

    /// Canonical byte encoding, as fed to the tipset hasher.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Display form of the identifier.
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// An ordered, non-empty set of block CIDs that together identify one point
/// in the chain's block DAG at a given height.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TipSetKey {
    cids: Vec<BlockCid>,
}

impl TipSetKey {
    /// Create a tipset key from its ordered block CIDs.
    pub fn new(cids: Vec<BlockCid>) -> Self {
        Self { cids }
    }

    /// The ordered block CIDs making up the key.
    pub fn cids(&self) -> &[BlockCid] {
        &self.cids
    }

    /// Whether the key contains no block CIDs.
    pub fn is_empty(&self) -> bool {
        self.cids.is_empty()
    }
}

/// One observed tipset: its key, height, and the earliest block timestamp
/// within it (seconds since epoch, node-native).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TipSet {
    /// The tipset key.
    pub key: TipSetKey,
    /// Chain height of the tipset.
    pub height: u64,
    /// Minimum block timestamp within the tipset, in seconds.
    pub min_timestamp: u64,
}

impl TipSet {
    /// Create a tipset from its parts.
    pub fn new(key: TipSetKey, height: u64, min_timestamp: u64) -> Self {
        Self {
            key,
            height,
            min_timestamp,
        }
    }
}

/// The node's internal sync-stage enumeration.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum NodeSyncStage {
    /// Not syncing.
    Idle,
    /// Fetching block headers.
    Headers,
    /// Persisting fetched headers.
    PersistHeaders,
    /// Fetching and validating messages.
    Messages,
    /// Sync finished.
    Complete,
    /// Sync failed.
    Errored,
}

impl NodeSyncStage {
    /// Normalized stage label reported on the wire.
    pub fn label(&self) -> &'static str {
        match self {
            NodeSyncStage::Idle => "idle",
            NodeSyncStage::Headers => "fetching headers",
            NodeSyncStage::PersistHeaders => "persisting headers",
            NodeSyncStage::Messages => "validating messages",
            NodeSyncStage::Complete => "complete",
            NodeSyncStage::Errored => "error",
        }
    }
}

/// Raw sync progress as reported by the node. A `target_height` of zero
/// means the node does not know (or does not report) its target.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeSyncState {
    /// Current stage of the sync state machine.
    pub stage: NodeSyncStage,
    /// Height synced so far.
    pub current_height: u64,
    /// Height being synced towards; zero when unknown.
    pub target_height: u64,
}

/// Peer information as reported by the node.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeerInfo {
    /// Opaque peer identifier.
    pub peer_id: String,
}

impl PeerInfo {
    /// Create a peer record.
    pub fn new(peer_id: impl Into<String>) -> Self {
        Self {
            peer_id: peer_id.into(),
        }
    }
}
