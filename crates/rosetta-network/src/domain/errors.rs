//! # Domain Errors
//!
//! The subsystem error taxonomy. Every kind carries a stable numeric code
//! and a retriable flag so callers can decide whether retrying the whole
//! request makes sense. Messages wrap the triggering lower-level error text
//! but never node addresses or backtraces.

use rosetta_types::ErrorDescriptor;
use thiserror::Error;

/// Transport-level failure reported by the full-node client. Carries the
/// cause text only; classification into the taxonomy below happens at the
/// call site that knows which query failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct NodeRpcError(pub String);

impl NodeRpcError {
    /// Create a transport error from its cause text.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors the network subsystem can surface. Non-recoverable at this layer;
/// nothing is retried or masked.
#[derive(Debug, Error)]
pub enum NetworkApiError {
    /// Could not determine the network name.
    #[error("unable to get chain id: {0}")]
    ChainIdUnavailable(String),

    /// Head tipset not retrievable or nil.
    #[error("unable to get latest block: {0}")]
    HeadUnavailable(String),

    /// Genesis tipset not retrievable or nil.
    #[error("unable to get genesis block: {0}")]
    GenesisUnavailable(String),

    /// Tipset-key encoding or hashing failed.
    #[error("unable to build tipset hash: {0}")]
    TipSetHashFailure(String),

    /// Peer list not retrievable.
    #[error("unable to get peers: {0}")]
    PeerQueryFailure(String),

    /// Node version query failed.
    #[error("unable to get node information: {0}")]
    NodeInfoUnavailable(String),

    /// Sync-progress query failed.
    #[error("unable to query sync status: {0}")]
    SyncQueryFailure(String),

    /// A node query exceeded the per-request deadline.
    #[error("node query timed out: {operation}")]
    RequestTimedOut {
        /// Which node query hit the deadline.
        operation: &'static str,
    },
}

impl NetworkApiError {
    /// Stable numeric code for machine consumption.
    pub fn code(&self) -> u32 {
        match self {
            NetworkApiError::ChainIdUnavailable(_) => 1,
            NetworkApiError::HeadUnavailable(_) => 2,
            NetworkApiError::GenesisUnavailable(_) => 3,
            NetworkApiError::TipSetHashFailure(_) => 4,
            NetworkApiError::PeerQueryFailure(_) => 5,
            NetworkApiError::NodeInfoUnavailable(_) => 6,
            NetworkApiError::SyncQueryFailure(_) => 7,
            NetworkApiError::RequestTimedOut { .. } => 8,
        }
    }

    /// Whether retrying the whole request may succeed. Structural failures
    /// (a tipset key that cannot be encoded) are not retriable; transient
    /// node failures are.
    pub fn retriable(&self) -> bool {
        !matches!(self, NetworkApiError::TipSetHashFailure(_))
    }

    /// Externally visible descriptor for this error.
    pub fn descriptor(&self) -> ErrorDescriptor {
        ErrorDescriptor {
            code: self.code(),
            message: self.to_string(),
            retriable: self.retriable(),
        }
    }
}

/// The full registry of error descriptors this subsystem can emit, as
/// advertised by the options operation. Codes here must stay in lockstep
/// with [`NetworkApiError::code`].
pub fn error_list() -> Vec<ErrorDescriptor> {
    let descriptor = |code, message: &str, retriable| ErrorDescriptor {
        code,
        message: message.to_string(),
        retriable,
    };
    vec![
        descriptor(1, "unable to get chain id", true),
        descriptor(2, "unable to get latest block", true),
        descriptor(3, "unable to get genesis block", true),
        descriptor(4, "unable to build tipset hash", false),
        descriptor(5, "unable to get peers", true),
        descriptor(6, "unable to get node information", true),
        descriptor(7, "unable to query sync status", true),
        descriptor(8, "node query timed out", true),
    ]
}
