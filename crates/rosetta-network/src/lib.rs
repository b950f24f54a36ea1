//! # Rosetta Network Subsystem
//!
//! Read-only network list/status/options operations over an underlying
//! blockchain full node, translating the node's native chain state (tipsets,
//! sync stages, peers) into the vendor-neutral schema in `rosetta-types`.
//!
//! ## Core behavior
//!
//! - **Sync gating**: while the node is syncing, the head tipset is not
//!   safe to report (it may be rolled back), so the genesis block identifier
//!   is substituted as the current block.
//! - **Tipset hashing**: deterministic SHA-256 over the tipset key's block
//!   CID encodings; the canonical block-identifier hash.
//! - **Status normalization**: the node's sync stage machine mapped to a
//!   stable stage label plus an explicit synced flag.
//!
//! ## Module Structure
//!
//! ```text
//! rosetta-network/
//! ├── domain/          # Chain-state types and the error taxonomy
//! ├── algorithms/      # Tipset-key hashing
//! ├── ports/           # NetworkApi trait (inbound) + FullNodeRpc trait (outbound)
//! ├── application/     # Sync-status adapter and the status assembler
//! └── config.rs        # NetworkConfig (injected registries and deadlines)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use algorithms::hash_tip_set_key;
pub use application::{check_sync_status, NetworkApiService};
pub use config::NetworkConfig;
pub use domain::{
    error_list, BlockCid, NetworkApiError, NodeRpcError, NodeSyncStage, NodeSyncState, PeerInfo,
    TipSet, TipSetKey, FACTOR_SECOND_TO_MILLISECOND,
};
pub use ports::{FullNodeRpc, MockFullNode, NetworkApi};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
