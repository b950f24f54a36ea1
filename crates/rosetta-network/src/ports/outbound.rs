//! # Outbound Ports
//!
//! Trait for the external full-node dependency, plus a mock node for tests.
//! The node connection is shared and externally owned; this subsystem only
//! reads through it and never mutates or closes it.

use async_trait::async_trait;

use crate::domain::{NodeRpcError, NodeSyncState, PeerInfo, TipSet};

/// Full-node query capabilities consumed by this subsystem - outbound port.
#[async_trait]
pub trait FullNodeRpc: Send + Sync {
    /// Chain/network label (e.g. `"mainnet"`).
    async fn network_name(&self) -> Result<String, NodeRpcError>;

    /// Raw sync progress from the node's sync state machine.
    async fn sync_progress(&self) -> Result<NodeSyncState, NodeRpcError>;

    /// The head tipset, or `None` when the node has none to offer.
    async fn chain_head(&self) -> Result<Option<TipSet>, NodeRpcError>;

    /// The genesis tipset. A healthy node can always serve this.
    async fn chain_genesis(&self) -> Result<Option<TipSet>, NodeRpcError>;

    /// Currently connected peers, in the node's reporting order.
    async fn connected_peers(&self) -> Result<Vec<PeerInfo>, NodeRpcError>;

    /// Version string of the node software.
    async fn node_version(&self) -> Result<String, NodeRpcError>;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Mock full node for testing, with per-query failure switches.
#[derive(Clone)]
pub struct MockFullNode {
    /// Network name to report.
    pub network: String,
    /// Node version to report.
    pub version: String,
    /// Sync progress to report.
    pub sync_state: NodeSyncState,
    /// Head tipset to report.
    pub head: Option<TipSet>,
    /// Genesis tipset to report.
    pub genesis: Option<TipSet>,
    /// Peers to report.
    pub peers: Vec<PeerInfo>,
    /// Fail the network-name query?
    pub fail_network_name: bool,
    /// Fail the sync-progress query?
    pub fail_sync: bool,
    /// Fail the head query?
    pub fail_head: bool,
    /// Fail the genesis query?
    pub fail_genesis: bool,
    /// Fail the peers query?
    pub fail_peers: bool,
    /// Fail the version query?
    pub fail_version: bool,
    /// Delay every query by this many milliseconds (0 = respond at once).
    pub response_delay_ms: u64,
}

impl Default for MockFullNode {
    fn default() -> Self {
        use crate::domain::{BlockCid, NodeSyncStage, TipSetKey};

        let genesis = TipSet::new(
            TipSetKey::new(vec![BlockCid::new(vec![0xde, 0xad], "bafy-genesis")]),
            0,
            1_598_306_400,
        );
        let head = TipSet::new(
            TipSetKey::new(vec![
                BlockCid::new(vec![0xca, 0xfe], "bafy-head-a"),
                BlockCid::new(vec![0xbe, 0xef], "bafy-head-b"),
            ]),
            100,
            1_598_306_400 + 100 * 30,
        );

        Self {
            network: "mainnet".to_string(),
            version: "node-1.0.0".to_string(),
            sync_state: NodeSyncState {
                stage: NodeSyncStage::Complete,
                current_height: 100,
                target_height: 100,
            },
            head: Some(head),
            genesis: Some(genesis),
            peers: vec![PeerInfo::new("12D3-peer-1"), PeerInfo::new("12D3-peer-2")],
            fail_network_name: false,
            fail_sync: false,
            fail_head: false,
            fail_genesis: false,
            fail_peers: false,
            fail_version: false,
            response_delay_ms: 0,
        }
    }
}

impl MockFullNode {
    async fn simulate_latency(&self) {
        if self.response_delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.response_delay_ms)).await;
        }
    }

    fn maybe_fail(&self, should_fail: bool) -> Result<(), NodeRpcError> {
        if should_fail {
            return Err(NodeRpcError::new("mock failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl FullNodeRpc for MockFullNode {
    async fn network_name(&self) -> Result<String, NodeRpcError> {
        self.simulate_latency().await;
        self.maybe_fail(self.fail_network_name)?;
        Ok(self.network.clone())
    }

    async fn sync_progress(&self) -> Result<NodeSyncState, NodeRpcError> {
        self.simulate_latency().await;
        self.maybe_fail(self.fail_sync)?;
        Ok(self.sync_state)
    }

    async fn chain_head(&self) -> Result<Option<TipSet>, NodeRpcError> {
        self.simulate_latency().await;
        self.maybe_fail(self.fail_head)?;
        Ok(self.head.clone())
    }

    async fn chain_genesis(&self) -> Result<Option<TipSet>, NodeRpcError> {
        self.simulate_latency().await;
        self.maybe_fail(self.fail_genesis)?;
        Ok(self.genesis.clone())
    }

    async fn connected_peers(&self) -> Result<Vec<PeerInfo>, NodeRpcError> {
        self.simulate_latency().await;
        self.maybe_fail(self.fail_peers)?;
        Ok(self.peers.clone())
    }

    async fn node_version(&self) -> Result<String, NodeRpcError> {
        self.simulate_latency().await;
        self.maybe_fail(self.fail_version)?;
        Ok(self.version.clone())
    }
}
