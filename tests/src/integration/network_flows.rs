//! # Network Flow Tests
//!
//! The network subsystem driven end to end through the `NetworkApi` trait
//! over a mock full node, down to the serialized wire schema a
//! reconciliation client would see.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use rosetta_network::{
        FullNodeRpc, MockFullNode, NetworkApi, NetworkApiService, NetworkConfig, NodeRpcError,
        NodeSyncState, NodeSyncStage, PeerInfo, TipSet,
    };
    use rosetta_types::NetworkStatusResponse;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn service_over(node: MockFullNode) -> Arc<NetworkApiService<MockFullNode>> {
        Arc::new(NetworkApiService::new(
            NetworkConfig::for_testing(),
            Arc::new(node),
        ))
    }

    fn syncing_node(current: u64, target: u64) -> MockFullNode {
        MockFullNode {
            sync_state: NodeSyncState {
                stage: NodeSyncStage::Headers,
                current_height: current,
                target_height: target,
            },
            ..Default::default()
        }
    }

    /// Node wrapper counting head queries, to pin down that responses are
    /// re-derived from live queries on every request.
    struct CountingNode {
        inner: MockFullNode,
        head_queries: AtomicUsize,
    }

    #[async_trait]
    impl FullNodeRpc for CountingNode {
        async fn network_name(&self) -> Result<String, NodeRpcError> {
            self.inner.network_name().await
        }

        async fn sync_progress(&self) -> Result<NodeSyncState, NodeRpcError> {
            self.inner.sync_progress().await
        }

        async fn chain_head(&self) -> Result<Option<TipSet>, NodeRpcError> {
            self.head_queries.fetch_add(1, Ordering::SeqCst);
            self.inner.chain_head().await
        }

        async fn chain_genesis(&self) -> Result<Option<TipSet>, NodeRpcError> {
            self.inner.chain_genesis().await
        }

        async fn connected_peers(&self) -> Result<Vec<PeerInfo>, NodeRpcError> {
            self.inner.connected_peers().await
        }

        async fn node_version(&self) -> Result<String, NodeRpcError> {
            self.inner.node_version().await
        }
    }

    // =============================================================================
    // FLOWS
    // =============================================================================

    #[tokio::test]
    async fn synced_status_serializes_the_full_wire_shape() {
        let service = service_over(MockFullNode::default());
        let status = service.network_status().await.unwrap();
        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["current_block_identifier"]["index"], 100);
        assert_eq!(json["genesis_block_identifier"]["index"], 0);
        assert_eq!(json["sync_status"]["synced"], true);
        assert_eq!(json["sync_status"]["stage"], "complete");
        assert_eq!(json["peers"].as_array().unwrap().len(), 2);
        // Head timestamp is seconds * 1000 on the wire.
        assert_eq!(
            json["current_block_timestamp"].as_i64().unwrap(),
            (1_598_306_400 + 100 * 30) * 1000
        );

        // What went out re-parses as the schema type, unchanged.
        let wire: NetworkStatusResponse = serde_json::from_value(json).unwrap();
        assert_eq!(wire, status);
    }

    #[tokio::test]
    async fn unsynced_status_reports_genesis_until_the_node_catches_up() {
        let service = service_over(syncing_node(40, 100));
        let status = service.network_status().await.unwrap();

        assert_eq!(
            status.current_block_identifier,
            status.genesis_block_identifier
        );
        assert_eq!(status.current_block_timestamp, 1_598_306_400 * 1000);
        assert_eq!(status.sync_status.current_index, 40);
        assert_eq!(status.sync_status.target_index, Some(100));
        assert_eq!(status.sync_status.stage, "fetching headers");
    }

    #[tokio::test]
    async fn list_then_status_then_options_all_answer_from_one_node() {
        let service = service_over(MockFullNode::default());

        let list = service.network_list().await.unwrap();
        assert_eq!(list.network_identifiers[0].network, "mainnet");

        let status = service.network_status().await.unwrap();
        assert!(status.sync_status.synced);

        let options = service.network_options().await.unwrap();
        assert_eq!(options.version.node_version, "node-1.0.0");
        // The advertised error registry covers every code the status and
        // list flows can emit.
        let codes: Vec<u32> = options.allow.errors.iter().map(|e| e.code).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[tokio::test]
    async fn failures_surface_as_stable_descriptors() {
        let service = service_over(MockFullNode {
            fail_peers: true,
            ..Default::default()
        });
        let err = service.network_status().await.unwrap_err();
        let descriptor = err.descriptor();

        assert_eq!(descriptor.code, 5);
        assert!(descriptor.retriable);
        // Cause text is carried; no node addresses are.
        assert!(descriptor.message.contains("mock failure"));
    }

    #[tokio::test]
    async fn concurrent_status_requests_do_not_interfere() {
        let service = service_over(MockFullNode::default());
        let (a, b, c) = tokio::join!(
            service.network_status(),
            service.network_status(),
            service.network_options(),
        );
        assert_eq!(a.unwrap(), b.unwrap());
        assert!(c.is_ok());
    }

    #[tokio::test]
    async fn every_request_queries_the_node_afresh() {
        let node = Arc::new(CountingNode {
            inner: MockFullNode::default(),
            head_queries: AtomicUsize::new(0),
        });
        let service = NetworkApiService::new(NetworkConfig::for_testing(), node.clone());

        service.network_status().await.unwrap();
        service.network_status().await.unwrap();
        assert_eq!(node.head_queries.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn options_are_static_regardless_of_sync_state() {
        let synced = service_over(MockFullNode::default());
        let syncing = service_over(syncing_node(1, 1000));

        let a = synced.network_options().await.unwrap();
        let b = syncing.network_options().await.unwrap();
        assert_eq!(a.allow, b.allow);
    }
}
