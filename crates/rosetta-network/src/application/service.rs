//! # Network API Service
//!
//! The assembler behind the network list/status/options operations. Holds
//! only an immutable config and the shared node handle, so any number of
//! requests may be in flight at once; every response is re-derived from
//! live node queries.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use rosetta_types::{
    Allow, BlockIdentifier, NetworkIdentifier, NetworkListResponse, NetworkOptionsResponse,
    NetworkStatusResponse, OperationStatus, Peer, Version,
};

use crate::algorithms::hash_tip_set_key;
use crate::application::sync::check_sync_status;
use crate::config::NetworkConfig;
use crate::domain::{error_list, NetworkApiError, TipSet, FACTOR_SECOND_TO_MILLISECOND};
use crate::ports::{FullNodeRpc, NetworkApi};

/// Network API service - orchestrates node queries into wire responses.
pub struct NetworkApiService<N: FullNodeRpc> {
    /// Injected registries and deadline knobs.
    config: NetworkConfig,
    /// Shared, externally owned node connection.
    node: Arc<N>,
}

impl<N: FullNodeRpc> NetworkApiService<N> {
    /// Create a new service over the given node connection.
    pub fn new(config: NetworkConfig, node: Arc<N>) -> Self {
        Self { config, node }
    }

    /// Run one node query under the per-query deadline. Elapse surfaces as
    /// [`NetworkApiError::RequestTimedOut`] rather than a stale response.
    async fn bounded<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = T>,
    ) -> Result<T, NetworkApiError> {
        tokio::time::timeout(self.config.query_timeout(), fut)
            .await
            .map_err(|_| {
                tracing::warn!(operation, "node query exceeded deadline");
                NetworkApiError::RequestTimedOut { operation }
            })
    }

    fn block_identifier(tipset: &TipSet, hash: String) -> BlockIdentifier {
        BlockIdentifier::new(tipset.height as i64, hash)
    }

    fn timestamp_ms(tipset: &TipSet) -> i64 {
        tipset.min_timestamp as i64 * FACTOR_SECOND_TO_MILLISECOND
    }
}

#[async_trait]
impl<N: FullNodeRpc + 'static> NetworkApi for NetworkApiService<N> {
    async fn network_list(&self) -> Result<NetworkListResponse, NetworkApiError> {
        let network = self
            .bounded("network_name", self.node.network_name())
            .await?
            .map_err(|e| NetworkApiError::ChainIdUnavailable(e.to_string()))?;

        Ok(NetworkListResponse {
            network_identifiers: vec![NetworkIdentifier::new(&self.config.blockchain, network)],
        })
    }

    async fn network_status(&self) -> Result<NetworkStatusResponse, NetworkApiError> {
        let sync_status = self
            .bounded(
                "sync_progress",
                check_sync_status(&*self.node, self.config.sync_height_tolerance),
            )
            .await??;

        // While the node is syncing, no tipset near the head is safe to
        // report: it may still be rolled back. Substitute genesis, the one
        // block that is always final and fully available.
        let use_genesis = !sync_status.synced;
        if use_genesis {
            tracing::debug!(
                current = sync_status.current_index,
                stage = %sync_status.stage,
                "node not synced, reporting genesis as current block"
            );
        }

        let head = self
            .bounded("chain_head", self.node.chain_head())
            .await?
            .map_err(|e| NetworkApiError::HeadUnavailable(e.to_string()))?
            .ok_or_else(|| {
                NetworkApiError::HeadUnavailable("node returned no head tipset".to_string())
            })?;
        let head_hash = hash_tip_set_key(&head.key)?;

        let genesis = self
            .bounded("chain_genesis", self.node.chain_genesis())
            .await?
            .map_err(|e| NetworkApiError::GenesisUnavailable(e.to_string()))?
            .ok_or_else(|| {
                NetworkApiError::GenesisUnavailable("node returned no genesis tipset".to_string())
            })?;
        let genesis_hash = hash_tip_set_key(&genesis.key)?;

        // Peer failure is a hard error: an empty list must mean "no peers",
        // never "the query failed".
        let peers = self
            .bounded("connected_peers", self.node.connected_peers())
            .await?
            .map_err(|e| NetworkApiError::PeerQueryFailure(e.to_string()))?
            .into_iter()
            .map(|p| Peer::new(p.peer_id))
            .collect();

        let genesis_identifier = Self::block_identifier(&genesis, genesis_hash);
        let (current_block_identifier, current_block_timestamp) = if use_genesis {
            (genesis_identifier.clone(), Self::timestamp_ms(&genesis))
        } else {
            let ts = Self::timestamp_ms(&head);
            (Self::block_identifier(&head, head_hash), ts)
        };

        Ok(NetworkStatusResponse {
            current_block_identifier,
            current_block_timestamp,
            genesis_block_identifier: genesis_identifier,
            peers,
            sync_status,
        })
    }

    async fn network_options(&self) -> Result<NetworkOptionsResponse, NetworkApiError> {
        let node_version = self
            .bounded("node_version", self.node.node_version())
            .await?
            .map_err(|e| NetworkApiError::NodeInfoUnavailable(e.to_string()))?;

        Ok(NetworkOptionsResponse {
            version: Version {
                rosetta_version: self.config.rosetta_version.clone(),
                node_version,
            },
            allow: Allow {
                operation_statuses: vec![
                    OperationStatus::new("Success", true),
                    OperationStatus::new("Reverted", false),
                ],
                operation_types: self.config.operation_types.clone(),
                errors: error_list(),
            },
        })
    }
}
