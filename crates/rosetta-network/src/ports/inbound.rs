//! # Inbound Ports
//!
//! API trait defining what the network subsystem exposes to the outer
//! dispatch layer. Stateless between calls; every response is re-derived
//! from live node queries.

use async_trait::async_trait;
use rosetta_types::{NetworkListResponse, NetworkOptionsResponse, NetworkStatusResponse};

use crate::domain::NetworkApiError;

/// Network API - inbound port.
#[async_trait]
pub trait NetworkApi: Send + Sync {
    /// List the networks this service answers for (blockchain name constant
    /// plus the node's network name).
    async fn network_list(&self) -> Result<NetworkListResponse, NetworkApiError>;

    /// Assemble the full network status: current and genesis block
    /// identifiers, peers, and sync progress, with genesis substituted for
    /// the head while the node is still syncing.
    async fn network_status(&self) -> Result<NetworkStatusResponse, NetworkApiError>;

    /// Static capability descriptor: versions, operation statuses and types,
    /// and the full error registry.
    async fn network_options(&self) -> Result<NetworkOptionsResponse, NetworkApiError>;
}
