//! # Sync Status Adapter
//!
//! Queries the node's sync-progress facility and normalizes the result.
//! Derived fresh on every call; never cached, never retried here.

use rosetta_types::SyncStatus;

use crate::domain::{NetworkApiError, NodeSyncStage, NodeSyncState};
use crate::ports::FullNodeRpc;

/// Query the node for sync progress and normalize it.
///
/// `tolerance` is how far `current_height` may trail a known target while
/// still counting as synced.
///
/// A query failure surfaces as [`NetworkApiError::SyncQueryFailure`] and is
/// not retried at this layer.
pub async fn check_sync_status<N: FullNodeRpc>(
    node: &N,
    tolerance: u64,
) -> Result<SyncStatus, NetworkApiError> {
    let state = node
        .sync_progress()
        .await
        .map_err(|e| NetworkApiError::SyncQueryFailure(e.to_string()))?;
    Ok(normalize_sync_state(state, tolerance))
}

/// Map raw node sync progress to the wire representation.
///
/// The synced rule, pinned by tests:
/// - target known (`> 0`): stage is `Complete` AND
///   `current_height + tolerance >= target_height`;
/// - target unknown (`0`): reported as an absent target, and the stage
///   label alone decides (`Complete` means synced).
pub fn normalize_sync_state(state: NodeSyncState, tolerance: u64) -> SyncStatus {
    let stage_complete = matches!(state.stage, NodeSyncStage::Complete);
    let (target_index, synced) = if state.target_height == 0 {
        (None, stage_complete)
    } else {
        (
            Some(state.target_height as i64),
            stage_complete && state.current_height.saturating_add(tolerance) >= state.target_height,
        )
    };

    SyncStatus {
        current_index: state.current_height as i64,
        target_index,
        stage: state.stage.label().to_string(),
        synced,
    }
}
