//! # Application Module
//!
//! Orchestration: the sync-status adapter and the network status assembler.

pub mod service;
pub mod sync;

pub use service::NetworkApiService;
pub use sync::check_sync_status;
