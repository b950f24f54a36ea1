//! # Rosetta Types Crate
//!
//! Vendor-neutral wire schema consumed by block explorers and reconciliation
//! tooling. Every type here is a plain serde value type with no behavior
//! beyond construction helpers.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: all externally visible schema types are
//!   defined here, never redeclared per subsystem.
//! - **No node leakage**: nothing in this crate references the node's native
//!   chain representation; translation happens in the subsystem crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod identifiers;
pub mod responses;

pub use identifiers::*;
pub use responses::*;
