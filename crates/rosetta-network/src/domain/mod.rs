//! # Domain Module
//!
//! Core chain-state types and the subsystem error taxonomy.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
