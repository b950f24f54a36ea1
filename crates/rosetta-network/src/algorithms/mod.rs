//! # Algorithms Module
//!
//! Pure functions of the subsystem: deterministic tipset-key hashing.

pub mod tipset_hash;

pub use tipset_hash::hash_tip_set_key;
