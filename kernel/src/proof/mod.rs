//! Proof module: content hashing and canonical JSON.
//!
//! Leaf layer. Nothing here depends on the world model.

pub mod canon;
pub mod hash;
pub mod hash_domain;
