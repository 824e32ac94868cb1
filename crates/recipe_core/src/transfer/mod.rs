//! Bulk transfer codec.
//!
//! # Responsibility
//! - Decode an uploaded import container into raw records.
//! - Encode export snapshots as a JSON document.
//!
//! # Invariants
//! - Container-level decode failures are distinct from per-record skips,
//!   which belong to the store.

pub mod json;
