//! In-memory catalog storage.
//!
//! # Responsibility
//! - Own the recipe collection and every mutation on it.
//! - Report per-record outcomes of bulk loads as typed skips.
//!
//! # Invariants
//! - Ids are unique across live records.
//! - Reads return owned snapshots; callers never hold references across
//!   mutations.
//! - The store has no internal locking. Concurrent callers must serialize
//!   access behind a single lock.

pub mod catalog;
pub mod clock;
pub mod report;
