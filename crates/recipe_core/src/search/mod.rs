//! Recipe search entry points.
//!
//! # Responsibility
//! - Tokenize user queries and match them against recipe text.
//! - Keep matching rules independent of store iteration.

pub mod matcher;
