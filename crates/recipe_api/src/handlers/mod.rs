//! HTTP request handlers.

pub mod recipes;
pub mod transfer;
