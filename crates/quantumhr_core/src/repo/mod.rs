//! Persistence contracts for durable store snapshots.
//!
//! # Responsibility
//! - Provide stable save/load APIs over the `store_state` table.
//! - Keep SQL and payload-encoding details inside the core persistence
//!   boundary.

pub mod session_repo;
