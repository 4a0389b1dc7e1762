//! Core graph representation
//!
//! This module implements the read-only network model:
//! - Directed and undirected variants fixed at construction
//! - Nodes auto-registered from edge endpoints, identified by label
//! - Parallel edges kept as given (no deduplication)
//! - CSR adjacency shared with the analyzers

pub mod store;
pub mod types;

// Re-export main types
pub use store::{GraphBuilder, GraphError, GraphResult, GraphStore};
pub use types::{compare_labels, Direction, NodeIndex};
