//! Network Summary
//!
//! Structural summary statistics for large networks supplied as edge lists:
//! component structure, degree extremes, clustering, degree assortativity and a
//! sampled estimate of the average shortest-path length.
//!
//! # Architecture
//!
//! - [`graph`]: read-only `GraphStore` built once from an edge stream
//! - [`algo`]: analyzers over the store (components, degrees, clustering,
//!   assortativity, distance estimation), backed by `netsummary-algorithms`
//! - [`summary`]: the `NetworkSummary` orchestrator and its `MetricsRecord`
//!
//! The library performs no I/O. Reading edge-list files and rendering records is
//! left to callers such as `netsummary-cli`.
//!
//! ## Example Usage
//!
//! ```rust
//! use netsummary::{GraphStore, Metric, NetworkSummary, SummaryConfig};
//!
//! let store = GraphStore::from_edges(vec![("A", "B"), ("B", "C"), ("C", "D")], false).unwrap();
//!
//! let summary = NetworkSummary::new(SummaryConfig::seeded(42));
//! let record = summary.summarize(&store, "path").unwrap();
//!
//! assert_eq!(record.density, 0.5);
//! assert_eq!(record.k, Some(Metric::Value(1.5)));
//! assert_eq!(record.avg_clustering, Metric::Value(0.0));
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod summary;

// Re-export main types for convenience
pub use graph::{Direction, GraphBuilder, GraphError, GraphResult, GraphStore, NodeIndex};

pub use summary::{
    Metric, MetricsRecord, NetworkSummary, SummaryConfig, SummaryError, SummaryResult,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
