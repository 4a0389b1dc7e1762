//! Graph algorithms module
//!
//! The algorithms themselves live in the `netsummary-algorithms` crate and work
//! on dense indices. This module is the adapter layer: it runs them against a
//! [`GraphStore`] and maps results back to node labels where needed.

pub mod community;
pub mod degree;
pub mod pathfinding;

use crate::graph::GraphStore;

// Re-export algorithms
pub use netsummary_algorithms::{
    weakly_connected_components, ComponentSet,
    count_triangles, local_clustering,
    bfs_distances, DistanceTotals,
};

pub use community::{components, largest_component, LargestComponent};
pub use degree::{max_degree_node, DegreeExtreme, DegreeTable, MeanDegree};
pub use pathfinding::{estimate_average_distance, estimate_average_distance_in_largest};

/// Average clustering coefficient over the undirected projection.
///
/// `None` when the graph has no nodes.
pub fn average_clustering(store: &GraphStore) -> Option<f64> {
    netsummary_algorithms::average_clustering(store.view())
}

/// Degree assortativity over the undirected projection.
///
/// `None` when there are no edges or the degree variance is zero.
pub fn degree_assortativity(store: &GraphStore) -> Option<f64> {
    netsummary_algorithms::degree_assortativity(store.view())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clustering_uses_projection_of_directed_graph() {
        // a->b->c->a is one triangle once directions are dropped
        let store = GraphStore::from_edges(vec![("a", "b"), ("b", "c"), ("c", "a")], true).unwrap();
        assert_eq!(average_clustering(&store), Some(1.0));
        assert_eq!(count_triangles(store.view()), 1);
    }

    #[test]
    fn test_regular_graph_assortativity_is_undefined() {
        let store = GraphStore::from_edges(vec![("a", "b"), ("b", "c"), ("c", "a")], false).unwrap();
        assert_eq!(degree_assortativity(&store), None);
    }

    #[test]
    fn test_empty_graph_metrics_are_undefined() {
        let store = GraphStore::from_edges(Vec::<(&str, &str)>::new(), false).unwrap();
        assert_eq!(average_clustering(&store), None);
        assert_eq!(degree_assortativity(&store), None);
    }
}
