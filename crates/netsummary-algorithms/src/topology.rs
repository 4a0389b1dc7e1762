//! Graph topology analysis algorithms
//!
//! Triangle counting and clustering coefficients over the undirected projection.
//! Neighbor sets are intersected as sorted sequences; no nested adjacency scans.

use super::common::{sorted_intersection_count, GraphView, NodeIndex, UndirectedView};
use rayon::prelude::*;

/// Number of links among the neighbors of `idx`, plus the neighbor count.
fn closed_pairs(projection: &UndirectedView<'_>, idx: NodeIndex) -> (usize, usize) {
    let neighbors: Vec<NodeIndex> = projection.neighbors(idx).collect();
    let degree = neighbors.len();
    if degree < 2 {
        return (0, degree);
    }

    // Every neighbor-to-neighbor link is seen from both of its ends
    let shared: usize = neighbors
        .iter()
        .map(|&u| sorted_intersection_count(&neighbors, projection.neighbors(u)))
        .sum();

    (shared / 2, degree)
}

/// Triangle Counting
///
/// Returns total number of triangles in the graph.
/// Directed graphs are treated as undirected; parallel edges and self-loops are ignored.
pub fn count_triangles(view: &GraphView) -> usize {
    let projection = view.undirected();
    let at_nodes: usize = (0..view.node_count)
        .into_par_iter()
        .map(|v| closed_pairs(&projection, v).0)
        .sum();

    // Each triangle is closed at all three of its corners
    at_nodes / 3
}

/// Local clustering coefficient of one node.
///
/// Fraction of the node's neighbor pairs that are themselves connected; 0 for
/// nodes with fewer than two neighbors.
pub fn local_clustering(view: &GraphView, idx: NodeIndex) -> f64 {
    local_clustering_in(&view.undirected(), idx)
}

fn local_clustering_in(projection: &UndirectedView<'_>, idx: NodeIndex) -> f64 {
    let (links, degree) = closed_pairs(projection, idx);
    if degree < 2 {
        return 0.0;
    }
    let possible = degree * (degree - 1) / 2;
    links as f64 / possible as f64
}

/// Average clustering coefficient
///
/// Unweighted mean of the local coefficient over every node. `None` for a graph
/// with no nodes. Local values are computed in parallel and summed in node order,
/// so the result does not depend on scheduling.
pub fn average_clustering(view: &GraphView) -> Option<f64> {
    let n = view.node_count;
    if n == 0 {
        return None;
    }

    let projection = view.undirected();
    let local: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|v| local_clustering_in(&projection, v))
        .collect();

    Some(local.iter().sum::<f64>() / n as f64)
}
