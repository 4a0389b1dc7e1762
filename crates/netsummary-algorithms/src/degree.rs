//! Degree statistics
//!
//! Per-node degree tables over a [`GraphView`] and the extremal lookup used for
//! hub reporting.

use super::common::{GraphView, NodeIndex};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Out-degree of every node, parallel edges counted each time
pub fn out_degrees(view: &GraphView) -> Vec<usize> {
    (0..view.node_count).map(|i| view.out_degree(i)).collect()
}

/// In-degree of every node, parallel edges counted each time
pub fn in_degrees(view: &GraphView) -> Vec<usize> {
    (0..view.node_count).map(|i| view.in_degree(i)).collect()
}

/// Undirected degree: out + in, so a self-loop counts twice and
/// `sum == 2 * edge_count`.
pub fn total_degrees(view: &GraphView) -> Vec<usize> {
    (0..view.node_count)
        .map(|i| view.out_degree(i) + view.in_degree(i))
        .collect()
}

/// Distinct-neighbor degree in the undirected projection
pub fn projected_degrees(view: &GraphView) -> Vec<usize> {
    let projection = view.undirected();
    (0..view.node_count)
        .into_par_iter()
        .map(|i| projection.degree(i))
        .collect()
}

/// Node with the highest degree.
///
/// Ties are broken by `prefer`: the node ordered `Less` wins. Returns `None`
/// for an empty table.
pub fn max_degree_by<F>(degrees: &[usize], mut prefer: F) -> Option<(NodeIndex, usize)>
where
    F: FnMut(NodeIndex, NodeIndex) -> Ordering,
{
    let mut best: Option<(NodeIndex, usize)> = None;
    for (idx, &degree) in degrees.iter().enumerate() {
        let replace = match best {
            None => true,
            Some((b, bd)) => degree > bd || (degree == bd && prefer(idx, b) == Ordering::Less),
        };
        if replace {
            best = Some((idx, degree));
        }
    }
    best
}
