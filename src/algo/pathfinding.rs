//! Sampled average-distance estimation against a [`GraphStore`]

use super::community::largest_component;
use crate::graph::{GraphStore, NodeIndex};
use rand::Rng;

/// Sampled average shortest-path length within `members`.
///
/// `members` is expected to be one connected component of the undirected
/// projection, normally the largest. Up to `sample_size` seeds are drawn from it
/// with `rng`. `None` when no distance could be collected.
pub fn estimate_average_distance<R>(
    store: &GraphStore,
    members: &[NodeIndex],
    sample_size: usize,
    rng: &mut R,
) -> Option<f64>
where
    R: Rng + ?Sized,
{
    let estimate =
        netsummary_algorithms::estimate_average_distance(store.view(), members, sample_size, rng);
    tracing::debug!(
        component = members.len(),
        sample_size,
        ?estimate,
        "average distance estimated"
    );
    estimate
}

/// Find the largest component, then estimate the average distance inside it.
pub fn estimate_average_distance_in_largest<R>(
    store: &GraphStore,
    sample_size: usize,
    rng: &mut R,
) -> Option<f64>
where
    R: Rng + ?Sized,
{
    let largest = largest_component(store);
    estimate_average_distance(store, &largest.members, sample_size, rng)
}
