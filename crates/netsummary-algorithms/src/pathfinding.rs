//! Pathfinding algorithms
//!
//! Unweighted single-source BFS over the undirected projection and the sampled
//! average-distance estimator built on it.

use super::common::{GraphView, NodeIndex, UndirectedView};
use rand::Rng;
use rayon::prelude::*;
use std::collections::VecDeque;

const UNREACHED: u32 = u32::MAX;

/// Running total of shortest-path lengths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistanceTotals {
    /// Sum of all collected lengths
    pub total: u64,
    /// Number of collected lengths
    pub count: u64,
}

impl DistanceTotals {
    pub fn merge(self, other: DistanceTotals) -> DistanceTotals {
        DistanceTotals {
            total: self.total + other.total,
            count: self.count + other.count,
        }
    }

    /// Mean length, `None` when nothing was collected
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.total as f64 / self.count as f64)
        }
    }
}

/// Breadth-First Search (Unweighted Shortest Path Lengths)
///
/// Hop distance from `source` to every node in the projection; `None` for
/// unreachable nodes.
pub fn bfs_distances(view: &GraphView, source: NodeIndex) -> Vec<Option<u32>> {
    let projection = view.undirected();
    bfs_levels(&projection, source)
        .into_iter()
        .map(|d| (d != UNREACHED).then_some(d))
        .collect()
}

fn bfs_levels(projection: &UndirectedView<'_>, source: NodeIndex) -> Vec<u32> {
    let mut dist = vec![UNREACHED; projection.node_count()];
    let mut queue = VecDeque::new();

    dist[source] = 0;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next_dist = dist[current] + 1;
        for next in projection.neighbors(current) {
            if dist[next] == UNREACHED {
                dist[next] = next_dist;
                queue.push_back(next);
            }
        }
    }

    dist
}

/// Sum and count of the distances from `source` to every other reachable node.
fn distance_totals_from(projection: &UndirectedView<'_>, source: NodeIndex) -> DistanceTotals {
    bfs_levels(projection, source)
        .into_iter()
        .filter(|&d| d != UNREACHED && d > 0)
        .fold(DistanceTotals::default(), |acc, d| DistanceTotals {
            total: acc.total + u64::from(d),
            count: acc.count + 1,
        })
}

/// Sampled average shortest-path length inside one component.
///
/// Draws up to `sample_size` distinct seeds uniformly from `members` (all of them
/// when the component is smaller), runs one BFS per seed and averages every
/// collected distance, excluding the zero self-distance. Seed traversals run in
/// parallel; the totals are integers so the result does not depend on scheduling.
///
/// `members` should be one connected component of the projection (normally the
/// largest). Returns `None` when no distance was collected: an empty or singleton
/// component, or `sample_size == 0`.
pub fn estimate_average_distance<R>(
    view: &GraphView,
    members: &[NodeIndex],
    sample_size: usize,
    rng: &mut R,
) -> Option<f64>
where
    R: Rng + ?Sized,
{
    let amount = sample_size.min(members.len());
    if amount == 0 {
        return None;
    }

    let seeds: Vec<NodeIndex> = rand::seq::index::sample(rng, members.len(), amount)
        .into_iter()
        .map(|i| members[i])
        .collect();

    let projection = view.undirected();
    seeds
        .par_iter()
        .map(|&seed| distance_totals_from(&projection, seed))
        .reduce(DistanceTotals::default, DistanceTotals::merge)
        .mean()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn path4() -> GraphView {
        GraphView::from_edges(4, &[(0, 1), (1, 2), (2, 3)])
    }

    #[test]
    fn test_bfs() {
        // 0->1->2, 3 isolated; direction is ignored
        let view = GraphView::from_edges(4, &[(1, 0), (1, 2)]);
        let dist = bfs_distances(&view, 0);
        assert_eq!(dist, vec![Some(0), Some(1), Some(2), None]);
    }

    #[test]
    fn test_full_sample_on_path() {
        // Distances from each end: 1,2,3; from inner nodes: 1,1,2 -> 20 / 12
        let view = path4();
        let mut rng = StdRng::seed_from_u64(7);
        let estimate = estimate_average_distance(&view, &[0, 1, 2, 3], 100, &mut rng).unwrap();
        assert!((estimate - 20.0 / 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_same_seed_same_estimate() {
        let mut edges = Vec::new();
        for i in 0..50 {
            edges.push((i, (i * 7 + 3) % 50));
            edges.push((i, (i + 1) % 50));
        }
        let view = GraphView::from_edges(50, &edges);
        let members: Vec<NodeIndex> = (0..50).collect();

        let a = estimate_average_distance(&view, &members, 5, &mut StdRng::seed_from_u64(42));
        let b = estimate_average_distance(&view, &members, 5, &mut StdRng::seed_from_u64(42));
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    #[test]
    fn test_singleton_and_empty_are_undefined() {
        let view = GraphView::from_edges(1, &[]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(estimate_average_distance(&view, &[0], 10, &mut rng), None);
        assert_eq!(estimate_average_distance(&view, &[], 10, &mut rng), None);
    }

    #[test]
    fn test_zero_sample_is_undefined() {
        let view = path4();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(estimate_average_distance(&view, &[0, 1, 2, 3], 0, &mut rng), None);
    }

    #[test]
    fn test_distance_totals_mean() {
        let totals = DistanceTotals { total: 6, count: 3 }.merge(DistanceTotals { total: 4, count: 1 });
        assert_eq!(totals.mean(), Some(2.5));
        assert_eq!(DistanceTotals::default().mean(), None);
    }
}
