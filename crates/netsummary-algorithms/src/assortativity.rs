//! Degree assortativity
//!
//! Pearson correlation between the projected degrees of the two ends of every
//! undirected edge. Each edge contributes both orientations, so the sample is
//! symmetric and both marginals share one mean and variance.

use super::common::GraphView;
use super::degree::projected_degrees;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, Default)]
struct Moments {
    samples: u128,
    sum: u128,
    sum_sq: u128,
    sum_xy: u128,
}

impl Moments {
    fn merge(self, other: Moments) -> Moments {
        Moments {
            samples: self.samples + other.samples,
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
            sum_xy: self.sum_xy + other.sum_xy,
        }
    }
}

/// Degree assortativity coefficient in `[-1, 1]`.
///
/// Returns `None` when the coefficient is undefined: the projection has no edges
/// or every edge end has the same degree (zero variance, e.g. a regular graph).
/// Sums are kept as integers so zero variance is detected exactly.
pub fn degree_assortativity(view: &GraphView) -> Option<f64> {
    let projection = view.undirected();
    let degrees = projected_degrees(view);

    let moments = (0..view.node_count)
        .into_par_iter()
        .map(|v| {
            let dv = degrees[v] as u128;
            let mut local = Moments::default();
            for u in projection.neighbors(v) {
                let du = degrees[u] as u128;
                local.samples += 1;
                local.sum += dv;
                local.sum_sq += dv * dv;
                local.sum_xy += dv * du;
            }
            local
        })
        .reduce(Moments::default, Moments::merge);

    if moments.samples == 0 {
        return None;
    }

    let samples = moments.samples as i128;
    let sum = moments.sum as i128;
    let numerator = samples * moments.sum_xy as i128 - sum * sum;
    let denominator = samples * moments.sum_sq as i128 - sum * sum;

    if denominator == 0 {
        return None;
    }

    Some(numerator as f64 / denominator as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_is_disassortative() {
        let view = GraphView::from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
        let r = degree_assortativity(&view).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_regular_graph_is_undefined() {
        // Cycle: every node has degree 2
        let view = GraphView::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(degree_assortativity(&view), None);
    }

    #[test]
    fn test_no_edges_is_undefined() {
        assert_eq!(degree_assortativity(&GraphView::from_edges(3, &[])), None);
        // A self-loop alone vanishes in the projection
        assert_eq!(degree_assortativity(&GraphView::from_edges(1, &[(0, 0)])), None);
    }

    #[test]
    fn test_path_graph() {
        // Path 0-1-2-3: pairs (1,2),(2,1),(2,2),(2,2),(2,1),(1,2)
        // mean 5/3, E[xy] = 16/6, var = E[x^2]-mean^2 = 18/6 - 25/9 = 2/9
        // cov = 16/6 - 25/9 = -1/9  ->  r = -0.5
        let view = GraphView::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let r = degree_assortativity(&view).unwrap();
        assert!((r + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_direction_and_duplicates_do_not_matter() {
        let plain = GraphView::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let noisy = GraphView::from_edges(4, &[(1, 0), (1, 2), (2, 1), (3, 2), (3, 2)]);
        assert_eq!(degree_assortativity(&plain), degree_assortativity(&noisy));
    }
}
