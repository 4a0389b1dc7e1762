//! Degree statistics against a [`GraphStore`]

use crate::graph::{compare_labels, GraphStore};
use crate::summary::Metric;
use netsummary_algorithms::{in_degrees, max_degree_by, out_degrees, total_degrees};
use serde::{Deserialize, Serialize};

/// Per-node degree tables, indexed like the store's nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegreeTable {
    /// Separate in- and out-degree tables
    Directed {
        in_degrees: Vec<usize>,
        out_degrees: Vec<usize>,
    },
    /// One table; self-loops count twice
    Undirected { degrees: Vec<usize> },
}

/// Mean degree, `Undefined` for a graph without nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeanDegree {
    /// `k_in = k_out = m / n`
    Directed { k_in: Metric, k_out: Metric },
    /// `k = 2m / n`
    Undirected { k: Metric },
}

/// A node holding the maximum degree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeExtreme {
    pub node: String,
    pub degree: usize,
}

impl DegreeTable {
    pub fn compute(store: &GraphStore) -> Self {
        let view = store.view();
        if store.is_directed() {
            DegreeTable::Directed {
                in_degrees: in_degrees(view),
                out_degrees: out_degrees(view),
            }
        } else {
            DegreeTable::Undirected {
                degrees: total_degrees(view),
            }
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            DegreeTable::Directed { out_degrees, .. } => out_degrees.len(),
            DegreeTable::Undirected { degrees } => degrees.len(),
        }
    }

    pub fn mean(&self) -> MeanDegree {
        let n = self.node_count();
        let mean = |table: &[usize]| -> Metric {
            if n == 0 {
                Metric::Undefined
            } else {
                Metric::Value(table.iter().sum::<usize>() as f64 / n as f64)
            }
        };
        match self {
            DegreeTable::Directed {
                in_degrees,
                out_degrees,
            } => MeanDegree::Directed {
                k_in: mean(in_degrees),
                k_out: mean(out_degrees),
            },
            DegreeTable::Undirected { degrees } => MeanDegree::Undirected { k: mean(degrees) },
        }
    }
}

/// Node with the highest degree in `degrees`.
///
/// Ties go to the lowest label (see [`compare_labels`]); `None` for an empty graph.
pub fn max_degree_node(store: &GraphStore, degrees: &[usize]) -> Option<DegreeExtreme> {
    let (idx, degree) = max_degree_by(degrees, |a, b| {
        compare_labels(store.label(a).unwrap_or_default(), store.label(b).unwrap_or_default())
    })?;
    store.label(idx).map(|node| DegreeExtreme {
        node: node.to_string(),
        degree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star(directed: bool) -> GraphStore {
        GraphStore::from_edges(vec![("C", "x"), ("C", "y"), ("C", "z")], directed).unwrap()
    }

    #[test]
    fn test_directed_star() {
        let store = star(true);
        let table = DegreeTable::compute(&store);

        assert_eq!(
            table.mean(),
            MeanDegree::Directed {
                k_in: Metric::Value(0.75),
                k_out: Metric::Value(0.75)
            }
        );

        let DegreeTable::Directed { in_degrees, out_degrees } = &table else {
            panic!("expected directed table");
        };
        assert_eq!(in_degrees.iter().sum::<usize>(), store.edge_count());
        assert_eq!(out_degrees.iter().sum::<usize>(), store.edge_count());

        let max_out = max_degree_node(&store, out_degrees).unwrap();
        assert_eq!(max_out, DegreeExtreme { node: "C".into(), degree: 3 });

        let max_in = max_degree_node(&store, in_degrees).unwrap();
        assert_eq!(max_in.degree, 1);
        // Lowest label among the tied leaves
        assert_eq!(max_in.node, "x");
    }

    #[test]
    fn test_undirected_degree_sum() {
        let store = GraphStore::from_edges(vec![("A", "B"), ("B", "C"), ("C", "D"), ("D", "D")], false)
            .unwrap();
        let DegreeTable::Undirected { degrees } = DegreeTable::compute(&store) else {
            panic!("expected undirected table");
        };
        assert_eq!(degrees.iter().sum::<usize>(), 2 * store.edge_count());
    }

    #[test]
    fn test_path_mean_degree() {
        let store = GraphStore::from_edges(vec![("A", "B"), ("B", "C"), ("C", "D")], false).unwrap();
        assert_eq!(
            DegreeTable::compute(&store).mean(),
            MeanDegree::Undirected { k: Metric::Value(1.5) }
        );
    }

    #[test]
    fn test_tie_break_is_numeric_for_integer_labels() {
        // "10" and "9" both have out-degree 1; 9 < 10 numerically
        let store = GraphStore::from_edges(vec![("10", "1"), ("9", "2")], true).unwrap();
        let DegreeTable::Directed { out_degrees, .. } = DegreeTable::compute(&store) else {
            panic!("expected directed table");
        };
        assert_eq!(max_degree_node(&store, &out_degrees).unwrap().node, "9");
    }

    #[test]
    fn test_empty_graph() {
        let store = GraphStore::from_edges(Vec::<(&str, &str)>::new(), false).unwrap();
        let table = DegreeTable::compute(&store);
        assert_eq!(table.mean(), MeanDegree::Undirected { k: Metric::Undefined });
        let DegreeTable::Undirected { degrees } = table else {
            panic!("expected undirected table");
        };
        assert_eq!(max_degree_node(&store, &degrees), None);
    }
}
