//! Core type definitions for the network graph

use std::cmp::Ordering;

pub use netsummary_algorithms::{Direction, NodeIndex};

/// Deterministic ordering of node labels.
///
/// Labels that both parse as integers compare numerically ("9" < "10"); any
/// other pair compares lexicographically, with integer labels first. Equal
/// numeric values fall back to the raw text so the order stays total.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
