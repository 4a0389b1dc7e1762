//! Component detection algorithms
//!
//! Connected components over the undirected projection. For directed graphs this
//! is weak connectivity: edge direction is ignored for reachability only.

use super::common::{GraphView, NodeIndex};
use std::collections::VecDeque;

const UNASSIGNED: usize = usize::MAX;

/// Partition of the node set into connected components
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentSet {
    /// Members of each component, in BFS discovery order
    pub components: Vec<Vec<NodeIndex>>,
    /// Node index -> component index
    pub node_component: Vec<usize>,
}

impl ComponentSet {
    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component index of a node
    pub fn component_of(&self, idx: NodeIndex) -> Option<usize> {
        self.node_component.get(idx).copied()
    }

    /// Component sizes, in component order
    pub fn sizes(&self) -> Vec<usize> {
        self.components.iter().map(Vec::len).collect()
    }

    /// The largest component.
    ///
    /// When several components share the maximum size the first one discovered
    /// is returned; any of them would be a valid answer.
    pub fn largest(&self) -> Option<&[NodeIndex]> {
        let mut best: Option<&Vec<NodeIndex>> = None;
        for component in &self.components {
            if best.map_or(true, |b| component.len() > b.len()) {
                best = Some(component);
            }
        }
        best.map(Vec::as_slice)
    }

    /// Fraction of all nodes that sit in the largest component, with its members.
    ///
    /// Returns `(0.0, [])` for an empty graph.
    pub fn largest_fraction(&self) -> (f64, &[NodeIndex]) {
        let total = self.node_component.len();
        match self.largest() {
            Some(members) if total > 0 => (members.len() as f64 / total as f64, members),
            _ => (0.0, &[] as &[NodeIndex]),
        }
    }
}

/// Weakly Connected Components (WCC)
///
/// Iterative breadth-first traversal from each unvisited node, in index order.
/// Ignores edge direction.
pub fn weakly_connected_components(view: &GraphView) -> ComponentSet {
    let n = view.node_count;
    let projection = view.undirected();

    let mut node_component = vec![UNASSIGNED; n];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();

    for start in 0..n {
        if node_component[start] != UNASSIGNED {
            continue;
        }

        let component_id = components.len();
        let mut members = vec![start];
        node_component[start] = component_id;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for next in projection.neighbors(current) {
                if node_component[next] == UNASSIGNED {
                    node_component[next] = component_id;
                    members.push(next);
                    queue.push_back(next);
                }
            }
        }

        components.push(members);
    }

    ComponentSet {
        components,
        node_component,
    }
}
