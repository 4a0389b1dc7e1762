//! Component analysis against a [`GraphStore`]

use crate::graph::{GraphStore, NodeIndex};
use netsummary_algorithms::{weakly_connected_components, ComponentSet};

/// Connected components (weak connectivity for directed graphs)
pub fn components(store: &GraphStore) -> ComponentSet {
    weakly_connected_components(store.view())
}

/// The largest component and the share of nodes it holds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LargestComponent {
    /// Size of the component divided by the node count, 0 for an empty graph
    pub fraction: f64,
    /// Member node indices
    pub members: Vec<NodeIndex>,
}

impl LargestComponent {
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Member labels, in discovery order
    pub fn labels<'a>(&self, store: &'a GraphStore) -> Vec<&'a str> {
        self.members
            .iter()
            .filter_map(|&idx| store.label(idx))
            .collect()
    }
}

/// Largest (weakly) connected component.
///
/// Ties between equally large components resolve to the first one discovered.
pub fn largest_component(store: &GraphStore) -> LargestComponent {
    let set = components(store);
    let (fraction, members) = set.largest_fraction();
    tracing::debug!(
        components = set.len(),
        largest = members.len(),
        fraction,
        "components computed"
    );
    LargestComponent {
        fraction,
        members: members.to_vec(),
    }
}
