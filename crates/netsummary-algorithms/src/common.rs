//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of the graph topology for algorithm execution,
//! plus a borrowed undirected projection over it.

/// Dense node index (0..node_count)
pub type NodeIndex = usize;

/// Which side of a node's adjacency to walk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Successors (edges leaving the node)
    Out,
    /// Predecessors (edges entering the node)
    In,
    /// Both sides, multiplicity preserved
    Both,
}

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Every row is sorted ascending. Parallel edges are kept, so a row may repeat an index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Number of stored edges (parallel edges and self-loops included)
    pub edge_count: usize,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<NodeIndex>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<NodeIndex>,
}

impl GraphView {
    /// Build a view from an edge list over indices `0..node_count`.
    ///
    /// Every endpoint must be smaller than `node_count`.
    pub fn from_edges(node_count: usize, edges: &[(NodeIndex, NodeIndex)]) -> Self {
        debug_assert!(edges.iter().all(|&(u, v)| u < node_count && v < node_count));

        let (out_offsets, out_targets) = build_csr(node_count, edges.iter().map(|&(u, v)| (u, v)));
        let (in_offsets, in_sources) = build_csr(node_count, edges.iter().map(|&(u, v)| (v, u)));

        GraphView {
            node_count,
            edge_count: edges.len(),
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        }
    }

    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: NodeIndex) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get outgoing neighbors (successors) of a node
    pub fn successors(&self, idx: NodeIndex) -> &[NodeIndex] {
        let start = self.out_offsets[idx];
        let end = self.out_offsets[idx + 1];
        &self.out_targets[start..end]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: NodeIndex) -> &[NodeIndex] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Neighbors on the requested side. `Both` yields successors then predecessors.
    pub fn neighbors(
        &self,
        idx: NodeIndex,
        direction: Direction,
    ) -> impl Iterator<Item = NodeIndex> + '_ {
        const NONE: &[NodeIndex] = &[];
        let (out, inc) = match direction {
            Direction::Out => (self.successors(idx), NONE),
            Direction::In => (NONE, self.predecessors(idx)),
            Direction::Both => (self.successors(idx), self.predecessors(idx)),
        };
        out.iter().chain(inc.iter()).copied()
    }

    /// Borrow the undirected projection of this view.
    pub fn undirected(&self) -> UndirectedView<'_> {
        UndirectedView { view: self }
    }
}

/// Counting-sort an edge stream into CSR form, then sort each row.
fn build_csr<I>(node_count: usize, pairs: I) -> (Vec<usize>, Vec<NodeIndex>)
where
    I: Iterator<Item = (NodeIndex, NodeIndex)> + Clone,
{
    let mut offsets = vec![0usize; node_count + 1];
    for (u, _) in pairs.clone() {
        offsets[u + 1] += 1;
    }
    for i in 0..node_count {
        offsets[i + 1] += offsets[i];
    }

    let mut cursor = offsets[..node_count].to_vec();
    let mut targets = vec![0; offsets[node_count]];
    for (u, v) in pairs {
        targets[cursor[u]] = v;
        cursor[u] += 1;
    }

    for i in 0..node_count {
        targets[offsets[i]..offsets[i + 1]].sort_unstable();
    }

    (offsets, targets)
}

/// The graph with directions dropped, parallel edges collapsed and self-loops removed.
///
/// This is a borrowed view: neighbor sets are produced by merging the sorted
/// out and in rows of the underlying [`GraphView`] on demand.
#[derive(Debug, Clone, Copy)]
pub struct UndirectedView<'a> {
    view: &'a GraphView,
}

impl<'a> UndirectedView<'a> {
    pub fn node_count(&self) -> usize {
        self.view.node_count
    }

    /// Distinct neighbors of `idx` in ascending order, excluding `idx` itself.
    pub fn neighbors(&self, idx: NodeIndex) -> ProjectedNeighbors<'a> {
        ProjectedNeighbors {
            node: idx,
            out: self.view.successors(idx),
            inc: self.view.predecessors(idx),
            last: None,
        }
    }

    /// Number of distinct neighbors in the projection.
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.neighbors(idx).count()
    }

    /// Number of distinct undirected edges in the projection.
    pub fn edge_count(&self) -> usize {
        let endpoints: usize = (0..self.node_count()).map(|v| self.degree(v)).sum();
        endpoints / 2
    }
}

/// Sorted, deduplicated merge of a node's out and in rows.
#[derive(Debug, Clone)]
pub struct ProjectedNeighbors<'a> {
    node: NodeIndex,
    out: &'a [NodeIndex],
    inc: &'a [NodeIndex],
    last: Option<NodeIndex>,
}

impl Iterator for ProjectedNeighbors<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        loop {
            let next = match (self.out.first(), self.inc.first()) {
                (Some(&a), Some(&b)) if a <= b => {
                    self.out = &self.out[1..];
                    a
                }
                (_, Some(&b)) => {
                    self.inc = &self.inc[1..];
                    b
                }
                (Some(&a), None) => {
                    self.out = &self.out[1..];
                    a
                }
                (None, None) => return None,
            };

            if next == self.node || self.last == Some(next) {
                continue;
            }
            self.last = Some(next);
            return Some(next);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.out.len() + self.inc.len()))
    }
}

/// Count the elements shared by a sorted slice and a sorted iterator.
pub(crate) fn sorted_intersection_count<I>(a: &[NodeIndex], b: I) -> usize
where
    I: IntoIterator<Item = NodeIndex>,
{
    let mut count = 0;
    let mut rest = a;
    for x in b {
        while let Some(&head) = rest.first() {
            if head < x {
                rest = &rest[1..];
            } else {
                break;
            }
        }
        match rest.first() {
            Some(&head) if head == x => {
                count += 1;
                rest = &rest[1..];
            }
            Some(_) => {}
            None => break,
        }
    }
    count
}
