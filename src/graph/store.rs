//! In-memory graph storage implementation
//!
//! A `GraphStore` is built once from an edge stream and is read-only afterwards.
//! Node labels are interned to dense indices in first-seen order; the topology is
//! held as a CSR [`GraphView`] that every analyzer borrows.

use super::types::{Direction, NodeIndex};
use indexmap::IndexSet;
use netsummary_algorithms::{GraphView, UndirectedView};
use rustc_hash::FxBuildHasher;
use thiserror::Error;

/// Errors that can occur during graph construction and lookup
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Malformed input at row {row}: {reason}")]
    MalformedInput { row: usize, reason: String },

    #[error("Node {0} not found")]
    NodeNotFound(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

type LabelSet = IndexSet<String, FxBuildHasher>;

/// Incremental builder for a [`GraphStore`]
///
/// Nodes are registered automatically when an edge references them.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    directed: bool,
    labels: LabelSet,
    edges: Vec<(NodeIndex, NodeIndex)>,
    rows: usize,
}

impl GraphBuilder {
    pub fn new(directed: bool) -> Self {
        GraphBuilder {
            directed,
            ..Default::default()
        }
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(directed: bool, node_count: usize, edge_count: usize) -> Self {
        GraphBuilder {
            directed,
            labels: LabelSet::with_capacity_and_hasher(node_count, FxBuildHasher),
            edges: Vec::with_capacity(edge_count),
            rows: 0,
        }
    }

    /// Register a node (no-op if it already exists) and return its index.
    pub fn add_node(&mut self, label: &str) -> GraphResult<NodeIndex> {
        if label.is_empty() {
            return Err(GraphError::MalformedInput {
                row: self.rows,
                reason: "empty node label".to_string(),
            });
        }
        Ok(self.intern(label))
    }

    fn intern(&mut self, label: &str) -> NodeIndex {
        match self.labels.get_index_of(label) {
            Some(idx) => idx,
            None => self.labels.insert_full(label.to_string()).0,
        }
    }

    /// Add an edge between two labels, registering both endpoints.
    pub fn add_edge(&mut self, src: &str, dst: &str) -> GraphResult<()> {
        self.rows += 1;
        self.push_edge(self.rows, src, dst)
    }

    /// Add one input row, which must hold exactly two endpoint tokens.
    pub fn add_row<S: AsRef<str>>(&mut self, tokens: &[S]) -> GraphResult<()> {
        self.rows += 1;
        self.push_row(self.rows, tokens)
    }

    /// Add one input row, reporting `row` (e.g. a file line number) on failure.
    pub fn add_row_at<S: AsRef<str>>(&mut self, row: usize, tokens: &[S]) -> GraphResult<()> {
        self.rows += 1;
        self.push_row(row, tokens)
    }

    fn push_row<S: AsRef<str>>(&mut self, row: usize, tokens: &[S]) -> GraphResult<()> {
        match tokens {
            [src, dst] => self.push_edge(row, src.as_ref(), dst.as_ref()),
            _ => Err(GraphError::MalformedInput {
                row,
                reason: format!("expected 2 endpoint tokens, found {}", tokens.len()),
            }),
        }
    }

    fn push_edge(&mut self, row: usize, src: &str, dst: &str) -> GraphResult<()> {
        if src.is_empty() || dst.is_empty() {
            return Err(GraphError::MalformedInput {
                row,
                reason: "empty endpoint token".to_string(),
            });
        }
        let u = self.intern(src);
        let v = self.intern(dst);
        self.edges.push((u, v));
        Ok(())
    }

    /// Freeze the builder into a read-only store.
    pub fn finish(self) -> GraphStore {
        let view = GraphView::from_edges(self.labels.len(), &self.edges);
        tracing::debug!(
            nodes = view.node_count,
            edges = view.edge_count,
            directed = self.directed,
            "graph built"
        );
        GraphStore {
            directed: self.directed,
            labels: self.labels,
            edges: self.edges,
            view,
        }
    }
}

/// Read-only network built from an edge list
///
/// - labels: interned node labels, index = position
/// - edges: (src, dst) index pairs in insertion order, duplicates kept
/// - view: CSR adjacency used by the analyzers
#[derive(Debug, Clone)]
pub struct GraphStore {
    directed: bool,
    labels: LabelSet,
    edges: Vec<(NodeIndex, NodeIndex)>,
    view: GraphView,
}

impl GraphStore {
    /// Build a store from token rows. Every row must hold exactly two
    /// non-empty tokens; the first bad row aborts construction.
    pub fn build<I, R, S>(rows: I, directed: bool) -> GraphResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut builder = GraphBuilder::new(directed);
        for row in rows {
            builder.add_row(row.as_ref())?;
        }
        Ok(builder.finish())
    }

    /// Build a store from already-split `(src, dst)` pairs.
    pub fn from_edges<I, S>(pairs: I, directed: bool) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut builder = GraphBuilder::new(directed);
        for (src, dst) in pairs {
            builder.add_edge(src.as_ref(), dst.as_ref())?;
        }
        Ok(builder.finish())
    }

    /// Build a store from a node list followed by `(src, dst)` pairs.
    ///
    /// Nodes are registered first, so isolated nodes and the label order of
    /// `nodes` are preserved.
    pub fn from_parts<N, I, S>(nodes: N, pairs: I, directed: bool) -> GraphResult<Self>
    where
        N: IntoIterator<Item = S>,
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut builder = GraphBuilder::new(directed);
        for label in nodes {
            builder.add_node(label.as_ref())?;
        }
        for (src, dst) in pairs {
            builder.add_edge(src.as_ref(), dst.as_ref())?;
        }
        Ok(builder.finish())
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn index_of(&self, label: &str) -> Option<NodeIndex> {
        self.labels.get_index_of(label)
    }

    pub fn label(&self, idx: NodeIndex) -> Option<&str> {
        self.labels.get_index(idx).map(String::as_str)
    }

    /// Node labels in registration order
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Edges as label pairs in insertion order.
    ///
    /// Nodes registered without an edge do not appear here; rebuild with
    /// [`GraphStore::from_parts`] and [`GraphStore::nodes`] to keep them.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.edges
            .iter()
            .map(|&(u, v)| (self.labels[u].as_str(), self.labels[v].as_str()))
    }

    /// Neighbors of a node.
    ///
    /// Directed graphs honor `direction`; undirected graphs always answer as
    /// [`Direction::Both`]. Parallel edges repeat the neighbor.
    pub fn neighbors(
        &self,
        label: &str,
        direction: Direction,
    ) -> GraphResult<impl Iterator<Item = &str> + '_> {
        let idx = self
            .index_of(label)
            .ok_or_else(|| GraphError::NodeNotFound(label.to_string()))?;
        let direction = if self.directed { direction } else { Direction::Both };
        Ok(self
            .view
            .neighbors(idx, direction)
            .map(move |n| self.labels[n].as_str()))
    }

    /// Edge density: `m / (n(n-1))` directed, `2m / (n(n-1))` undirected,
    /// 0 when there are fewer than two nodes.
    pub fn density(&self) -> f64 {
        let n = self.node_count();
        if n < 2 {
            return 0.0;
        }
        let m = self.edge_count() as f64;
        let pairs = ordered_pairs(n);
        if self.directed {
            m / pairs
        } else {
            2.0 * m / pairs
        }
    }

    /// CSR topology for the analyzers
    pub fn view(&self) -> &GraphView {
        &self.view
    }

    /// Undirected projection (directions dropped, duplicates and self-loops collapsed)
    pub fn undirected(&self) -> UndirectedView<'_> {
        self.view.undirected()
    }
}

/// `n(n-1)` in floating point; the integer product can overflow.
fn ordered_pairs(n: usize) -> f64 {
    n as f64 * (n - 1) as f64
}
