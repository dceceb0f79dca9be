//! Simple directed graph model.
//!
//! # Overview
//!
//! A graph has a fixed number of vertices `0..N` chosen at construction and a
//! dynamic set of directed edges. Edges are simple: no self-loops and no
//! parallel edges. Vertices carry a weight and an optional label; edges carry
//! a weight that starts at `0.0` and can only be set while the edge exists.
//!
//! ## Representations
//!
//! [`Digraph`] owns the shared concrete behavior (index validation, the edge
//! counter, vertex attributes) and delegates edge storage to an
//! [`EdgeStorage`] implementation:
//!
//! | storage            | edge lookup       | insert          | out-degree | in-degree |
//! |--------------------|-------------------|-----------------|------------|-----------|
//! | [`AdjacencyList`]  | O(log out-degree) | O(out-degree)   | O(1)       | O(E)      |
//! | [`AdjacencyMatrix`]| O(1)              | O(1)            | O(N)       | O(N)      |
//!
//! Both return successors and predecessors in ascending index order, so every
//! query answers identically regardless of the storage chosen.
//!
//! ## Typical Usage
//!
//! ```rust
//! use modgraph_core::graph::ListDigraph;
//!
//! let mut g = ListDigraph::new(3);
//! g.add_edge(0, 1)?;
//! g.add_edge(1, 2)?;
//! g.add_edge(1, 2)?; // idempotent
//! g.set_edge_weight(0, 1, 2.5)?;
//!
//! assert_eq!(g.edge_count(), 2);
//! assert_eq!(g.successors(1)?, vec![2]);
//! assert!(!g.is_strongly_connected());
//! # Ok::<(), modgraph_core::GraphError>(())
//! ```

pub mod list;
pub mod matrix;
pub mod vertex;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GraphError;

pub use list::AdjacencyList;
pub use matrix::AdjacencyMatrix;
pub use vertex::VertexStore;

/// Graph backed by per-vertex successor lists.
pub type ListDigraph = Digraph<AdjacencyList>;

/// Graph backed by an N×N adjacency matrix.
pub type MatrixDigraph = Digraph<AdjacencyMatrix>;

// ---------------------------------------------------------------------------
// Edge storage
// ---------------------------------------------------------------------------

/// Which edge storage backs a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    List,
    Matrix,
}

impl Representation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Matrix => "matrix",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representation-specific edge storage.
///
/// Implementations hold edge presence and edge weights only. They assume
/// every index is below the vertex count they were created with and may
/// panic otherwise; [`Digraph`] validates indices before delegating.
pub trait EdgeStorage: fmt::Debug + Clone {
    /// Storage kind, reported by [`Digraph::representation`].
    const KIND: Representation;

    /// Empty storage for `vertex_count` vertices.
    fn with_vertices(vertex_count: usize) -> Self;

    /// Whether `u → v` is present.
    fn contains(&self, u: usize, v: usize) -> bool;

    /// Insert `u → v` with weight `0.0`. Returns `false` if it was present.
    fn insert(&mut self, u: usize, v: usize) -> bool;

    /// Remove `u → v` and its weight. Returns `false` if it was absent.
    fn remove(&mut self, u: usize, v: usize) -> bool;

    fn out_degree(&self, u: usize) -> usize;

    fn in_degree(&self, u: usize) -> usize;

    /// Successors of `u`, ascending.
    fn successors(&self, u: usize) -> Vec<usize>;

    /// Predecessors of `u`, ascending.
    fn predecessors(&self, u: usize) -> Vec<usize>;

    /// Every edge, ascending by `(u, v)`.
    fn edges(&self) -> Vec<(usize, usize)>;

    /// Weight of `u → v`, `None` if the edge is absent.
    fn weight(&self, u: usize, v: usize) -> Option<f64>;

    /// Set the weight of an existing edge. Returns `false` if it is absent.
    fn set_weight(&mut self, u: usize, v: usize, weight: f64) -> bool;
}

// ---------------------------------------------------------------------------
// Digraph
// ---------------------------------------------------------------------------

/// A simple directed graph over a fixed vertex set.
///
/// Every operation validates its vertex indices and fails with
/// [`GraphError::InvalidVertex`] when one is out of range. Adding an existing
/// edge and removing a missing one are no-ops.
#[derive(Debug, Clone)]
pub struct Digraph<S> {
    storage: S,
    vertices: VertexStore,
    edge_count: usize,
}

impl<S: EdgeStorage> Digraph<S> {
    /// Create a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            storage: S::with_vertices(vertex_count),
            vertices: VertexStore::new(vertex_count),
            edge_count: 0,
        }
    }

    /// Create a graph and add every edge in `edges`.
    ///
    /// # Errors
    ///
    /// Fails on the first out-of-range index or self-loop.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count);
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        debug!(
            representation = %S::KIND,
            vertex_count,
            edge_count = graph.edge_count,
            "graph built from edge list"
        );
        Ok(graph)
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub const fn representation(&self) -> Representation {
        S::KIND
    }

    /// Read-only access to the edge storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Read-only access to vertex weights and labels.
    #[must_use]
    pub const fn vertex_store(&self) -> &VertexStore {
        &self.vertices
    }

    // -- validation ---------------------------------------------------------

    fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        if v < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: v,
                vertex_count: self.vertex_count(),
            })
        }
    }

    fn check_pair(&self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)
    }

    fn check_edge(&self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_pair(u, v)?;
        if u == v {
            return Err(GraphError::InvalidEdge { vertex: u });
        }
        Ok(())
    }

    fn require_edge(&self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_edge(u, v)?;
        if self.storage.contains(u, v) {
            Ok(())
        } else {
            Err(GraphError::EdgeNotFound { from: u, to: v })
        }
    }

    // -- edges --------------------------------------------------------------

    /// Whether the edge `u → v` exists.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if either index is out of range.
    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_pair(u, v)?;
        Ok(self.storage.contains(u, v))
    }

    /// Add the edge `u → v` with weight `0.0`. No-op if it already exists.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] for a bad index, [`GraphError::InvalidEdge`]
    /// if `u == v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_edge(u, v)?;
        if self.storage.insert(u, v) {
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Remove the edge `u → v`. No-op if it does not exist.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if either index is out of range.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_pair(u, v)?;
        if self.storage.remove(u, v) {
            self.edge_count -= 1;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if either index is out of range,
    /// [`GraphError::EdgeNotFound`] if the edge does not exist.
    pub fn set_edge_weight(&mut self, u: usize, v: usize, weight: f64) -> Result<(), GraphError> {
        self.check_pair(u, v)?;
        if self.storage.set_weight(u, v, weight) {
            Ok(())
        } else {
            Err(GraphError::EdgeNotFound { from: u, to: v })
        }
    }

    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if either index is out of range,
    /// [`GraphError::EdgeNotFound`] if the edge does not exist.
    pub fn edge_weight(&self, u: usize, v: usize) -> Result<f64, GraphError> {
        self.check_pair(u, v)?;
        self.storage
            .weight(u, v)
            .ok_or(GraphError::EdgeNotFound { from: u, to: v })
    }

    /// Every edge as `(source, target)`, ascending.
    #[must_use]
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.storage.edges()
    }

    // -- degrees and neighborhoods -----------------------------------------

    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `u` is out of range.
    pub fn in_degree(&self, u: usize) -> Result<usize, GraphError> {
        self.check_vertex(u)?;
        Ok(self.storage.in_degree(u))
    }

    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `u` is out of range.
    pub fn out_degree(&self, u: usize) -> Result<usize, GraphError> {
        self.check_vertex(u)?;
        Ok(self.storage.out_degree(u))
    }

    /// In-degree plus out-degree.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `u` is out of range.
    pub fn total_degree(&self, u: usize) -> Result<usize, GraphError> {
        Ok(self.in_degree(u)? + self.out_degree(u)?)
    }

    /// Vertices `v` with an edge `u → v`, ascending. A fresh copy per call.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `u` is out of range.
    pub fn successors(&self, u: usize) -> Result<Vec<usize>, GraphError> {
        self.check_vertex(u)?;
        Ok(self.storage.successors(u))
    }

    /// Vertices `v` with an edge `v → u`, ascending. A fresh copy per call.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `u` is out of range.
    pub fn predecessors(&self, u: usize) -> Result<Vec<usize>, GraphError> {
        self.check_vertex(u)?;
        Ok(self.storage.predecessors(u))
    }

    // -- vertex attributes --------------------------------------------------

    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `v` is out of range.
    pub fn set_vertex_weight(&mut self, v: usize, weight: f64) -> Result<(), GraphError> {
        self.check_vertex(v)?;
        self.vertices.set_weight(v, weight);
        Ok(())
    }

    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `v` is out of range.
    pub fn vertex_weight(&self, v: usize) -> Result<f64, GraphError> {
        self.check_vertex(v)?;
        Ok(self.vertices.weight(v).unwrap_or_default())
    }

    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `v` is out of range.
    pub fn set_vertex_label(&mut self, v: usize, label: impl Into<String>) -> Result<(), GraphError> {
        self.check_vertex(v)?;
        self.vertices.set_label(v, label);
        Ok(())
    }

    /// The label of `v`, `None` if never set.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if `v` is out of range.
    pub fn vertex_label(&self, v: usize) -> Result<Option<&str>, GraphError> {
        self.check_vertex(v)?;
        Ok(self.vertices.label(v))
    }

    // -- edge relations -----------------------------------------------------

    /// Whether `v` is a successor of `u` (edge `u → v` exists).
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if either index is out of range.
    pub fn is_successor(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.has_edge(u, v)
    }

    /// Whether `u` is a predecessor of `v` (edge `u → v` exists).
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if either index is out of range.
    pub fn is_predecessor(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.has_edge(u, v)
    }

    /// Whether two existing edges leave the same vertex toward different ones.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`], [`GraphError::InvalidEdge`] for a
    /// self-loop, or [`GraphError::EdgeNotFound`] if either edge is absent.
    pub fn is_divergent(&self, u1: usize, v1: usize, u2: usize, v2: usize) -> Result<bool, GraphError> {
        self.require_edge(u1, v1)?;
        self.require_edge(u2, v2)?;
        Ok(u1 == u2 && v1 != v2)
    }

    /// Whether two existing edges enter the same vertex from different ones.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`], [`GraphError::InvalidEdge`] for a
    /// self-loop, or [`GraphError::EdgeNotFound`] if either edge is absent.
    pub fn is_convergent(&self, u1: usize, v1: usize, u2: usize, v2: usize) -> Result<bool, GraphError> {
        self.require_edge(u1, v1)?;
        self.require_edge(u2, v2)?;
        Ok(v1 == v2 && u1 != u2)
    }

    /// Whether `x` is an endpoint of the existing edge `u → v`.
    ///
    /// # Errors
    ///
    /// [`GraphError::InvalidVertex`] if any index is out of range,
    /// [`GraphError::EdgeNotFound`] if the edge is absent.
    pub fn is_incident(&self, u: usize, v: usize, x: usize) -> Result<bool, GraphError> {
        self.check_vertex(x)?;
        if !self.has_edge(u, v)? {
            return Err(GraphError::EdgeNotFound { from: u, to: v });
        }
        Ok(x == u || x == v)
    }

    // -- whole-graph properties --------------------------------------------

    /// No edges at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Every ordered pair of distinct vertices is an edge.
    ///
    /// Graphs with at most one vertex are vacuously complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let n = self.vertex_count();
        n <= 1 || self.edge_count == n * (n - 1)
    }

    /// Every vertex reaches every other vertex.
    ///
    /// Runs one depth-first reachability pass per source vertex:
    /// O(V · (V + E)). Trivially true for 0 or 1 vertices.
    #[must_use]
    pub fn is_strongly_connected(&self) -> bool {
        let n = self.vertex_count();
        if n <= 1 {
            return true;
        }
        (0..n).all(|start| self.reachable_count(start) == n)
    }

    /// Number of vertices reachable from `start`, `start` included.
    fn reachable_count(&self, start: usize) -> usize {
        let mut visited = vec![false; self.vertex_count()];
        let mut stack = vec![start];
        let mut count = 0;

        while let Some(u) = stack.pop() {
            if visited[u] {
                continue;
            }
            visited[u] = true;
            count += 1;
            for v in self.storage.successors(u) {
                if !visited[v] {
                    stack.push(v);
                }
            }
        }

        count
    }
}

impl<S: EdgeStorage> fmt::Display for Digraph<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match S::KIND {
            Representation::List => "ListDigraph",
            Representation::Matrix => "MatrixDigraph",
        };
        write!(
            f,
            "{name}(vertices={}, edges={})",
            self.vertex_count(),
            self.edge_count
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn both(n: usize, edges: &[(usize, usize)]) -> (ListDigraph, MatrixDigraph) {
        (
            ListDigraph::from_edges(n, edges).expect("valid list graph"),
            MatrixDigraph::from_edges(n, edges).expect("valid matrix graph"),
        )
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut g = ListDigraph::new(3);
        g.add_edge(0, 1).expect("add");
        g.add_edge(0, 1).expect("re-add is a no-op");
        assert_eq!(g.edge_count(), 1);

        let mut m = MatrixDigraph::new(3);
        m.add_edge(0, 1).expect("add");
        m.add_edge(0, 1).expect("re-add is a no-op");
        assert_eq!(m.edge_count(), 1);
    }

    #[test]
    fn remove_missing_edge_is_noop() {
        let (mut l, mut m) = both(3, &[(0, 1)]);
        l.remove_edge(1, 2).expect("missing edge removal");
        m.remove_edge(1, 2).expect("missing edge removal");
        assert_eq!(l.edge_count(), 1);
        assert_eq!(m.edge_count(), 1);

        l.remove_edge(0, 1).expect("remove");
        m.remove_edge(0, 1).expect("remove");
        assert!(l.is_empty());
        assert!(m.is_empty());
    }

    #[test]
    fn self_loop_is_rejected() {
        let (mut l, mut m) = both(2, &[]);
        assert_eq!(l.add_edge(1, 1), Err(GraphError::InvalidEdge { vertex: 1 }));
        assert_eq!(m.add_edge(1, 1), Err(GraphError::InvalidEdge { vertex: 1 }));
        assert_eq!(l.edge_count(), 0);
    }

    #[test]
    fn out_of_range_vertex_is_rejected() {
        let (l, m) = both(2, &[]);
        let expected = Err(GraphError::InvalidVertex {
            vertex: 2,
            vertex_count: 2,
        });
        assert_eq!(l.has_edge(0, 2), expected);
        assert_eq!(m.has_edge(2, 0), expected);
        assert!(l.in_degree(5).is_err());
        assert!(m.successors(9).is_err());
        assert!(l.vertex_label(2).is_err());
    }

    #[test]
    fn weight_requires_existing_edge() {
        let (mut l, mut m) = both(3, &[(0, 1)]);
        for result in [l.set_edge_weight(1, 0, 3.0), m.set_edge_weight(1, 0, 3.0)] {
            assert_eq!(result, Err(GraphError::EdgeNotFound { from: 1, to: 0 }));
        }
        assert_eq!(l.edge_weight(0, 1), Ok(0.0));
        l.set_edge_weight(0, 1, 3.0).expect("existing edge");
        m.set_edge_weight(0, 1, 3.0).expect("existing edge");
        assert_eq!(l.edge_weight(0, 1), Ok(3.0));
        assert_eq!(m.edge_weight(0, 1), Ok(3.0));
    }

    #[test]
    fn removing_an_edge_discards_its_weight() {
        let (mut l, mut m) = both(2, &[(0, 1)]);
        l.set_edge_weight(0, 1, 9.0).expect("set");
        m.set_edge_weight(0, 1, 9.0).expect("set");
        l.remove_edge(0, 1).expect("remove");
        m.remove_edge(0, 1).expect("remove");
        assert!(l.edge_weight(0, 1).is_err());
        l.add_edge(0, 1).expect("re-add");
        m.add_edge(0, 1).expect("re-add");
        assert_eq!(l.edge_weight(0, 1), Ok(0.0));
        assert_eq!(m.edge_weight(0, 1), Ok(0.0));
    }

    #[test]
    fn degrees_and_neighborhoods() {
        let (l, m) = both(4, &[(0, 2), (0, 1), (3, 1), (1, 0)]);
        for (succ, pred, ind, outd, total) in [
            (l.successors(0), l.predecessors(1), l.in_degree(1), l.out_degree(0), l.total_degree(0)),
            (m.successors(0), m.predecessors(1), m.in_degree(1), m.out_degree(0), m.total_degree(0)),
        ] {
            assert_eq!(succ, Ok(vec![1, 2]));
            assert_eq!(pred, Ok(vec![0, 3]));
            assert_eq!(ind, Ok(2));
            assert_eq!(outd, Ok(2));
            assert_eq!(total, Ok(3));
        }
    }

    #[test]
    fn successors_are_a_snapshot() {
        let mut g = ListDigraph::from_edges(3, &[(0, 1)]).expect("graph");
        let before = g.successors(0).expect("successors");
        g.add_edge(0, 2).expect("add");
        assert_eq!(before, vec![1]);
        assert_eq!(g.successors(0), Ok(vec![1, 2]));
    }

    #[test]
    fn vertex_attributes() {
        let mut g = MatrixDigraph::new(2);
        assert_eq!(g.vertex_weight(0), Ok(0.0));
        assert_eq!(g.vertex_label(0), Ok(None));
        g.set_vertex_weight(0, 1.5).expect("weight");
        g.set_vertex_label(1, "torvalds").expect("label");
        assert_eq!(g.vertex_weight(0), Ok(1.5));
        assert_eq!(g.vertex_label(1), Ok(Some("torvalds")));
        assert!(g.set_vertex_label(2, "nobody").is_err());
    }

    #[test]
    fn edge_relations() {
        let g = ListDigraph::from_edges(4, &[(0, 1), (0, 2), (3, 2)]).expect("graph");
        assert_eq!(g.is_divergent(0, 1, 0, 2), Ok(true));
        assert_eq!(g.is_divergent(0, 2, 3, 2), Ok(false));
        assert_eq!(g.is_convergent(0, 2, 3, 2), Ok(true));
        assert_eq!(g.is_convergent(0, 1, 0, 2), Ok(false));
        assert_eq!(
            g.is_divergent(0, 1, 1, 0),
            Err(GraphError::EdgeNotFound { from: 1, to: 0 })
        );
        assert_eq!(g.is_convergent(0, 0, 3, 2), Err(GraphError::InvalidEdge { vertex: 0 }));
        assert_eq!(g.is_incident(0, 1, 1), Ok(true));
        assert_eq!(g.is_incident(0, 1, 3), Ok(false));
        assert!(g.is_incident(1, 0, 1).is_err());
        assert_eq!(g.is_successor(3, 2), Ok(true));
        assert_eq!(g.is_predecessor(2, 3), Ok(false));
    }

    #[test]
    fn emptiness_and_completeness() {
        let (l, m) = both(3, &[(0, 1), (1, 0), (0, 2), (2, 0), (1, 2), (2, 1)]);
        assert!(l.is_complete() && m.is_complete());
        assert!(!l.is_empty());

        assert!(ListDigraph::new(0).is_complete());
        assert!(MatrixDigraph::new(1).is_complete());
        assert!(ListDigraph::new(1).is_empty());
        assert!(!ListDigraph::new(2).is_complete());
    }

    #[test]
    fn strong_connectivity() {
        let (l, m) = both(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(l.is_strongly_connected());
        assert!(m.is_strongly_connected());

        let (l, m) = both(3, &[(0, 1), (1, 2)]);
        assert!(!l.is_strongly_connected());
        assert!(!m.is_strongly_connected());

        assert!(ListDigraph::new(0).is_strongly_connected());
        assert!(MatrixDigraph::new(1).is_strongly_connected());
        assert!(!MatrixDigraph::new(2).is_strongly_connected());
    }

    #[test]
    fn display_names_the_representation() {
        let (l, m) = both(3, &[(0, 1)]);
        assert_eq!(l.to_string(), "ListDigraph(vertices=3, edges=1)");
        assert_eq!(m.to_string(), "MatrixDigraph(vertices=3, edges=1)");
        assert_eq!(l.representation(), Representation::List);
        assert_eq!(m.representation().as_str(), "matrix");
    }
}
