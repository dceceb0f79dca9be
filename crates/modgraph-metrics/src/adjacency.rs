//! Read-only adjacency snapshot shared by every engine.
//!
//! Engines never hold the graph itself: they capture its edge set once
//! through [`Digraph::edges`] into sorted successor and predecessor lists.
//! Capture costs O(V + E) for the list storage and O(V²) for the matrix
//! storage; afterwards every neighborhood query is a slice borrow and
//! every edge lookup a binary search, whichever storage produced it.

use std::collections::VecDeque;

use modgraph_core::{Digraph, EdgeStorage};

/// Sorted successor/predecessor lists of a graph at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    successors: Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Adjacency {
    /// Snapshot the edges of `graph`.
    #[must_use]
    pub fn capture<S: EdgeStorage>(graph: &Digraph<S>) -> Self {
        Self::from_edges(graph.vertex_count(), &graph.edges())
    }

    /// Build from an edge list sorted ascending by `(u, v)`.
    fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut successors = vec![Vec::new(); vertex_count];
        let mut predecessors = vec![Vec::new(); vertex_count];
        // Ascending (u, v) order keeps both list families sorted.
        for &(u, v) in edges {
            successors[u].push(v);
            predecessors[v].push(u);
        }
        Self {
            successors,
            predecessors,
            edge_count: edges.len(),
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn successors(&self, u: usize) -> &[usize] {
        &self.successors[u]
    }

    #[must_use]
    pub fn predecessors(&self, u: usize) -> &[usize] {
        &self.predecessors[u]
    }

    #[must_use]
    pub fn out_degree(&self, u: usize) -> usize {
        self.successors[u].len()
    }

    #[must_use]
    pub fn in_degree(&self, u: usize) -> usize {
        self.predecessors[u].len()
    }

    #[must_use]
    pub fn total_degree(&self, u: usize) -> usize {
        self.in_degree(u) + self.out_degree(u)
    }

    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.successors[u].binary_search(&v).is_ok()
    }

    /// Every edge, ascending by `(u, v)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(u, list)| list.iter().map(move |&v| (u, v)))
    }

    /// Successors ∪ predecessors of `u`, ascending, without duplicates.
    #[must_use]
    pub fn neighbors(&self, u: usize) -> Vec<usize> {
        let (out, inc) = (&self.successors[u], &self.predecessors[u]);
        let mut merged = Vec::with_capacity(out.len() + inc.len());
        let (mut i, mut j) = (0, 0);
        while i < out.len() && j < inc.len() {
            match out[i].cmp(&inc[j]) {
                std::cmp::Ordering::Less => {
                    merged.push(out[i]);
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    merged.push(inc[j]);
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    merged.push(out[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&out[i..]);
        merged.extend_from_slice(&inc[j..]);
        merged
    }

    /// Unweighted shortest-path distances from `source` along edge
    /// direction. `None` marks unreachable vertices.
    #[must_use]
    pub fn bfs_distances(&self, source: usize) -> Vec<Option<usize>> {
        let mut dist = vec![None; self.vertex_count()];
        dist[source] = Some(0);
        let mut queue = VecDeque::from([(source, 0)]);

        while let Some((v, d)) = queue.pop_front() {
            for &w in &self.successors[v] {
                if dist[w].is_none() {
                    dist[w] = Some(d + 1);
                    queue.push_back((w, d + 1));
                }
            }
        }

        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modgraph_core::{ListDigraph, MatrixDigraph};

    #[test]
    fn capture_is_storage_independent() {
        let edges = [(2, 0), (0, 1), (1, 2), (0, 2)];
        let list = ListDigraph::from_edges(3, &edges).expect("graph");
        let matrix = MatrixDigraph::from_edges(3, &edges).expect("graph");
        let a = Adjacency::capture(&list);
        assert_eq!(a, Adjacency::capture(&matrix));
        assert_eq!(a.edge_count(), 4);
        assert_eq!(a.successors(0), &[1, 2]);
        assert_eq!(a.predecessors(2), &[0, 1]);
        assert!(a.has_edge(2, 0));
        assert!(!a.has_edge(1, 0));
    }

    #[test]
    fn neighbors_merge_both_directions() {
        let g = ListDigraph::from_edges(5, &[(0, 3), (1, 0), (0, 1), (4, 0)]).expect("graph");
        let a = Adjacency::capture(&g);
        assert_eq!(a.neighbors(0), vec![1, 3, 4]);
        assert_eq!(a.neighbors(2), Vec::<usize>::new());
    }

    #[test]
    fn bfs_follows_edge_direction() {
        let g = ListDigraph::from_edges(4, &[(0, 1), (1, 2), (3, 2)]).expect("graph");
        let a = Adjacency::capture(&g);
        assert_eq!(a.bfs_distances(0), vec![Some(0), Some(1), Some(2), None]);
        assert_eq!(a.bfs_distances(2), vec![None, None, Some(0), None]);
    }
}
