//! Adjacency-list edge storage.

use std::collections::HashMap;

use super::{EdgeStorage, Representation};

/// Per-vertex successor lists plus a weight map keyed by `(u, v)`.
///
/// Successor lists are kept sorted, so lookups are a binary search and
/// iteration order matches [`super::AdjacencyMatrix`]. Suited to sparse
/// graphs: memory is O(V + E).
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    successors: Vec<Vec<usize>>,
    weights: HashMap<(usize, usize), f64>,
}

impl AdjacencyList {
    /// The sorted successor list of `u`, borrowed.
    #[must_use]
    pub fn successors_of(&self, u: usize) -> &[usize] {
        &self.successors[u]
    }
}

impl EdgeStorage for AdjacencyList {
    const KIND: Representation = Representation::List;

    fn with_vertices(vertex_count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); vertex_count],
            weights: HashMap::new(),
        }
    }

    fn contains(&self, u: usize, v: usize) -> bool {
        self.successors[u].binary_search(&v).is_ok()
    }

    fn insert(&mut self, u: usize, v: usize) -> bool {
        match self.successors[u].binary_search(&v) {
            Ok(_) => false,
            Err(pos) => {
                self.successors[u].insert(pos, v);
                self.weights.insert((u, v), 0.0);
                true
            }
        }
    }

    fn remove(&mut self, u: usize, v: usize) -> bool {
        match self.successors[u].binary_search(&v) {
            Ok(pos) => {
                self.successors[u].remove(pos);
                self.weights.remove(&(u, v));
                true
            }
            Err(_) => false,
        }
    }

    fn out_degree(&self, u: usize) -> usize {
        self.successors[u].len()
    }

    // O(E): every list has to be consulted.
    fn in_degree(&self, u: usize) -> usize {
        self.successors
            .iter()
            .filter(|list| list.binary_search(&u).is_ok())
            .count()
    }

    fn successors(&self, u: usize) -> Vec<usize> {
        self.successors[u].clone()
    }

    fn predecessors(&self, u: usize) -> Vec<usize> {
        self.successors
            .iter()
            .enumerate()
            .filter(|(_, list)| list.binary_search(&u).is_ok())
            .map(|(v, _)| v)
            .collect()
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(u, list)| list.iter().map(move |&v| (u, v)))
            .collect()
    }

    fn weight(&self, u: usize, v: usize) -> Option<f64> {
        self.weights.get(&(u, v)).copied()
    }

    fn set_weight(&mut self, u: usize, v: usize, weight: f64) -> bool {
        match self.weights.get_mut(&(u, v)) {
            Some(slot) => {
                *slot = weight;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successors_stay_sorted_regardless_of_insertion_order() {
        let mut list = AdjacencyList::with_vertices(5);
        for v in [4, 1, 3, 2] {
            assert!(list.insert(0, v));
        }
        assert!(!list.insert(0, 3));
        assert_eq!(list.successors_of(0), &[1, 2, 3, 4]);
        assert_eq!(list.out_degree(0), 4);
    }

    #[test]
    fn weights_follow_edge_lifetime() {
        let mut list = AdjacencyList::with_vertices(2);
        assert!(!list.set_weight(0, 1, 1.0));
        list.insert(0, 1);
        assert_eq!(list.weight(0, 1), Some(0.0));
        assert!(list.set_weight(0, 1, -2.0));
        assert_eq!(list.weight(0, 1), Some(-2.0));
        assert!(list.remove(0, 1));
        assert_eq!(list.weight(0, 1), None);
        assert!(!list.remove(0, 1));
    }

    #[test]
    fn in_degree_scans_all_lists() {
        let mut list = AdjacencyList::with_vertices(4);
        list.insert(0, 3);
        list.insert(1, 3);
        list.insert(2, 3);
        list.insert(3, 0);
        assert_eq!(list.in_degree(3), 3);
        assert_eq!(list.predecessors(3), vec![0, 1, 2]);
        assert_eq!(list.edges(), vec![(0, 3), (1, 3), (2, 3), (3, 0)]);
    }
}
