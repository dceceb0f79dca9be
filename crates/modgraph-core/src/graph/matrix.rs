//! Adjacency-matrix edge storage.

use fixedbitset::FixedBitSet;

use super::{EdgeStorage, Representation};

/// An N×N presence bit matrix plus an N×N weight buffer, both row-major.
///
/// Edge lookup, insertion and weight access are O(1); degrees and
/// neighborhoods scan a row or column in O(N). Suited to dense graphs:
/// memory is O(N²) regardless of the edge count.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    order: usize,
    present: FixedBitSet,
    weights: Vec<f64>,
}

impl AdjacencyMatrix {
    const fn cell(&self, u: usize, v: usize) -> usize {
        u * self.order + v
    }
}

impl EdgeStorage for AdjacencyMatrix {
    const KIND: Representation = Representation::Matrix;

    fn with_vertices(vertex_count: usize) -> Self {
        let cells = vertex_count * vertex_count;
        Self {
            order: vertex_count,
            present: FixedBitSet::with_capacity(cells),
            weights: vec![0.0; cells],
        }
    }

    fn contains(&self, u: usize, v: usize) -> bool {
        self.present.contains(self.cell(u, v))
    }

    fn insert(&mut self, u: usize, v: usize) -> bool {
        let cell = self.cell(u, v);
        if self.present.put(cell) {
            return false;
        }
        self.weights[cell] = 0.0;
        true
    }

    fn remove(&mut self, u: usize, v: usize) -> bool {
        let cell = self.cell(u, v);
        if !self.present.contains(cell) {
            return false;
        }
        self.present.set(cell, false);
        self.weights[cell] = 0.0;
        true
    }

    fn out_degree(&self, u: usize) -> usize {
        let row = self.cell(u, 0);
        self.present.count_ones(row..row + self.order)
    }

    fn in_degree(&self, u: usize) -> usize {
        (0..self.order).filter(|&v| self.contains(v, u)).count()
    }

    fn successors(&self, u: usize) -> Vec<usize> {
        (0..self.order).filter(|&v| self.contains(u, v)).collect()
    }

    fn predecessors(&self, u: usize) -> Vec<usize> {
        (0..self.order).filter(|&v| self.contains(v, u)).collect()
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        self.present
            .ones()
            .map(|cell| (cell / self.order, cell % self.order))
            .collect()
    }

    fn weight(&self, u: usize, v: usize) -> Option<f64> {
        let cell = self.cell(u, v);
        self.present.contains(cell).then(|| self.weights[cell])
    }

    fn set_weight(&mut self, u: usize, v: usize, weight: f64) -> bool {
        let cell = self.cell(u, v);
        if !self.present.contains(cell) {
            return false;
        }
        self.weights[cell] = weight;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_and_columns() {
        let mut m = AdjacencyMatrix::with_vertices(3);
        assert!(m.insert(0, 1));
        assert!(m.insert(0, 2));
        assert!(m.insert(2, 1));
        assert!(!m.insert(0, 1));

        assert_eq!(m.out_degree(0), 2);
        assert_eq!(m.out_degree(1), 0);
        assert_eq!(m.in_degree(1), 2);
        assert_eq!(m.successors(0), vec![1, 2]);
        assert_eq!(m.predecessors(1), vec![0, 2]);
        assert_eq!(m.edges(), vec![(0, 1), (0, 2), (2, 1)]);
    }

    #[test]
    fn removal_resets_weight() {
        let mut m = AdjacencyMatrix::with_vertices(2);
        m.insert(1, 0);
        assert!(m.set_weight(1, 0, 4.0));
        assert!(m.remove(1, 0));
        assert!(!m.remove(1, 0));
        assert_eq!(m.weight(1, 0), None);
        m.insert(1, 0);
        assert_eq!(m.weight(1, 0), Some(0.0));
    }

    #[test]
    fn empty_matrix_has_no_edges() {
        let m = AdjacencyMatrix::with_vertices(0);
        assert!(m.edges().is_empty());
    }
}
