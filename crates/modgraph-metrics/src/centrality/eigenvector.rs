//! Eigenvector centrality via undamped power iteration.
//!
//! Each round a vertex's score becomes the sum of its predecessors' scores,
//! and the vector is rescaled to sum to 1 (skipped when every score is 0).
//! On acyclic graphs the iteration drains to all zeros; that is the
//! expected result there.

use tracing::{debug, instrument, warn};

use super::PowerIterationResult;
use crate::Adjacency;
use crate::config::EigenvectorConfig;

/// Compute eigenvector centrality for every vertex.
#[must_use]
#[instrument(skip(adj, config))]
#[allow(clippy::cast_precision_loss)]
pub fn eigenvector_centrality(adj: &Adjacency, config: &EigenvectorConfig) -> PowerIterationResult {
    let n = adj.vertex_count();
    if n == 0 {
        return PowerIterationResult::empty();
    }

    let mut scores = vec![1.0 / n as f64; n];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iterations {
        iterations += 1;

        let mut next: Vec<f64> = (0..n)
            .map(|v| adj.predecessors(v).iter().map(|&u| scores[u]).sum())
            .collect();

        let total: f64 = next.iter().sum();
        if total > 0.0 {
            for s in &mut next {
                *s /= total;
            }
        }

        let max_delta = scores
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .fold(0.0_f64, f64::max);

        scores = next;

        if max_delta < config.tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(iterations, "eigenvector centrality converged");
    } else {
        warn!(iterations, "eigenvector centrality hit max_iterations");
    }

    PowerIterationResult {
        scores: scores.into_iter().enumerate().collect(),
        iterations,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modgraph_core::ListDigraph;

    fn run(n: usize, edges: &[(usize, usize)]) -> PowerIterationResult {
        let g = ListDigraph::from_edges(n, edges).expect("graph");
        eigenvector_centrality(&Adjacency::capture(&g), &EigenvectorConfig::default())
    }

    #[test]
    fn cycle_is_uniform_and_stable() {
        let ev = run(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(ev.converged);
        assert_eq!(ev.iterations, 1);
        for v in 0..4 {
            assert!((ev.scores[&v] - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn acyclic_graph_drains_to_zero() {
        let ev = run(4, &[(0, 1), (0, 2), (0, 3)]);
        assert!(ev.converged);
        assert!(ev.scores.values().all(|s| s.abs() < 1e-12));
    }

    #[test]
    fn bidirectional_pair_is_balanced() {
        let ev = run(2, &[(0, 1), (1, 0)]);
        assert!((ev.scores[&0] - 0.5).abs() < 1e-12);
        assert!((ev.scores[&1] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn edgeless_graph_goes_to_zero() {
        let ev = run(3, &[]);
        assert!(ev.converged);
        assert_eq!(ev.scores.len(), 3);
        assert!(ev.scores.values().all(|s| s.abs() < 1e-12));
    }
}
