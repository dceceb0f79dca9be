//! PageRank by damped power iteration.
//!
//! ```text
//! PR(v) = (1 - d) / N + d * Σ PR(u) / out_degree(u)   for each u → v
//! ```
//!
//! Rank held by a vertex without successors is not redistributed: it leaks
//! out of the system every round, so scores on graphs with sinks sum to
//! less than 1. Iteration stops once the largest per-vertex change drops
//! below the tolerance.

use tracing::{debug, instrument, warn};

use super::PowerIterationResult;
use crate::Adjacency;
use crate::config::PageRankConfig;

/// Compute PageRank for every vertex.
#[must_use]
#[instrument(skip(adj, config))]
#[allow(clippy::cast_precision_loss)]
pub fn pagerank(adj: &Adjacency, config: &PageRankConfig) -> PowerIterationResult {
    let n = adj.vertex_count();
    if n == 0 {
        return PowerIterationResult::empty();
    }

    let n_f64 = n as f64;
    let base = (1.0 - config.damping) / n_f64;
    let mut ranks = vec![1.0 / n_f64; n];
    let mut next = vec![0.0_f64; n];

    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..config.max_iterations {
        iterations += 1;

        for (v, slot) in next.iter_mut().enumerate() {
            let inflow: f64 = adj
                .predecessors(v)
                .iter()
                .map(|&u| ranks[u] / adj.out_degree(u) as f64)
                .sum();
            *slot = config.damping.mul_add(inflow, base);
        }

        let max_delta = ranks
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .fold(0.0_f64, f64::max);

        std::mem::swap(&mut ranks, &mut next);

        if max_delta < config.tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(iterations, "pagerank converged");
    } else {
        warn!(iterations, tolerance = config.tolerance, "pagerank hit max_iterations");
    }

    PowerIterationResult {
        scores: ranks.into_iter().enumerate().collect(),
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
        pagerank(&Adjacency::capture(&g), &PageRankConfig::default())
    }

    #[test]
    fn cycle_is_uniform() {
        let pr = run(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(pr.converged);
        for v in 0..3 {
            assert!((pr.scores[&v] - 1.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn sinks_leak_rank() {
        // 0 → 1: vertex 1 keeps what it receives but passes nothing on.
        let pr = run(2, &[(0, 1)]);
        assert!(pr.converged);
        let base = 0.15 / 2.0;
        assert!((pr.scores[&0] - base).abs() < 1e-9);
        assert!((pr.scores[&1] - 0.85f64.mul_add(base, base)).abs() < 1e-9);
        assert!(pr.scores.values().sum::<f64>() < 1.0);
    }

    #[test]
    fn star_leaves_outrank_hub() {
        let pr = run(4, &[(0, 1), (0, 2), (0, 3)]);
        assert!(pr.scores[&1] > pr.scores[&0]);
        assert!((pr.scores[&1] - pr.scores[&3]).abs() < 1e-12);
    }

    #[test]
    fn iteration_budget_is_reported() {
        let g = ListDigraph::from_edges(3, &[(0, 1), (1, 2)]).expect("graph");
        let config = PageRankConfig {
            max_iterations: 1,
            ..PageRankConfig::default()
        };
        let pr = pagerank(&Adjacency::capture(&g), &config);
        assert_eq!(pr.iterations, 1);
        assert!(!pr.converged);
    }

    #[test]
    fn empty_graph() {
        let pr = run(0, &[]);
        assert!(pr.scores.is_empty());
        assert_eq!(pr.iterations, 0);
        assert!(pr.converged);
    }
}
