//! Betweenness centrality via Brandes' algorithm.
//!
//! For each source `s` a BFS records shortest-path counts (`sigma`) and the
//! predecessors of every vertex on those paths; dependencies are then
//! accumulated in reverse discovery order. Directed and unweighted, so the
//! whole pass costs O(V·(V + E)).
//!
//! Scores are normalized by `(n - 1)(n - 2)`, the number of ordered pairs
//! that can route through a vertex. With two or fewer vertices no vertex
//! can lie strictly between two others and every score is 0.

use std::collections::VecDeque;

use tracing::instrument;

use crate::{Adjacency, VertexScores};

/// Compute normalized betweenness centrality for every vertex.
#[must_use]
#[instrument(skip(adj))]
#[allow(clippy::cast_precision_loss)]
pub fn betweenness_centrality(adj: &Adjacency) -> VertexScores {
    let n = adj.vertex_count();
    if n <= 2 {
        return (0..n).map(|v| (v, 0.0)).collect();
    }

    let mut cb = vec![0.0_f64; n];

    for s in 0..n {
        // Vertices in order of discovery (farthest popped first).
        let mut stack: Vec<usize> = Vec::with_capacity(n);
        let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];

        let mut sigma = vec![0.0_f64; n];
        sigma[s] = 1.0;

        let mut dist: Vec<Option<usize>> = vec![None; n];
        dist[s] = Some(0);

        let mut queue = VecDeque::from([s]);
        while let Some(v) = queue.pop_front() {
            stack.push(v);
            let Some(dv) = dist[v] else { continue };

            for &w in adj.successors(v) {
                if dist[w].is_none() {
                    dist[w] = Some(dv + 1);
                    queue.push_back(w);
                }
                if dist[w] == Some(dv + 1) {
                    sigma[w] += sigma[v];
                    preds[w].push(v);
                }
            }
        }

        let mut delta = vec![0.0_f64; n];
        while let Some(w) = stack.pop() {
            for &v in &preds[w] {
                delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
            }
            if w != s {
                cb[w] += delta[w];
            }
        }
    }

    let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
    cb.into_iter()
        .enumerate()
        .map(|(v, score)| (v, score * scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use modgraph_core::{ListDigraph, MatrixDigraph};

    fn scores(n: usize, edges: &[(usize, usize)]) -> VertexScores {
        let g = ListDigraph::from_edges(n, edges).expect("graph");
        betweenness_centrality(&Adjacency::capture(&g))
    }

    #[test]
    fn chain_middle_carries_the_path() {
        // 0 → 1 → 2: the pair (0, 2) routes through 1.
        let bc = scores(3, &[(0, 1), (1, 2)]);
        assert!((bc[&1] - 0.5).abs() < 1e-12);
        assert!(bc[&0].abs() < 1e-12);
        assert!(bc[&2].abs() < 1e-12);
    }

    #[test]
    fn parallel_paths_split_credit() {
        // 0 → {1, 2} → 3: each middle vertex carries half of (0, 3).
        let bc = scores(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let expected = 0.5 / 6.0;
        assert!((bc[&1] - expected).abs() < 1e-12);
        assert!((bc[&2] - expected).abs() < 1e-12);
    }

    #[test]
    fn star_is_all_zero() {
        let bc = scores(4, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(bc.len(), 4);
        assert!(bc.values().all(|s| s.abs() < 1e-12));
    }

    #[test]
    fn two_vertices_are_zero() {
        let bc = scores(2, &[(0, 1), (1, 0)]);
        assert_eq!(bc, VertexScores::from([(0, 0.0), (1, 0.0)]));
        assert!(scores(0, &[]).is_empty());
    }

    #[test]
    fn storage_does_not_change_result() {
        let edges = [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)];
        let list = ListDigraph::from_edges(5, &edges).expect("graph");
        let matrix = MatrixDigraph::from_edges(5, &edges).expect("graph");
        assert_eq!(
            betweenness_centrality(&Adjacency::capture(&list)),
            betweenness_centrality(&Adjacency::capture(&matrix))
        );
    }
}
