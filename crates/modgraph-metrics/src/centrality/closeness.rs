use tracing::instrument;

use crate::{Adjacency, VertexScores};

/// Out-distance closeness with the Wasserman–Faust correction.
///
/// For a vertex reaching `r` others at total distance `d`, the score is
/// `(r / (n - 1)) * (r / d)`, so a vertex reaching few others is not
/// rewarded for their proximity. Vertices reaching nobody score 0, as does
/// every vertex of a graph with at most one vertex.
#[must_use]
#[instrument(skip(adj))]
#[allow(clippy::cast_precision_loss)]
pub fn closeness_centrality(adj: &Adjacency) -> VertexScores {
    let n = adj.vertex_count();
    if n <= 1 {
        return (0..n).map(|v| (v, 0.0)).collect();
    }

    (0..n)
        .map(|v| {
            let (reached, total) = adj
                .bfs_distances(v)
                .into_iter()
                .flatten()
                .filter(|&d| d > 0)
                .fold((0_usize, 0_usize), |(r, t), d| (r + 1, t + d));

            let score = if total == 0 {
                0.0
            } else {
                let r = reached as f64;
                (r / (n - 1) as f64) * (r / total as f64)
            };
            (v, score)
        })
        .collect()
}
