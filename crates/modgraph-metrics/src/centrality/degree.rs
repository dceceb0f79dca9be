use tracing::instrument;

use crate::{Adjacency, VertexScores};

/// Normalized in, out and total degree of every vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DegreeCentrality {
    pub in_degree: VertexScores,
    pub out_degree: VertexScores,
    pub total: VertexScores,
}

/// Degree centrality normalized by the largest possible degree.
///
/// In and out degree are divided by `n - 1`, total degree by `2(n - 1)`.
/// Graphs with fewer than two vertices yield empty maps.
#[must_use]
#[instrument(skip(adj))]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(adj: &Adjacency) -> DegreeCentrality {
    let n = adj.vertex_count();
    if n <= 1 {
        return DegreeCentrality::default();
    }

    let max_degree = (n - 1) as f64;
    let mut result = DegreeCentrality::default();
    for v in 0..n {
        result.in_degree.insert(v, adj.in_degree(v) as f64 / max_degree);
        result.out_degree.insert(v, adj.out_degree(v) as f64 / max_degree);
        result
            .total
            .insert(v, adj.total_degree(v) as f64 / (2.0 * max_degree));
    }
    result
}
