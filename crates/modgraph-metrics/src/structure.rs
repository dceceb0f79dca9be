//! Structural cohesion metrics.
//!
//! Whole-graph measures of how tightly the graph hangs together: density,
//! clustering, degree assortativity, reciprocity, and the distance profile
//! (average path length and diameter). Neighborhoods ignore direction
//! (successors ∪ predecessors); distances follow edge direction.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::instrument;

use crate::{Adjacency, VertexScores};

/// Local, average and global clustering coefficients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clustering {
    pub local: VertexScores,
    pub average: f64,
    /// `3 × triangles / triads`, counted per vertex over unordered neighbor
    /// pairs. Each triangle is seen from all three corners and then
    /// multiplied by 3 again, so this is not bounded by 1 on dense graphs.
    pub global: f64,
}

/// Every structural metric for one graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureReport {
    pub density: f64,
    pub clustering_local: VertexScores,
    pub clustering_average: f64,
    pub clustering_global: f64,
    pub assortativity: f64,
    pub reciprocity: f64,
    pub average_path_length: f64,
    pub diameter: i64,
}

/// `E / (V·(V − 1))`; 0 for graphs with at most one vertex.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn density(adj: &Adjacency) -> f64 {
    let n = adj.vertex_count();
    if n <= 1 {
        return 0.0;
    }
    adj.edge_count() as f64 / (n * (n - 1)) as f64
}

/// Clustering coefficients over undirected neighborhoods.
///
/// A vertex with neighborhood size `k` scores the number of ordered
/// neighbor pairs `(u, w)` joined by an edge `u → w`, divided by `k(k − 1)`.
#[must_use]
#[instrument(skip(adj))]
#[allow(clippy::cast_precision_loss)]
pub fn clustering(adj: &Adjacency) -> Clustering {
    let n = adj.vertex_count();
    let mut local = VertexScores::new();
    let mut triangles = 0_usize;
    let mut triads = 0_usize;

    for v in 0..n {
        let neighbors = adj.neighbors(v);
        let k = neighbors.len();

        for (i, &u) in neighbors.iter().enumerate() {
            for &w in &neighbors[i + 1..] {
                triads += 1;
                if adj.has_edge(u, w) || adj.has_edge(w, u) {
                    triangles += 1;
                }
            }
        }

        if k < 2 {
            local.insert(v, 0.0);
            continue;
        }

        let connections = neighbors
            .iter()
            .flat_map(|&u| neighbors.iter().map(move |&w| (u, w)))
            .filter(|&(u, w)| u != w && adj.has_edge(u, w))
            .count();
        local.insert(v, connections as f64 / (k * (k - 1)) as f64);
    }

    let average = if local.is_empty() {
        0.0
    } else {
        local.values().sum::<f64>() / local.len() as f64
    };
    let global = if triads == 0 {
        0.0
    } else {
        (3 * triangles) as f64 / triads as f64
    };

    Clustering {
        local,
        average,
        global,
    }
}

/// Degree assortativity over edge endpoints, using total degree.
///
/// Positive when high-degree vertices link to each other, negative when
/// they link to low-degree vertices. Returns 0 without edges or when the
/// degree variance is not positive.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn assortativity(adj: &Adjacency) -> f64 {
    let m = adj.edge_count();
    if m == 0 {
        return 0.0;
    }

    let (mut products, mut sums, mut squares) = (0.0_f64, 0.0_f64, 0.0_f64);
    for (u, v) in adj.edges() {
        let du = adj.total_degree(u) as f64;
        let dv = adj.total_degree(v) as f64;
        products += du * dv;
        sums += du + dv;
        squares += du.mul_add(du, dv * dv);
    }

    let m = m as f64;
    let mean = sums / (2.0 * m);
    let numerator = mean.mul_add(-mean, products / m);
    let denominator = mean.mul_add(-mean, squares / (2.0 * m));

    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Share of edges `u → v` whose reverse `v → u` also exists.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn reciprocity(adj: &Adjacency) -> f64 {
    let m = adj.edge_count();
    if m == 0 {
        return 0.0;
    }
    let mutual = adj.edges().filter(|&(u, v)| adj.has_edge(v, u)).count();
    mutual as f64 / m as f64
}

/// Mean directed distance over ordered pairs `(s, t)` with `t` reachable
/// from `s`. Unreachable pairs are ignored; 0 when no pair is reachable.
#[must_use]
#[instrument(skip(adj))]
pub fn average_path_length(adj: &Adjacency) -> f64 {
    PathSummary::compute(adj).average()
}

/// Largest finite directed distance.
///
/// 0 for graphs with at most one vertex and -1 when no vertex reaches any
/// other.
#[must_use]
#[instrument(skip(adj))]
pub fn diameter(adj: &Adjacency) -> i64 {
    PathSummary::compute(adj).diameter()
}

/// Compute every structural metric.
#[must_use]
#[instrument(skip_all)]
pub fn all(adj: &Adjacency) -> StructureReport {
    let clustering = clustering(adj);
    let paths = PathSummary::compute(adj);
    StructureReport {
        density: density(adj),
        clustering_local: clustering.local,
        clustering_average: clustering.average,
        clustering_global: clustering.global,
        assortativity: assortativity(adj),
        reciprocity: reciprocity(adj),
        average_path_length: paths.average(),
        diameter: paths.diameter(),
    }
}

/// How often each positive distance occurs across all BFS runs.
///
/// Shared by [`average_path_length`] and [`diameter`] so [`all`] walks the
/// graph once.
struct PathSummary {
    vertex_count: usize,
    histogram: BTreeMap<usize, usize>,
}

impl PathSummary {
    fn compute(adj: &Adjacency) -> Self {
        let mut histogram = BTreeMap::new();
        let n = adj.vertex_count();
        if n > 1 {
            for s in 0..n {
                for d in adj.bfs_distances(s).into_iter().flatten().filter(|&d| d > 0) {
                    *histogram.entry(d).or_insert(0) += 1;
                }
            }
        }
        Self {
            vertex_count: n,
            histogram,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn average(&self) -> f64 {
        let pairs: usize = self.histogram.values().sum();
        if pairs == 0 {
            return 0.0;
        }
        let total: usize = self.histogram.iter().map(|(d, count)| d * count).sum();
        total as f64 / pairs as f64
    }

    fn diameter(&self) -> i64 {
        if self.vertex_count <= 1 {
            return 0;
        }
        self.histogram
            .keys()
            .next_back()
            .and_then(|&d| i64::try_from(d).ok())
            .unwrap_or(-1)
    }
}
