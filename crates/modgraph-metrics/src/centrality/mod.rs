//! Centrality metrics.
//!
//! Each metric answers a different question about vertex importance:
//!
//! - **Degree** (`degree`): how many direct connections does a vertex have?
//! - **Betweenness** (`betweenness`): which vertices sit on shortest paths
//!   between others?
//! - **Closeness** (`closeness`): how few hops does a vertex need to reach
//!   the rest of the graph?
//! - **PageRank** (`pagerank`) and **eigenvector** (`eigenvector`): which
//!   vertices are pointed to by other important vertices?
//!
//! All metrics take an [`Adjacency`] snapshot and return [`VertexScores`].
//!
//! ```
//! use modgraph_core::ListDigraph;
//! use modgraph_metrics::{Adjacency, AnalysisConfig, centrality};
//!
//! let g = ListDigraph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
//! let report = centrality::all(&Adjacency::capture(&g), &AnalysisConfig::default());
//! assert!(report.betweenness[&1] > report.betweenness[&0]);
//! ```

pub mod betweenness;
pub mod closeness;
pub mod degree;
pub mod eigenvector;
pub mod pagerank;

use serde::Serialize;
use tracing::instrument;

use crate::{Adjacency, AnalysisConfig, VertexScores};

pub use betweenness::betweenness_centrality;
pub use closeness::closeness_centrality;
pub use degree::{DegreeCentrality, degree_centrality};
pub use eigenvector::eigenvector_centrality;
pub use pagerank::pagerank;

/// Outcome of an iterative score computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerIterationResult {
    pub scores: VertexScores,
    /// Rounds performed.
    pub iterations: usize,
    /// Whether the tolerance was met within the iteration budget.
    pub converged: bool,
}

impl PowerIterationResult {
    pub(crate) const fn empty() -> Self {
        Self {
            scores: VertexScores::new(),
            iterations: 0,
            converged: true,
        }
    }
}

/// Every centrality metric for one graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CentralityReport {
    pub degree_in: VertexScores,
    pub degree_out: VertexScores,
    pub degree_total: VertexScores,
    pub betweenness: VertexScores,
    pub closeness: VertexScores,
    pub pagerank: VertexScores,
    pub eigenvector: VertexScores,
}

/// Compute every centrality metric.
#[must_use]
#[instrument(skip_all)]
pub fn all(adj: &Adjacency, config: &AnalysisConfig) -> CentralityReport {
    let degree = degree_centrality(adj);
    CentralityReport {
        degree_in: degree.in_degree,
        degree_out: degree.out_degree,
        degree_total: degree.total,
        betweenness: betweenness_centrality(adj),
        closeness: closeness_centrality(adj),
        pagerank: pagerank(adj, &config.pagerank).scores,
        eigenvector: eigenvector_centrality(adj, &config.eigenvector).scores,
    }
}
