#![forbid(unsafe_code)]
//! modgraph-metrics library.
//!
//! Centrality, structural cohesion and community analysis over a
//! [`modgraph_core::Digraph`], plus the [`MetricsAnalyzer`] that runs every
//! engine and assembles one serializable [`AnalysisReport`].
//!
//! # Conventions
//!
//! - **Scores**: per-vertex results are [`VertexScores`], ordered by vertex
//!   index so serialized output is deterministic.
//! - **Degenerate input**: empty or edgeless graphs never fail; every metric
//!   resolves to a defined value (usually 0.0).
//! - **Logging**: `tracing` macros only; engines emit `debug!` for
//!   convergence facts and `warn!` when an iteration budget runs out.
//!
//! ```
//! use modgraph_core::ListDigraph;
//! use modgraph_metrics::MetricsAnalyzer;
//!
//! let g = ListDigraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
//! let report = MetricsAnalyzer::new(&g).analyze_all();
//! assert_eq!(report.basic_info.num_edges, 3);
//! assert_eq!(report.rankings.top_pagerank.len(), 3);
//! ```

use std::collections::BTreeMap;

pub mod adjacency;
pub mod analyzer;
pub mod centrality;
pub mod community;
pub mod config;
pub mod error;
pub mod observer;
pub mod structure;

/// Vertex index → score.
pub type VertexScores = BTreeMap<usize, f64>;

pub use adjacency::Adjacency;
pub use analyzer::{AnalysisReport, BasicInfo, Metric, MetricsAnalyzer, RankedVertex, Rankings};
pub use centrality::CentralityReport;
pub use community::{Communities, CommunityReport, DetectionMethod};
pub use config::AnalysisConfig;
pub use error::MetricsError;
pub use observer::{AnalysisObserver, Stage, StageTimings};
pub use structure::StructureReport;
