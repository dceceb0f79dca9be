//! One-stop analysis of a graph.
//!
//! [`MetricsAnalyzer`] borrows a graph, snapshots its adjacency once, and
//! runs the centrality, structure and community engines over that
//! snapshot. Nothing here mutates the graph.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use modgraph_core::{Digraph, EdgeStorage, Representation, VertexStore};
use serde::{Serialize, Serializer};
use tracing::{debug, instrument};

use crate::centrality::{self, CentralityReport};
use crate::community::{self, CommunityReport};
use crate::structure::{self, StructureReport};
use crate::{Adjacency, AnalysisConfig, AnalysisObserver, MetricsError, Stage, VertexScores};

// ---------------------------------------------------------------------------
// Metric names
// ---------------------------------------------------------------------------

/// A per-vertex metric that can be ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    DegreeIn,
    DegreeOut,
    DegreeTotal,
    Betweenness,
    Closeness,
    PageRank,
    Eigenvector,
    Bridging,
}

impl Metric {
    pub const ALL: [Self; 8] = [
        Self::DegreeIn,
        Self::DegreeOut,
        Self::DegreeTotal,
        Self::Betweenness,
        Self::Closeness,
        Self::PageRank,
        Self::Eigenvector,
        Self::Bridging,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DegreeIn => "degree_in",
            Self::DegreeOut => "degree_out",
            Self::DegreeTotal => "degree_total",
            Self::Betweenness => "betweenness",
            Self::Closeness => "closeness",
            Self::PageRank => "pagerank",
            Self::Eigenvector => "eigenvector",
            Self::Bridging => "bridging",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = MetricsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| MetricsError::UnknownMetric(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// A ranked vertex. Serializes as `[vertex, score, label]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedVertex {
    pub vertex: usize,
    pub score: f64,
    /// The vertex label, or `V{vertex}` when unset.
    pub label: String,
}

impl Serialize for RankedVertex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.vertex, self.score, &self.label).serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rankings {
    pub top_pagerank: Vec<RankedVertex>,
    pub top_betweenness: Vec<RankedVertex>,
    /// Ranked by total degree.
    pub top_degree: Vec<RankedVertex>,
    pub top_closeness: Vec<RankedVertex>,
    pub top_bridging: Vec<RankedVertex>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicInfo {
    pub num_vertices: usize,
    pub num_edges: usize,
    pub density: f64,
}

/// Aggregate result of [`MetricsAnalyzer::analyze_all`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub basic_info: BasicInfo,
    pub centrality: CentralityReport,
    pub structure: StructureReport,
    pub community: CommunityReport,
    pub rankings: Rankings,
}

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

/// Runs every engine over one borrowed graph.
pub struct MetricsAnalyzer<'g> {
    vertices: &'g VertexStore,
    representation: Representation,
    adjacency: Adjacency,
    config: AnalysisConfig,
    observer: Option<&'g dyn AnalysisObserver>,
}

impl fmt::Debug for MetricsAnalyzer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricsAnalyzer")
            .field("representation", &self.representation)
            .field("vertex_count", &self.adjacency.vertex_count())
            .field("edge_count", &self.adjacency.edge_count())
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl<'g> MetricsAnalyzer<'g> {
    /// Snapshot `graph` with the default configuration.
    #[must_use]
    pub fn new<S: EdgeStorage>(graph: &'g Digraph<S>) -> Self {
        Self {
            vertices: graph.vertex_store(),
            representation: graph.representation(),
            adjacency: Adjacency::capture(graph),
            config: AnalysisConfig::default(),
            observer: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: &'g dyn AnalysisObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    #[must_use]
    pub const fn representation(&self) -> Representation {
        self.representation
    }

    #[must_use]
    pub const fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Run every engine and assemble the aggregate report.
    #[must_use]
    #[instrument(skip_all)]
    pub fn analyze_all(&self) -> AnalysisReport {
        debug!(
            representation = %self.representation,
            vertices = self.adjacency.vertex_count(),
            edges = self.adjacency.edge_count(),
            "starting full analysis"
        );

        let centrality = self.stage(Stage::Centrality, || self.analyze_centrality_only());
        let structure = self.stage(Stage::Structure, || self.analyze_structure_only());
        let community = self.stage(Stage::Community, || self.analyze_community_only());

        let n = self.config.ranking_size;
        let rankings = self.stage(Stage::Rankings, || Rankings {
            top_pagerank: self.rank(&centrality.pagerank, n),
            top_betweenness: self.rank(&centrality.betweenness, n),
            top_degree: self.rank(&centrality.degree_total, n),
            top_closeness: self.rank(&centrality.closeness, n),
            top_bridging: self.rank(&community.bridging_ties, n),
        });

        AnalysisReport {
            basic_info: BasicInfo {
                num_vertices: self.adjacency.vertex_count(),
                num_edges: self.adjacency.edge_count(),
                density: structure.density,
            },
            centrality,
            structure,
            community,
            rankings,
        }
    }

    #[must_use]
    pub fn analyze_centrality_only(&self) -> CentralityReport {
        centrality::all(&self.adjacency, &self.config)
    }

    #[must_use]
    pub fn analyze_structure_only(&self) -> StructureReport {
        structure::all(&self.adjacency)
    }

    #[must_use]
    pub fn analyze_community_only(&self) -> CommunityReport {
        community::all(&self.adjacency, &self.config.community)
    }

    #[must_use]
    pub fn basic_info(&self) -> BasicInfo {
        BasicInfo {
            num_vertices: self.adjacency.vertex_count(),
            num_edges: self.adjacency.edge_count(),
            density: structure::density(&self.adjacency),
        }
    }

    /// The `n` highest-scoring vertices for the metric named `metric`.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::UnknownMetric`] if `metric` is not one of the
    /// names listed by [`Metric::ALL`].
    pub fn top_n(&self, metric: &str, n: usize) -> Result<Vec<RankedVertex>, MetricsError> {
        let metric = metric.parse::<Metric>()?;
        Ok(self.top_n_by(metric, n))
    }

    /// Like [`top_n`](Self::top_n) with an already-parsed metric. Only the
    /// requested metric is computed.
    #[must_use]
    pub fn top_n_by(&self, metric: Metric, n: usize) -> Vec<RankedVertex> {
        let scores = self.scores(metric);
        self.rank(&scores, n)
    }

    /// Scores of one metric for every vertex.
    #[must_use]
    pub fn scores(&self, metric: Metric) -> VertexScores {
        let adj = &self.adjacency;
        match metric {
            Metric::DegreeIn => centrality::degree_centrality(adj).in_degree,
            Metric::DegreeOut => centrality::degree_centrality(adj).out_degree,
            Metric::DegreeTotal => centrality::degree_centrality(adj).total,
            Metric::Betweenness => centrality::betweenness_centrality(adj),
            Metric::Closeness => centrality::closeness_centrality(adj),
            Metric::PageRank => centrality::pagerank(adj, &self.config.pagerank).scores,
            Metric::Eigenvector => centrality::eigenvector_centrality(adj, &self.config.eigenvector).scores,
            Metric::Bridging => {
                let communities = community::detect(adj, &self.config.community);
                community::bridging_ties(adj, &communities)
            }
        }
    }

    /// Members of community `id` as `(vertex, label)`, ascending by vertex.
    ///
    /// Detection uses the configured method and seed, so ids agree with the
    /// ones in [`analyze_all`](Self::analyze_all). Unknown ids yield an
    /// empty list.
    #[must_use]
    pub fn community_members(&self, id: usize) -> Vec<(usize, String)> {
        community::detect(&self.adjacency, &self.config.community)
            .into_iter()
            .filter(|&(_, c)| c == id)
            .map(|(v, _)| (v, self.vertices.display_label(v)))
            .collect()
    }

    /// Sort `scores` descending and keep the first `n`. Ties keep ascending
    /// vertex order.
    #[must_use]
    pub fn rank(&self, scores: &VertexScores, n: usize) -> Vec<RankedVertex> {
        let mut sorted: Vec<(usize, f64)> = scores.iter().map(|(&v, &s)| (v, s)).collect();
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
        sorted
            .into_iter()
            .take(n)
            .map(|(vertex, score)| RankedVertex {
                vertex,
                score,
                label: self.vertices.display_label(vertex),
            })
            .collect()
    }

    fn stage<R>(&self, stage: Stage, f: impl FnOnce() -> R) -> R {
        if let Some(observer) = self.observer {
            observer.stage_started(stage);
        }
        let started = Instant::now();
        let result = f();
        if let Some(observer) = self.observer {
            observer.stage_finished(stage, started.elapsed());
        }
        result
    }
}
