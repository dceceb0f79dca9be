//! Graph file loading.
//!
//! ```json
//! {
//!   "vertex_count": 3,
//!   "labels": {"0": "a"},
//!   "vertex_weights": {"0": 1.5},
//!   "edges": [{"source": 0, "target": 1, "weight": 2.0}]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use modgraph_core::{Digraph, EdgeStorage, GraphError, ListDigraph, MatrixDigraph, Representation};
use modgraph_metrics::MetricsAnalyzer;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphFile {
    pub vertex_count: usize,
    #[serde(default)]
    pub labels: BTreeMap<usize, String>,
    #[serde(default)]
    pub vertex_weights: BTreeMap<usize, f64>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeRecord {
    pub source: usize,
    pub target: usize,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl GraphFile {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a graph file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read graph {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid graph file {}", path.display()))
    }

    /// Build a graph on storage `S`. Edges are added in file order;
    /// duplicates collapse and a later weight overwrites an earlier one.
    pub fn build<S: EdgeStorage>(&self) -> Result<Digraph<S>, GraphError> {
        let mut graph = Digraph::<S>::new(self.vertex_count);
        for (&v, label) in &self.labels {
            graph.set_vertex_label(v, label.clone())?;
        }
        for (&v, &weight) in &self.vertex_weights {
            graph.set_vertex_weight(v, weight)?;
        }
        for edge in &self.edges {
            graph.add_edge(edge.source, edge.target)?;
            if let Some(weight) = edge.weight {
                graph.set_edge_weight(edge.source, edge.target, weight)?;
            }
        }
        debug!(
            representation = %S::KIND,
            vertex_count = graph.vertex_count(),
            edge_count = graph.edge_count(),
            "graph file loaded"
        );
        Ok(graph)
    }

    pub fn build_as(&self, representation: Representation) -> Result<LoadedGraph, GraphError> {
        Ok(match representation {
            Representation::List => LoadedGraph::List(self.build()?),
            Representation::Matrix => LoadedGraph::Matrix(self.build()?),
        })
    }
}

/// A graph in whichever storage the caller picked.
#[derive(Debug, Clone)]
pub enum LoadedGraph {
    List(ListDigraph),
    Matrix(MatrixDigraph),
}

/// Graph-level facts reported by `modgraph info`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Shape {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub is_empty: bool,
    pub is_complete: bool,
    pub is_strongly_connected: bool,
}

impl LoadedGraph {
    pub const fn representation(&self) -> Representation {
        match self {
            Self::List(_) => Representation::List,
            Self::Matrix(_) => Representation::Matrix,
        }
    }

    pub fn analyzer(&self) -> MetricsAnalyzer<'_> {
        match self {
            Self::List(g) => MetricsAnalyzer::new(g),
            Self::Matrix(g) => MetricsAnalyzer::new(g),
        }
    }

    pub fn shape(&self) -> Shape {
        fn of<S: EdgeStorage>(g: &Digraph<S>) -> Shape {
            Shape {
                vertex_count: g.vertex_count(),
                edge_count: g.edge_count(),
                is_empty: g.is_empty(),
                is_complete: g.is_complete(),
                is_strongly_connected: g.is_strongly_connected(),
            }
        }
        match self {
            Self::List(g) => of(g),
            Self::Matrix(g) => of(g),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "vertex_count": 3,
        "labels": {"0": "hub", "2": "sink"},
        "vertex_weights": {"1": 1.5},
        "edges": [
            {"source": 0, "target": 1, "weight": 2.0},
            {"source": 1, "target": 2},
            {"source": 0, "target": 1, "weight": 4.0}
        ]
    }"#;

    #[test]
    fn parses_string_keyed_maps() {
        let file = GraphFile::parse(SAMPLE).expect("parse");
        assert_eq!(file.vertex_count, 3);
        assert_eq!(file.labels[&2], "sink");
        assert_eq!(file.edges[1].weight, None);
    }

    #[test]
    fn builds_both_storages_identically() {
        let file = GraphFile::parse(SAMPLE).expect("parse");
        let list: ListDigraph = file.build().expect("list");
        let matrix: MatrixDigraph = file.build().expect("matrix");

        assert_eq!(list.edges(), matrix.edges());
        assert_eq!(list.edge_count(), 2);
        assert_eq!(list.edge_weight(0, 1), Ok(4.0));
        assert_eq!(matrix.vertex_weight(1), Ok(1.5));
        assert_eq!(list.vertex_label(0), Ok(Some("hub")));
    }

    #[test]
    fn out_of_range_edge_is_a_graph_error() {
        let file = GraphFile::parse(r#"{"vertex_count": 2, "edges": [{"source": 0, "target": 5}]}"#)
            .expect("parse");
        let err = file.build_as(Representation::List).expect_err("invalid vertex");
        assert_eq!(
            err,
            GraphError::InvalidVertex {
                vertex: 5,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(GraphFile::parse(r#"{"vertex_count": 1, "directed": true}"#).is_err());
    }

    #[test]
    fn shape_reports_connectivity() {
        let file = GraphFile::parse(
            r#"{"vertex_count": 2, "edges": [{"source": 0, "target": 1}, {"source": 1, "target": 0}]}"#,
        )
        .expect("parse");
        let shape = file.build_as(Representation::Matrix).expect("build").shape();
        assert!(shape.is_complete);
        assert!(shape.is_strongly_connected);
        assert!(!shape.is_empty);
    }
}
