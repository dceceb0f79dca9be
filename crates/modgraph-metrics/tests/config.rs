use std::fs;

use modgraph_core::ListDigraph;
use modgraph_metrics::{AnalysisConfig, DetectionMethod, MetricsAnalyzer};
use tempfile::TempDir;

const FULL: &str = r#"
ranking_size = 2

[pagerank]
damping = 0.5
tolerance = 1e-9
max_iterations = 500

[eigenvector]
tolerance = 1e-9
max_iterations = 500

[community]
method = "greedy_modularity"
max_iterations = 10
seed = 7
"#;

#[test]
fn full_file_round_trips_into_analysis() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("modgraph.toml");
    fs::write(&path, FULL).expect("write config");

    let config = AnalysisConfig::load(&path).expect("load config");
    assert_eq!(config.ranking_size, 2);
    assert_eq!(config.pagerank.max_iterations, 500);
    assert_eq!(config.community.method, DetectionMethod::GreedyModularity);
    assert_eq!(config.community.seed, 7);

    let g = ListDigraph::from_edges(4, &[(0, 1), (1, 0), (2, 3), (3, 2), (1, 2)]).expect("graph");
    let report = MetricsAnalyzer::new(&g).with_config(config).analyze_all();
    assert_eq!(report.community.method, DetectionMethod::GreedyModularity);
    assert_eq!(report.rankings.top_closeness.len(), 2);
}

#[test]
fn damping_changes_pagerank() {
    let g = ListDigraph::from_edges(3, &[(0, 1), (1, 2)]).expect("graph");
    let default = MetricsAnalyzer::new(&g).analyze_centrality_only();

    let config = AnalysisConfig::from_toml_str("[pagerank]\ndamping = 0.5\n").expect("parse");
    let damped = MetricsAnalyzer::new(&g).with_config(config).analyze_centrality_only();

    // The source only ever holds the teleport share.
    assert!((default.pagerank[&0] - 0.15 / 3.0).abs() < 1e-12);
    assert!((damped.pagerank[&0] - 0.5 / 3.0).abs() < 1e-12);
}

#[test]
fn malformed_file_reports_path() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "ranking_size = \"ten\"\n").expect("write config");

    let err = AnalysisConfig::load(&path).expect_err("should fail");
    assert!(format!("{err:#}").contains("broken.toml"));
}
