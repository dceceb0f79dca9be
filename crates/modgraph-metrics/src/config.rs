//! Analysis configuration.
//!
//! Every field has a default, so an empty TOML document (or none at all)
//! yields the standard settings: damping 0.85, tolerance 1e-6, 100
//! iterations, label propagation seeded with 42, top-10 rankings.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::community::DetectionMethod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Entries kept in each `top_<metric>` ranking of the aggregate report.
    #[serde(default = "default_ranking_size")]
    pub ranking_size: usize,
    #[serde(default)]
    pub pagerank: PageRankConfig,
    #[serde(default)]
    pub eigenvector: EigenvectorConfig,
    #[serde(default)]
    pub community: CommunityConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ranking_size: default_ranking_size(),
            pagerank: PageRankConfig::default(),
            eigenvector: EigenvectorConfig::default(),
            community: CommunityConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or a field has
    /// the wrong type.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("failed to parse analysis config")
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("invalid config {}", path.display()))
    }
}

/// Configuration for PageRank computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRankConfig {
    /// Damping factor (probability of following a link vs teleporting).
    #[serde(default = "default_damping")]
    pub damping: f64,
    /// Stop when the largest per-vertex change is below this value.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Configuration for eigenvector centrality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenvectorConfig {
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

/// Configuration for community detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityConfig {
    #[serde(default)]
    pub method: DetectionMethod,
    /// Upper bound on full sweeps over the vertex set.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Seed for the sweep-order shuffle; equal seeds give equal partitions.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            method: DetectionMethod::default(),
            max_iterations: default_max_iterations(),
            seed: default_seed(),
        }
    }
}

const fn default_ranking_size() -> usize {
    10
}

const fn default_damping() -> f64 {
    0.85
}

const fn default_tolerance() -> f64 {
    1e-6
}

const fn default_max_iterations() -> usize {
    100
}

const fn default_seed() -> u64 {
    42
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = AnalysisConfig::from_toml_str("").expect("empty TOML is valid");
        assert_eq!(cfg, AnalysisConfig::default());
        assert!((cfg.pagerank.damping - 0.85).abs() < f64::EPSILON);
        assert_eq!(cfg.community.method, DetectionMethod::LabelPropagation);
        assert_eq!(cfg.ranking_size, 10);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AnalysisConfig::from_toml_str(
            r#"
ranking_size = 3

[pagerank]
damping = 0.5

[community]
method = "greedy_modularity"
seed = 7
"#,
        )
        .expect("valid TOML");

        assert_eq!(cfg.ranking_size, 3);
        assert!((cfg.pagerank.damping - 0.5).abs() < f64::EPSILON);
        assert_eq!(cfg.pagerank.max_iterations, 100);
        assert_eq!(cfg.community.method, DetectionMethod::GreedyModularity);
        assert_eq!(cfg.community.seed, 7);
        assert_eq!(cfg.community.max_iterations, 100);
        assert_eq!(cfg.eigenvector, EigenvectorConfig::default());
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = AnalysisConfig::from_toml_str("[community]\nmethod = \"louvain\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[eigenvector]\nmax_iterations = 5").expect("write");
        let cfg = AnalysisConfig::load(file.path()).expect("load");
        assert_eq!(cfg.eigenvector.max_iterations, 5);

        let missing = AnalysisConfig::load(Path::new("/definitely/not/here.toml"));
        assert!(missing.is_err());
    }
}
