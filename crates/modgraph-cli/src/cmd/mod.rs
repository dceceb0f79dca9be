pub mod analyze;
pub mod community;
pub mod info;
pub mod top;

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use modgraph_core::Representation;
use modgraph_metrics::{AnalysisConfig, DetectionMethod};

use crate::input::{GraphFile, LoadedGraph};
use crate::output::{CliError, OutputMode, render_error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RepresentationArg {
    #[default]
    List,
    Matrix,
}

impl From<RepresentationArg> for Representation {
    fn from(arg: RepresentationArg) -> Self {
        match arg {
            RepresentationArg::List => Self::List,
            RepresentationArg::Matrix => Self::Matrix,
        }
    }
}

/// Graph file and storage selection, shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// JSON graph file.
    pub graph: PathBuf,

    /// Edge storage to load the graph into.
    #[arg(long, value_enum, default_value_t)]
    pub representation: RepresentationArg,
}

impl GraphArgs {
    /// Load the graph, rendering model errors (bad index, self-loop) with
    /// their stable code before failing.
    pub fn load(&self, output: OutputMode) -> anyhow::Result<LoadedGraph> {
        let file = GraphFile::load(&self.graph)?;
        match file.build_as(self.representation.into()) {
            Ok(graph) => Ok(graph),
            Err(err) => {
                render_error(output, &CliError::from(&err))?;
                Err(anyhow::Error::new(err)
                    .context(format!("invalid graph {}", self.graph.display())))
            }
        }
    }
}

/// Analysis tuning flags. Explicit flags override the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct AnalysisArgs {
    /// TOML analysis config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Community detection method: `label_propagation` or `greedy_modularity`.
    #[arg(long)]
    pub method: Option<DetectionMethod>,

    /// Seed for community detection.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl AnalysisArgs {
    pub fn resolve(&self) -> anyhow::Result<AnalysisConfig> {
        let mut config = match &self.config {
            Some(path) => AnalysisConfig::load(path)?,
            None => AnalysisConfig::default(),
        };
        if let Some(method) = self.method {
            config.community.method = method;
        }
        if let Some(seed) = self.seed {
            config.community.seed = seed;
        }
        Ok(config)
    }
}
