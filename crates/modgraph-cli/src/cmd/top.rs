//! `modgraph top`: one ranking.

use std::io::{self, Write};

use clap::Args;
use modgraph_metrics::RankedVertex;
use serde::Serialize;

use super::analyze::write_ranking;
use super::{AnalysisArgs, GraphArgs};
use crate::output::{CliError, OutputMode, pretty_section, render_error, render_mode};

#[derive(Args, Debug, Clone)]
pub struct TopArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Metric to rank by: `degree_in`, `degree_out`, `degree_total`,
    /// `betweenness`, `closeness`, `pagerank`, `eigenvector` or `bridging`.
    #[arg(long)]
    pub metric: String,

    /// Number of vertices to list.
    #[arg(short = 'n', long = "count", default_value_t = 10)]
    pub n: usize,
}

#[derive(Debug, Serialize)]
pub struct TopOutput {
    pub metric: String,
    pub ranking: Vec<RankedVertex>,
}

pub fn run_top(args: &TopArgs, output: OutputMode) -> anyhow::Result<()> {
    let config = args.analysis.resolve()?;
    let graph = args.graph.load(output)?;
    let analyzer = graph.analyzer().with_config(config);

    let ranking = match analyzer.top_n(&args.metric, args.n) {
        Ok(ranking) => ranking,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            return Err(err.into());
        }
    };

    let payload = TopOutput {
        metric: args.metric.clone(),
        ranking,
    };
    render_mode(output, &payload, render_text, |p, w| {
        pretty_section(w, &format!("Top {} by {}", p.ranking.len(), p.metric))?;
        write_ranking(w, &p.ranking)
    })
}

fn render_text(payload: &TopOutput, w: &mut dyn Write) -> io::Result<()> {
    for entry in &payload.ranking {
        writeln!(w, "{}\t{:.6}\t{}", entry.vertex, entry.score, entry.label)?;
    }
    Ok(())
}
