//! `modgraph community`: members of one detected community.


use clap::Args;
use modgraph_metrics::DetectionMethod;
use serde::Serialize;

use super::{AnalysisArgs, GraphArgs};
use crate::output::{CliError, OutputMode, pretty_kv, pretty_section, render_error, render_mode};

#[derive(Args, Debug, Clone)]
pub struct CommunityArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Community id, as numbered in `modgraph analyze`.
    #[arg(long)]
    pub id: usize,
}

#[derive(Debug, Serialize)]
pub struct Member {
    pub vertex: usize,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct CommunityOutput {
    pub community: usize,
    pub method: DetectionMethod,
    pub members: Vec<Member>,
}

pub fn run_community(args: &CommunityArgs, output: OutputMode) -> anyhow::Result<()> {
    let config = args.analysis.resolve()?;
    let method = config.community.method;
    let graph = args.graph.load(output)?;
    let members = graph.analyzer().with_config(config).community_members(args.id);

    // Ids are dense from 0, so an empty community means the id is unused.
    if members.is_empty() {
        render_error(
            output,
            &CliError::new(format!("community {} does not exist", args.id)),
        )?;
        anyhow::bail!("community {} not found", args.id);
    }

    let payload = CommunityOutput {
        community: args.id,
        method,
        members: members
            .into_iter()
            .map(|(vertex, label)| Member { vertex, label })
            .collect(),
    };
    render_mode(
        output,
        &payload,
        |p, w| {
            for m in &p.members {
                writeln!(w, "{}\t{}", m.vertex, m.label)?;
            }
            Ok(())
        },
        |p, w| {
            pretty_section(w, &format!("Community {}", p.community))?;
            pretty_kv(w, "Method", p.method.as_str())?;
            pretty_kv(w, "Size", p.members.len().to_string())?;
            for m in &p.members {
                writeln!(w, "  {} (V{})", m.label, m.vertex)?;
            }
            Ok(())
        },
    )
}
