//! `modgraph analyze`: the full metrics report.

use std::io::{self, Write};

use clap::Args;
use modgraph_core::Representation;
use modgraph_metrics::{AnalysisObserver, AnalysisReport, RankedVertex};
use serde::Serialize;
use tracing::info;

use super::{AnalysisArgs, GraphArgs};
use crate::output::{OutputMode, pretty_banner, pretty_kv, pretty_section, render_mode};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    /// Entries per ranking (overrides `ranking_size`).
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 timestamp.
    pub generated_at: String,
    pub representation: Representation,
    pub graph_file: String,
}

/// JSON payload: the report with a `metadata` block alongside.
#[derive(Debug, Serialize)]
pub struct AnalyzeOutput {
    pub metadata: Metadata,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

pub fn run_analyze(
    args: &AnalyzeArgs,
    output: OutputMode,
    observer: Option<&dyn AnalysisObserver>,
) -> anyhow::Result<()> {
    let mut config = args.analysis.resolve()?;
    if let Some(top) = args.top {
        config.ranking_size = top;
    }

    let graph = args.graph.load(output)?;
    let mut analyzer = graph.analyzer().with_config(config);
    if let Some(observer) = observer {
        analyzer = analyzer.with_observer(observer);
    }
    let report = analyzer.analyze_all();
    info!(
        vertices = report.basic_info.num_vertices,
        edges = report.basic_info.num_edges,
        communities = report.community.num_communities,
        "analysis complete"
    );

    let payload = AnalyzeOutput {
        metadata: Metadata {
            generated_at: chrono::Utc::now().to_rfc3339(),
            representation: graph.representation(),
            graph_file: args.graph.graph.display().to_string(),
        },
        report,
    };
    render_mode(output, &payload, render_text, render_pretty)
}

fn render_text(payload: &AnalyzeOutput, w: &mut dyn Write) -> io::Result<()> {
    let r = &payload.report;
    let s = &r.structure;
    let c = &r.community;
    writeln!(w, "representation={}", payload.metadata.representation)?;
    writeln!(w, "vertices={}", r.basic_info.num_vertices)?;
    writeln!(w, "edges={}", r.basic_info.num_edges)?;
    writeln!(w, "density={:.4}", s.density)?;
    writeln!(w, "clustering_average={:.4}", s.clustering_average)?;
    writeln!(w, "clustering_global={:.4}", s.clustering_global)?;
    writeln!(w, "assortativity={:.4}", s.assortativity)?;
    writeln!(w, "reciprocity={:.4}", s.reciprocity)?;
    writeln!(w, "average_path_length={:.4}", s.average_path_length)?;
    writeln!(w, "diameter={}", s.diameter)?;
    writeln!(w, "communities={}", c.num_communities)?;
    writeln!(w, "modularity={:.4}", c.modularity)?;
    writeln!(w, "method={}", c.method)?;
    for (name, ranking) in rankings(payload) {
        let entries: Vec<String> = ranking
            .iter()
            .map(|x| format!("{}:{:.4}", x.vertex, x.score))
            .collect();
        writeln!(w, "top_{name}={}", entries.join(","))?;
    }
    Ok(())
}

fn render_pretty(payload: &AnalyzeOutput, w: &mut dyn Write) -> io::Result<()> {
    let r = &payload.report;
    let s = &r.structure;
    let c = &r.community;

    pretty_banner(w, "GRAPH METRICS REPORT")?;
    pretty_kv(w, "Generated", &payload.metadata.generated_at)?;
    pretty_kv(w, "Representation", payload.metadata.representation.as_str())?;
    pretty_kv(w, "Graph file", &payload.metadata.graph_file)?;

    pretty_section(w, "1. BASIC INFORMATION")?;
    pretty_kv(w, "Vertices", r.basic_info.num_vertices.to_string())?;
    pretty_kv(w, "Edges", r.basic_info.num_edges.to_string())?;
    pretty_kv(w, "Density", format!("{:.4}", r.basic_info.density))?;

    pretty_section(w, "2. STRUCTURAL METRICS")?;
    pretty_kv(w, "Clustering (average)", format!("{:.4}", s.clustering_average))?;
    pretty_kv(w, "Clustering (global)", format!("{:.4}", s.clustering_global))?;
    pretty_kv(w, "Assortativity", format!("{:.4}", s.assortativity))?;
    pretty_kv(w, "Reciprocity", format!("{:.4}", s.reciprocity))?;
    pretty_kv(w, "Average path length", format!("{:.2}", s.average_path_length))?;
    let diameter = if s.diameter < 0 {
        "undefined (no finite paths)".to_string()
    } else {
        s.diameter.to_string()
    };
    pretty_kv(w, "Diameter", diameter)?;

    pretty_section(w, "3. COMMUNITIES")?;
    pretty_kv(w, "Method", c.method.as_str())?;
    pretty_kv(w, "Communities", c.num_communities.to_string())?;
    pretty_kv(w, "Modularity", format!("{:.4}", c.modularity))?;
    pretty_kv(w, "Inter-community edges", c.inter_community_edges.total().to_string())?;

    pretty_section(w, "4. MOST CENTRAL VERTICES")?;
    for (name, ranking) in rankings(payload) {
        writeln!(w, "By {name}:")?;
        write_ranking(w, ranking)?;
    }
    Ok(())
}

fn rankings(payload: &AnalyzeOutput) -> [(&'static str, &[RankedVertex]); 5] {
    let r = &payload.report.rankings;
    [
        ("pagerank", r.top_pagerank.as_slice()),
        ("betweenness", r.top_betweenness.as_slice()),
        ("degree", r.top_degree.as_slice()),
        ("closeness", r.top_closeness.as_slice()),
        ("bridging", r.top_bridging.as_slice()),
    ]
}

/// One `  1. label (V3): 0.1234` line per entry.
pub fn write_ranking(w: &mut dyn Write, ranking: &[RankedVertex]) -> io::Result<()> {
    if ranking.is_empty() {
        return writeln!(w, "  (no vertices)");
    }
    for (i, entry) in ranking.iter().enumerate() {
        writeln!(
            w,
            "  {:>2}. {} (V{}): {:.4}",
            i + 1,
            entry.label,
            entry.vertex,
            entry.score
        )?;
    }
    Ok(())
}
