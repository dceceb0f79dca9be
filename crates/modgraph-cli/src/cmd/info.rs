//! `modgraph info`: graph shape without running the metric engines.


use clap::Args;
use modgraph_core::Representation;
use serde::Serialize;

use super::GraphArgs;
use crate::input::Shape;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}

#[derive(Debug, Serialize)]
pub struct InfoOutput {
    pub representation: Representation,
    #[serde(flatten)]
    pub shape: Shape,
    pub density: f64,
}

pub fn run_info(args: &InfoArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = args.graph.load(output)?;
    let payload = InfoOutput {
        representation: graph.representation(),
        shape: graph.shape(),
        density: graph.analyzer().basic_info().density,
    };

    render_mode(
        output,
        &payload,
        |p, w| {
            writeln!(w, "representation={}", p.representation)?;
            writeln!(w, "vertices={}", p.shape.vertex_count)?;
            writeln!(w, "edges={}", p.shape.edge_count)?;
            writeln!(w, "density={:.4}", p.density)?;
            writeln!(w, "empty={}", p.shape.is_empty)?;
            writeln!(w, "complete={}", p.shape.is_complete)?;
            writeln!(w, "strongly_connected={}", p.shape.is_strongly_connected)
        },
        |p, w| {
            let yes_no = |b: bool| if b { "yes" } else { "no" };
            pretty_section(w, "Graph")?;
            pretty_kv(w, "Representation", p.representation.as_str())?;
            pretty_kv(w, "Vertices", p.shape.vertex_count.to_string())?;
            pretty_kv(w, "Edges", p.shape.edge_count.to_string())?;
            pretty_kv(w, "Density", format!("{:.4}", p.density))?;
            pretty_kv(w, "Empty", yes_no(p.shape.is_empty))?;
            pretty_kv(w, "Complete", yes_no(p.shape.is_complete))?;
            pretty_kv(w, "Strongly connected", yes_no(p.shape.is_strongly_connected))
        },
    )
}
