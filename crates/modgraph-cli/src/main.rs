#![forbid(unsafe_code)]

mod cmd;
mod input;
mod output;

use std::env;

use clap::{Parser, Subcommand};
use modgraph_metrics::{AnalysisObserver, StageTimings};
use output::OutputMode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "modgraph: directed graph metrics (centrality, cohesion, communities)",
    long_about = None
)]
struct Cli {
    /// Emit per-stage timing report to stderr.
    #[arg(long, global = true)]
    timing: bool,

    /// Output format. Defaults to pretty on a terminal, text when piped.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn output_mode(&self) -> OutputMode {
        output::resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Run every metric and print the aggregate report",
        after_help = "EXAMPLES:\n    modgraph analyze graph.json\n\n    # Greedy communities on the matrix storage\n    modgraph analyze graph.json --representation matrix --method greedy_modularity\n\n    modgraph analyze graph.json --config modgraph.toml --json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Rank vertices by one metric",
        after_help = "EXAMPLES:\n    modgraph top graph.json --metric pagerank -n 5"
    )]
    Top(cmd::top::TopArgs),

    #[command(
        about = "List the members of one community",
        after_help = "EXAMPLES:\n    modgraph community graph.json --id 0"
    )]
    Community(cmd::community::CommunityArgs),

    #[command(about = "Show vertex and edge counts, density and connectivity")]
    Info(cmd::info::InfoArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MODGRAPH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "modgraph=debug,info"
        } else {
            "modgraph=info,warn"
        })
    });
    let format = env::var("MODGRAPH_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());
    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn timing_enabled_from_env() -> bool {
    env::var("MODGRAPH_TIMING")
        .ok()
        .is_some_and(|value| is_truthy(&value))
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = cli.output_mode();
    let timing_enabled = cli.timing || timing_enabled_from_env();
    let timings = StageTimings::new();
    let observer = timing_enabled.then_some(&timings as &dyn AnalysisObserver);

    let command_result = match &cli.command {
        Commands::Analyze(args) => cmd::analyze::run_analyze(args, output, observer),
        Commands::Top(args) => cmd::top::run_top(args, output),
        Commands::Community(args) => cmd::community::run_community(args, output),
        Commands::Info(args) => cmd::info::run_info(args, output),
    };

    if timing_enabled {
        if timings.is_empty() {
            eprintln!("timing report: no samples recorded");
        } else if output.is_json() {
            eprintln!("{}", serde_json::to_string_pretty(&timings.to_json())?);
        } else {
            eprintln!("timing report:");
            eprintln!("{}", timings.display_table());
        }
    }

    command_result
}
