//! Network Summary CLI — summarizes edge-list files from the command line
//!
//! Reads each file into a `GraphStore`, runs `NetworkSummary` over the batch and
//! renders one record per graph.

mod edgelist;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use edgelist::ReadOptions;
use netsummary::{GraphStore, MetricsRecord, NetworkSummary, SummaryConfig};
use render::OutputFormat;
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "netsummary", version, about = "Structural summaries of edge-list networks")]
struct Cli {
    /// Log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize one or more edge-list files
    Summarize(SummarizeArgs),
    /// Print the default configuration as YAML
    Config,
}

#[derive(Args)]
struct SummarizeArgs {
    /// Edge-list files as NAME=PATH or PATH (name defaults to the file stem)
    graphs: Vec<String>,

    /// Treat positional graphs as directed
    #[arg(long, conflicts_with = "undirected")]
    directed: bool,

    /// Treat positional graphs as undirected (default)
    #[arg(long)]
    undirected: bool,

    /// Additional directed graph, NAME=PATH or PATH
    #[arg(long = "directed-graph", value_name = "SPEC")]
    directed_graphs: Vec<String>,

    /// Additional undirected graph, NAME=PATH or PATH
    #[arg(long = "undirected-graph", value_name = "SPEC")]
    undirected_graphs: Vec<String>,

    /// Comment marker in edge-list files
    #[arg(long, default_value = "#")]
    comment: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML or JSON summary configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed for distance sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Number of BFS seeds for distance estimation
    #[arg(long)]
    sample_size: Option<usize>,

    /// Skip distance estimation
    #[arg(long)]
    no_distance: bool,

    /// Run each graph's analyzers on one thread
    #[arg(long)]
    sequential: bool,
}

/// One graph to load
#[derive(Debug, Clone, PartialEq)]
struct GraphSpec {
    name: String,
    path: PathBuf,
    directed: bool,
}

impl GraphSpec {
    fn parse(spec: &str, directed: bool) -> Self {
        match spec.split_once('=') {
            Some((name, path)) => Self {
                name: name.to_string(),
                path: PathBuf::from(path),
                directed,
            },
            None => {
                let path = PathBuf::from(spec);
                Self {
                    name: default_name(&path),
                    path,
                    directed,
                }
            }
        }
    }
}

fn default_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Summarize(args) => run_summarize(args),
        Commands::Config => run_config().map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run_config() -> Result<()> {
    print!("{}", serde_yaml::to_string(&SummaryConfig::default())?);
    Ok(())
}

fn load_config(args: &SummarizeArgs) -> Result<SummaryConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_yaml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SummaryConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(sample_size) = args.sample_size {
        config.distance_sample_size = sample_size;
    }
    if args.no_distance {
        config.estimate_distance = false;
    }
    if args.sequential {
        config.parallel = false;
    }
    Ok(config)
}

fn graph_specs(args: &SummarizeArgs) -> Vec<GraphSpec> {
    let positional_directed = args.directed && !args.undirected;
    args.graphs
        .iter()
        .map(|s| GraphSpec::parse(s, positional_directed))
        .chain(args.directed_graphs.iter().map(|s| GraphSpec::parse(s, true)))
        .chain(args.undirected_graphs.iter().map(|s| GraphSpec::parse(s, false)))
        .collect()
}

/// Returns `Ok(false)` when at least one graph failed.
fn run_summarize(args: SummarizeArgs) -> Result<bool> {
    let specs = graph_specs(&args);
    if specs.is_empty() {
        bail!("no graphs given; pass NAME=PATH, --directed-graph or --undirected-graph");
    }
    let config = load_config(&args)?;
    tracing::debug!(?config, graphs = specs.len(), "starting summary");

    let mut all_ok = true;
    let mut loaded: Vec<(String, GraphStore)> = Vec::with_capacity(specs.len());
    for spec in &specs {
        let options = ReadOptions {
            directed: spec.directed,
            comment: args.comment.clone(),
        };
        match edgelist::read_edge_list(&spec.path, &options) {
            Ok(store) => {
                tracing::info!(
                    name = %spec.name,
                    path = %spec.path.display(),
                    nodes = store.node_count(),
                    edges = store.edge_count(),
                    "graph loaded"
                );
                loaded.push((spec.name.clone(), store));
            }
            Err(e) => {
                eprintln!("Error: graph '{}' ({}): {}", spec.name, spec.path.display(), e);
                all_ok = false;
            }
        }
    }

    let summary = NetworkSummary::new(config);
    let results = summary.summarize_batch(loaded.iter().map(|(name, store)| (name.as_str(), store)));

    let mut records: Vec<MetricsRecord> = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                eprintln!("Error: {}", e);
                all_ok = false;
            }
        }
    }

    if !records.is_empty() {
        let rendered = render::render(&records, args.format)?;
        match &args.output {
            Some(path) => std::fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?,
            None => print!("{}", rendered),
        }
    }

    Ok(all_ok)
}
