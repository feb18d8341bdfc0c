use clap::{ArgAction, Parser};
use std::path::PathBuf;

use depgraph_view::application::dto::OutputFormat;
use depgraph_view::graph_building::domain::View;
use depgraph_view::graph_building::policies::NodeSizing;

/// Render a package dependency dataset as a force-directed ECharts graph
#[derive(Parser, Debug)]
#[command(name = "depgraph-view")]
#[command(version)]
#[command(
    about = "Render a package dependency dataset as a force-directed ECharts graph",
    long_about = None
)]
pub struct Args {
    /// Only include edges whose packages exceed this dependency count [default: 1000]
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub min_count: Option<i64>,

    /// Dataset view: 1-5 or arch, debian, gentoo, homebrew, nix [default: 1]
    #[arg(long, value_name = "VIEW")]
    pub view: Option<View>,

    /// Base URL of the dependency server [default: http://localhost:5000]
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Output format: json or html [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path, rewritten on every render (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// How a node's value is chosen when it appears in several records:
    /// last-write, max or sum [default: last-write]
    #[arg(long, value_name = "POLICY")]
    pub sizing: Option<NodeSizing>,

    /// Upper bound for a node's symbol size [default: 400]
    #[arg(long, value_name = "SIZE")]
    pub max_node_size: Option<f64>,

    /// Chart title [default: "Package Dependencies Graph"]
    #[arg(long)]
    pub title: Option<String>,

    /// Render surface width in pixels [default: 1600]
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Render surface height in pixels [default: 1000]
    #[arg(long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,

    /// Read control commands (min, view, resize, show, quit) from stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Keep fetched datasets in memory and reuse them for repeated queries
    #[arg(long)]
    pub cache: bool,

    /// Request timeout in seconds (no timeout if not specified)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Path to config file (auto-discovers depgraph-view.config.yml in the
    /// current directory if not specified)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Log filter directive for the `-v`/`-q` flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
