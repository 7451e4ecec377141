use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Plan upgrades for vulnerable Maven dependencies
#[derive(Parser, Debug)]
#[command(name = "falcon-fix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Plan upgrades for vulnerable Maven dependencies from a dependency tree and a scan report",
    long_about = None
)]
pub struct Args {
    /// Output of `mvn dependency:tree` (defaults to the built-in sample)
    #[arg(short = 't', long, value_name = "FILE")]
    pub tree_file: Option<PathBuf>,

    /// Scanner report in JSON form (defaults to the built-in sample findings)
    #[arg(short = 's', long, value_name = "FILE")]
    pub scan_report: Option<PathBuf>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./falcon-fix.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip the model and use the highest listed fix version for every finding
    #[arg(long)]
    pub offline: bool,

    /// Maximum number of model round trips per vulnerability
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub max_tool_rounds: Option<u32>,

    /// Chat model name
    #[arg(long)]
    pub model: Option<String>,

    /// Print one line per analyzed vulnerability instead of a progress bar
    #[arg(short, long)]
    pub verbose: bool,

    /// Exit with code 1 when any finding cannot be upgraded
    #[arg(long)]
    pub fail_on_critical: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
