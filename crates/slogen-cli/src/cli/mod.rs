use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};


#[derive(Debug, Parser)]
#[command(name = "slogen")]
#[command(about = "Generate multiwindow, multi-burn-rate SLO rules for Prometheus", version)]
pub struct Cli {
    /// SLO config file. Falls back to `SLOGEN_CONFIG`, then `prometheus-slo.yaml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory that relative destinations are resolved against.
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,

    /// Defaults to `generate` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Write one rule file per destination.
    Generate,
    /// Compare rule files on disk with the generated output without writing.
    Check,
    /// Print generated rule files to stdout.
    Render(RenderArgs),
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct RenderArgs {
    /// Render only this destination key from `slo_files`.
    #[arg(long)]
    pub destination: Option<String>,
}
