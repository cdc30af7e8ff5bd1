//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tidal")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Packs SQL migrations into compressed descriptors embedded in Rust source")]
pub(crate) struct Cli {
    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// Configuration file (defaults to `tidal.{toml,yaml,json}` when present)
    #[arg(short, long, global = true, value_name = "CONFIG")]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Generate Rust source registering every migration in a directory
    Generate(GenerateArgs),
    /// Show the header and sections of a single migration file
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
pub(crate) struct GenerateArgs {
    /// Directory holding `<revision>_<name>.sql` files
    pub(crate) migrations: Option<PathBuf>,

    /// Generated Rust file
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Package name; taken from `-- package:` directives when omitted
    #[arg(short, long)]
    pub(crate) package: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct InspectArgs {
    /// Migration source file
    pub(crate) file: PathBuf,

    /// Print the up section
    #[arg(long)]
    pub(crate) up: bool,

    /// Print the down section
    #[arg(long)]
    pub(crate) down: bool,
}
