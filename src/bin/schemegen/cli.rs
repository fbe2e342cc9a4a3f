//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// schemegen - helper generation from annotated header schemes
#[derive(Parser)]
#[command(name = "schemegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the native header and SWIG interface from annotated headers
    Generate(GenerateArgs),

    /// List the schemes found in annotated headers
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command that scans headers.
#[derive(Args)]
pub struct ScanArgs {
    /// Directory to scan for headers (defaults to current directory)
    pub root: Option<PathBuf>,

    /// File-name glob for candidate headers
    #[arg(long)]
    pub pattern: Option<String>,

    /// Configuration file (defaults to schemegen.toml in the root)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Directory the output paths are relative to (defaults to the root)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// License banner file
    #[arg(long)]
    pub license: Option<PathBuf>,

    /// Namespace of the generated helpers
    #[arg(long)]
    pub namespace: Option<String>,

    /// Fail if the generated files are out of date, without writing
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,

    /// Show what would be written
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Print schemes as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
