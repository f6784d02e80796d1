use crate::model::Severity;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "boundlint")]
#[command(about = "Enforce import boundaries and canonical import paths")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project to check when no subcommand is given
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check imports against the configured boundaries (default behavior)
    Check(CheckArgs),

    /// Generate a starter .boundlint.toml configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Project directory containing .boundlint.toml (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "markdown")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rewrite incorrectly spelled imports in place
    #[arg(long)]
    pub fix: bool,

    /// Minimum severity to report
    #[arg(long, default_value = "warn")]
    pub min_severity: Severity,

    /// Only check path spelling, not allow/deny rules
    #[arg(long)]
    pub skip_policy: bool,

    /// Do not report imports that leave every boundary
    #[arg(long)]
    pub allow_unknown_boundaries: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            format: OutputFormat::Markdown,
            output: None,
            fix: false,
            min_severity: Severity::Warn,
            skip_policy: false,
            allow_unknown_boundaries: false,
        }
    }
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Path where to create .boundlint.toml (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}
