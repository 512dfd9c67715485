use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(
    name = "sbomgen",
    about = "Software Bill of Materials generator",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log pipeline details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an SBOM from a project directory
    Gen(GenArgs),
    /// Analyze a project and list its dependencies
    Analyze(ProjectArgs),
    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Project directory
    #[arg(value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Project directory (alternative to the positional argument)
    #[arg(short, long, value_name = "DIR", conflicts_with = "path")]
    pub dir: Option<PathBuf>,
}

impl ProjectArgs {
    pub fn project_dir(&self) -> PathBuf {
        self.dir
            .clone()
            .or_else(|| self.path.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[derive(Args, Debug)]
pub struct GenArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output file [default: stdout]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: json]
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<ReportFormat>,

    /// Config file [default: ./.sbomgen/config.toml, fallback ~/.config/sbomgen/config.toml]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress status messages
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Yaml,
    Markdown,
    Table,
    Spdx,
    Cyclonedx,
}
