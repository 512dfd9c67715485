//! `sbomgen` — build a Software Bill of Materials from dependency manifests.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load document/output defaults ([`config::load_config`]).
//! 3. Report the project type ([`detector::detect_project_type`]).
//! 4. Walk the project and parse every manifest ([`analyzer::analyze_dir`]).
//! 5. Render the requested format ([`report`]) to a file or stdout.

mod analyzer;
mod cli;
mod config;
mod detector;
mod error;
mod models;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use cli::{Cli, Command, GenArgs, ProjectArgs};
use config::load_config;
use detector::detect_project_type;
use models::Sbom;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Gen(args) => generate(&args),
        Command::Analyze(args) => analyze(&args),
        Command::Version => {
            println!("{} version {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_dir(project: &ProjectArgs) -> PathBuf {
    let dir = project.project_dir();
    dir.canonicalize().unwrap_or(dir)
}

fn generate(args: &GenArgs) -> Result<()> {
    let path = resolve_dir(&args.project);
    let config = load_config(&path, args.config.as_deref())?;

    let project_type = detect_project_type(&path);
    if !args.quiet {
        eprintln!("{} Detected project type: {}", "→".cyan(), project_type);
    }

    let components = analyzer::analyze_dir(&path)
        .with_context(|| format!("Failed to analyze {}", path.display()))?;

    let mut sbom = Sbom::new(
        config.document.name,
        config.document.version,
        format!("urn:uuid:{}", Uuid::new_v4()),
    );
    sbom.author = config.document.author;
    for component in components {
        sbom.add_component(component);
    }

    if !args.quiet {
        eprintln!(
            "{} Found {} components ({} development)",
            "→".cyan(),
            sbom.count(),
            sbom.dev_dependency_count()
        );
    }

    let format = args.format.or(config.format).unwrap_or_default();
    let output = report::render(&sbom, format)?;

    match args.output.as_deref().or(config.output.as_deref()) {
        Some(file) => {
            write_output(file, &output)?;
            if !args.quiet {
                eprintln!("{} SBOM written to {}", "✓".green(), file.display());
            }
        }
        None => println!("{}", output),
    }

    Ok(())
}

fn write_output(file: &Path, output: &str) -> Result<()> {
    std::fs::write(file, output)
        .with_context(|| format!("Failed to write output file {}", file.display()))
}

fn analyze(args: &ProjectArgs) -> Result<()> {
    let path = resolve_dir(args);
    let project_type = detect_project_type(&path);

    let components = analyzer::analyze_dir(&path)
        .with_context(|| format!("Failed to analyze {}", path.display()))?;

    report::terminal::render(&components, &path, project_type);
    Ok(())
}
