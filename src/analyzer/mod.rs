use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Component, Ecosystem};

pub mod cargo;
pub mod go;
pub mod maven;
pub mod npm;
pub mod pypi;
pub mod walk;

pub use walk::analyze_dir;

/// Extracts components from one ecosystem's manifest file.
pub trait Analyzer {
    fn ecosystem(&self) -> Ecosystem;

    /// Parse manifest contents into components.
    fn parse(&self, content: &str) -> Result<Vec<Component>>;

    /// Whether `path` names this ecosystem's manifest (exact base-name match).
    fn should_analyze(&self, path: &Path) -> bool {
        path.file_name().and_then(|n| n.to_str()) == Some(self.ecosystem().manifest())
    }

    fn analyze(&self, path: &Path) -> Result<Vec<Component>> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        self.parse(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// The analyzer registered for `ecosystem`.
pub fn analyzer_for(ecosystem: Ecosystem) -> &'static dyn Analyzer {
    match ecosystem {
        Ecosystem::Npm => &npm::NpmAnalyzer,
        Ecosystem::Pypi => &pypi::PypiAnalyzer,
        Ecosystem::Go => &go::GoAnalyzer,
        Ecosystem::Cargo => &cargo::CargoAnalyzer,
        Ecosystem::Maven => &maven::MavenAnalyzer,
    }
}

/// All analyzers, in dispatch order.
pub fn registry() -> impl Iterator<Item = &'static dyn Analyzer> {
    Ecosystem::ALL.into_iter().map(analyzer_for)
}
