use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::ReportFormat;

/// Root configuration structure, deserialized from `.sbomgen/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output format used when `--format` is not given.
    pub format: Option<ReportFormat>,
    /// Output file used when `--output` is not given; stdout otherwise.
    pub output: Option<PathBuf>,
    /// Metadata written into the generated document.
    #[serde(default)]
    pub document: DocumentConfig,
}

/// Identity of the generated SBOM document.
#[derive(Debug, Deserialize)]
pub struct DocumentConfig {
    #[serde(default = "default_document_name")]
    pub name: String,
    #[serde(default = "default_document_version")]
    pub version: String,
    pub author: Option<String>,
}

fn default_document_name() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_document_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for DocumentConfig {
    fn default() -> Self {
        DocumentConfig {
            name: default_document_name(),
            version: default_document_version(),
            author: None,
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.sbomgen/config.toml`
/// 3. `~/.config/sbomgen/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".sbomgen").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("sbomgen").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}
