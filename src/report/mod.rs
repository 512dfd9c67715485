//! Renderers that turn an [`Sbom`] into text.
//!
//! - [`json`] / [`yaml`] — the document as-is.
//! - [`markdown`] — human-readable component table.
//! - [`table`] — plain grid for terminals and logs.
//! - [`spdx`] — SPDX 2.2 tag-value.
//! - [`cyclonedx`] — CycloneDX 1.6 JSON.
//! - [`terminal`] — colored listing for the `analyze` command.

use anyhow::Result;

use crate::cli::ReportFormat;
use crate::models::Sbom;

pub mod cyclonedx;
pub mod json;
pub mod markdown;
pub mod spdx;
pub mod table;
pub mod terminal;
pub mod yaml;

/// Render `sbom` in the requested format.
pub fn render(sbom: &Sbom, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => json::render(sbom),
        ReportFormat::Yaml => yaml::render(sbom),
        ReportFormat::Markdown => Ok(markdown::render(sbom)),
        ReportFormat::Table => Ok(table::render(&sbom.components)),
        ReportFormat::Spdx => Ok(spdx::render(sbom)),
        ReportFormat::Cyclonedx => cyclonedx::render(sbom),
    }
}
