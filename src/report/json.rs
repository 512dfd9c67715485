use anyhow::{Context, Result};

use crate::models::Sbom;

pub fn render(sbom: &Sbom) -> Result<String> {
    serde_json::to_string_pretty(sbom).context("Failed to serialize to JSON")
}
