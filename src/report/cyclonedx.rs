use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::Sbom;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Bom<'a> {
    bom_format: &'static str,
    spec_version: &'static str,
    serial_number: &'a str,
    version: u32,
    metadata: Metadata<'a>,
    components: Vec<Component<'a>>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    timestamp: String,
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    authors: Vec<Author<'a>>,
    component: Component<'a>,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct Author<'a> {
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct Component<'a> {
    #[serde(rename = "type")]
    component_type: &'static str,
    name: &'a str,
    version: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    purl: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<&'static str>,
}

/// Render a CycloneDX 1.6 JSON document.
pub fn render(sbom: &Sbom) -> Result<String> {
    let components = sbom
        .components
        .iter()
        .map(|c| Component {
            component_type: "library",
            name: &c.name,
            version: &c.version,
            purl: c.purl.as_deref(),
            scope: c.is_dev_dependency().then_some("optional"),
        })
        .collect();

    let bom = Bom {
        bom_format: "CycloneDX",
        spec_version: "1.6",
        serial_number: &sbom.serial_number,
        version: 1,
        metadata: Metadata {
            timestamp: sbom.created.to_rfc3339(),
            tools: vec![Tool {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            }],
            authors: sbom.author.as_deref().map(|name| Author { name }).into_iter().collect(),
            component: Component {
                component_type: "application",
                name: &sbom.name,
                version: &sbom.version,
                purl: None,
                scope: None,
            },
        },
        components,
    };

    serde_json::to_string_pretty(&bom).context("Failed to serialize CycloneDX document")
}
