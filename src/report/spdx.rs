use crate::models::Sbom;

/// Render an SPDX 2.2 tag-value document.
pub fn render(sbom: &Sbom) -> String {
    let mut out = String::new();
    let namespace_id = sbom
        .serial_number
        .strip_prefix("urn:uuid:")
        .unwrap_or(&sbom.serial_number);

    out.push_str("SPDXVersion: SPDX-2.2\n");
    out.push_str("DataLicense: CC0-1.0\n");
    out.push_str("SPDXID: SPDXRef-DOCUMENT\n");
    out.push_str(&format!("DocumentName: {}\n", sbom.name));
    out.push_str(&format!(
        "DocumentNamespace: https://spdx.org/spdxdocs/{}-{}-{}\n",
        sbom.name, sbom.version, namespace_id
    ));
    out.push_str(&format!("Creator: Tool: sbomgen-{}\n", env!("CARGO_PKG_VERSION")));
    if let Some(author) = &sbom.author {
        out.push_str(&format!("Creator: Person: {}\n", author));
    }
    out.push_str(&format!(
        "Created: {}\n",
        sbom.created.format("%Y-%m-%dT%H:%M:%SZ")
    ));

    out.push_str("\n## Packages\n");
    for (i, c) in sbom.components.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("PackageName: {}\n", c.name));
        out.push_str(&format!("SPDXID: SPDXRef-Package-{}\n", i));
        if !c.version.is_empty() {
            out.push_str(&format!("PackageVersion: {}\n", c.version));
        }
        out.push_str(&format!("PackageSupplier: Organization: {}\n", c.supplier));
        match &c.purl {
            Some(purl) => {
                out.push_str(&format!("PackageDownloadLocation: {}\n", purl));
                out.push_str(&format!("ExternalRef: PACKAGE-MANAGER purl {}\n", purl));
            }
            None => out.push_str("PackageDownloadLocation: NOASSERTION\n"),
        }
        if let Some(description) = &c.description {
            out.push_str(&format!("PackageComment: {}\n", description));
        }
        out.push_str("FilesAnalyzed: false\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_sbom;

    #[test]
    fn test_render_spdx() {
        let out = render(&sample_sbom());

        assert!(out.starts_with("SPDXVersion: SPDX-2.2\n"));
        assert!(out.contains("DocumentName: demo\n"));
        assert!(out.contains(
            "DocumentNamespace: https://spdx.org/spdxdocs/demo-1.0.0-00000000-0000-4000-8000-000000000000\n"
        ));
        assert!(out.contains("PackageName: express\nSPDXID: SPDXRef-Package-0\nPackageVersion: ^4.18.0\n"));
        assert!(out.contains("PackageSupplier: Organization: npm\n"));
        assert!(out.contains("ExternalRef: PACKAGE-MANAGER purl pkg:cargo/serde@1.0\n"));
        assert!(out.contains("PackageComment: development dependency\n"));
        assert_eq!(out.matches("FilesAnalyzed: false").count(), 4);
    }

    #[test]
    fn test_component_without_purl() {
        let out = render(&sample_sbom());
        let block = out.split("PackageName: internal\n").nth(1).unwrap();
        assert!(block.starts_with("SPDXID: SPDXRef-Package-3\nPackageSupplier: Organization: maven\n"));
        assert!(block.contains("PackageDownloadLocation: NOASSERTION\n"));
    }
}
