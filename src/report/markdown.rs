use crate::models::Sbom;

/// Render a Markdown summary with one table row per component.
pub fn render(sbom: &Sbom) -> String {
    let mut out = String::new();

    out.push_str("# Software Bill of Materials\n\n");
    out.push_str(&format!("**Project:** {} v{}\n\n", sbom.name, sbom.version));
    if let Some(author) = &sbom.author {
        out.push_str(&format!("**Author:** {}\n\n", author));
    }
    out.push_str(&format!(
        "**Created:** {}\n\n",
        sbom.created.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("**Total Components:** {}\n\n", sbom.count()));

    out.push_str("## Components\n\n");
    if sbom.components.is_empty() {
        out.push_str("No components found.\n");
        return out;
    }

    out.push_str("| # | Name | Version | Supplier | PURL |\n");
    out.push_str("|---|------|---------|----------|------|\n");
    for (i, c) in sbom.components.iter().enumerate() {
        let name = if c.is_dev_dependency() {
            format!("{} (dev)", c.name)
        } else {
            c.name.clone()
        };
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            i + 1,
            cell(&name),
            cell(&c.version),
            c.supplier,
            cell(c.purl.as_deref().unwrap_or("")),
        ));
    }

    out
}

/// Escape pipes so a value cannot split a table cell.
fn cell(value: &str) -> String {
    value.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_sbom;

    #[test]
    fn test_render_markdown() {
        let out = render(&sample_sbom());
        assert!(out.starts_with("# Software Bill of Materials\n"));
        assert!(out.contains("**Project:** demo v1.0.0"));
        assert!(out.contains("**Total Components:** 4"));
        assert!(out.contains("| 1 | express | ^4.18.0 | npm | pkg:npm/express@^4.18.0 |"));
        assert!(out.contains("| 2 | jest (dev) | ^29.0.0 | npm |"));
        assert!(out.contains("| 4 | internal |  | maven |  |"));
    }

    #[test]
    fn test_pipe_in_version_is_escaped() {
        let mut sbom = crate::models::Sbom::new("demo", "1.0.0", "s");
        sbom.add_component(crate::models::Component::new(
            "react",
            "^17 || ^18",
            crate::models::Ecosystem::Npm,
        ));
        let out = render(&sbom);
        assert!(out.contains("| ^17 \\|\\| ^18 |"));
    }

    #[test]
    fn test_empty_document() {
        let sbom = crate::models::Sbom::new("demo", "1.0.0", "s");
        assert!(render(&sbom).contains("No components found."));
    }
}
