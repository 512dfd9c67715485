use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, Table};

use crate::models::Component;

/// Plain ASCII grid of NAME / VERSION / SUPPLIER / PURL.
pub fn render(components: &[Component]) -> String {
    build(components, false).load_preset(ASCII_FULL).to_string()
}

/// Shared table layout; `mark_dev` appends a `(dev)` tag to development dependencies.
pub(crate) fn build(components: &[Component], mark_dev: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["NAME", "VERSION", "SUPPLIER", "PURL"]);

    for c in components {
        let name = if mark_dev && c.is_dev_dependency() {
            format!("{} (dev)", c.name)
        } else {
            c.name.clone()
        };
        table.add_row(vec![
            Cell::new(name),
            Cell::new(&c.version),
            Cell::new(c.supplier.to_string()),
            Cell::new(c.purl.as_deref().unwrap_or("-")),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_sbom;

    #[test]
    fn test_render_table() {
        let sbom = sample_sbom();
        let out = render(&sbom.components);
        let lines: Vec<&str> = out.lines().collect();

        let header: Vec<_> = lines.iter().filter(|l| l.contains("NAME")).collect();
        assert_eq!(header.len(), 1);
        assert!(header[0].contains("PURL"));
        assert!(out.contains("pkg:cargo/serde@1.0"));
        // three components carry a purl, the fourth shows the placeholder
        assert_eq!(lines.iter().filter(|l| l.contains("pkg:")).count(), 3);
        assert_eq!(lines.iter().filter(|l| l.contains("internal")).count(), 1);
    }

    #[test]
    fn test_missing_purl_placeholder() {
        let sbom = sample_sbom();
        let out = render(&sbom.components[3..]);
        let row = out.lines().find(|l| l.contains("internal")).unwrap();
        assert!(row.contains(" - "));
    }
}
