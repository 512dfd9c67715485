use anyhow::Result;
use tracing::trace;

use crate::models::{Component, Ecosystem};

/// Analyzer for `Cargo.toml`.
///
/// Reads the `[dependencies]` table line by line. Accepts `name = "1.0"` and
/// the inline form `name = { version = "1.0", ... }`, where the version must be
/// the first quoted string in the table.
pub struct CargoAnalyzer;

impl super::Analyzer for CargoAnalyzer {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Cargo
    }

    fn parse(&self, content: &str) -> Result<Vec<Component>> {
        let mut deps = Vec::new();
        let mut in_dependencies = false;

        for line in content.lines() {
            let line = line.trim();

            if line == "[dependencies]" {
                in_dependencies = true;
                continue;
            }
            if line.starts_with('[') {
                in_dependencies = false;
                continue;
            }
            if !in_dependencies || line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((name, value)) = line.split_once('=') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();

            let version = if value.starts_with('{') {
                match first_quoted(value) {
                    Some(version) => version,
                    None => {
                        trace!(line = %line, "inline table without quoted version");
                        continue;
                    }
                }
            } else {
                value.trim_matches('"')
            };

            deps.push(Component::new(name, version, Ecosystem::Cargo));
        }

        Ok(deps)
    }
}

/// Text between the first and second `"` in `value`.
fn first_quoted(value: &str) -> Option<&str> {
    let start = value.find('"')? + 1;
    let len = value[start..].find('"')?;
    Some(&value[start..start + len])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;

    #[test]
    fn test_parse_cargo_toml() {
        let content = r#"
[package]
name = "my-app"
version = "0.1.0"

[dependencies]
# serialization
serde = { version = "1.0.150", features = ["derive"] }
anyhow = "1"
tokio = {version="1.25.0"}

[dev-dependencies]
tempfile = "3"
"#;
        let deps = CargoAnalyzer.parse(content).unwrap();
        let pairs: Vec<_> = deps
            .iter()
            .map(|d| (d.name.as_str(), d.version.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("serde", "1.0.150"), ("anyhow", "1"), ("tokio", "1.25.0")]
        );
        assert_eq!(deps[0].purl.as_deref(), Some("pkg:cargo/serde@1.0.150"));
    }

    #[test]
    fn test_inline_table_takes_first_quoted_value() {
        let deps = CargoAnalyzer
            .parse("[dependencies]\nlocal = { path = \"../local\", version = \"0.2\" }\n")
            .unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].version, "../local");
    }

    #[test]
    fn test_inline_table_without_quotes_is_dropped() {
        let deps = CargoAnalyzer
            .parse("[dependencies]\nws = { workspace = true }\nlog = \"0.4\"\n")
            .unwrap();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].name, "log");
    }

    #[test]
    fn test_other_sections_end_scanning() {
        let content = "[dependencies]\na = \"1\"\n[features]\ndefault = \"x\"\n[dependencies]\nb = \"2\"\n";
        let deps = CargoAnalyzer.parse(content).unwrap();
        let names: Vec<_> = deps.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_target_dependencies_are_not_scanned() {
        let content = "[target.'cfg(unix)'.dependencies]\nlibc = \"0.2\"\n";
        assert!(CargoAnalyzer.parse(content).unwrap().is_empty());
    }

    #[test]
    fn test_lines_without_equals_are_ignored() {
        let deps = CargoAnalyzer.parse("[dependencies]\nbroken\n").unwrap();
        assert!(deps.is_empty());
    }
}
