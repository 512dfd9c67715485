use std::collections::BTreeMap;

use anyhow::Result;
use serde::Deserialize;

use crate::models::{Component, Ecosystem};

/// Analyzer for `package.json`.
///
/// Emits every entry of `dependencies` and `devDependencies`; the latter are
/// annotated as development dependencies. Versions are kept as declared.
pub struct NpmAnalyzer;

#[derive(Debug, Deserialize)]
struct PackageJson {
    dependencies: Option<BTreeMap<String, String>>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: Option<BTreeMap<String, String>>,
}

impl super::Analyzer for NpmAnalyzer {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Npm
    }

    fn parse(&self, content: &str) -> Result<Vec<Component>> {
        let pkg: PackageJson = serde_json::from_str(content)?;
        let mut components = Vec::new();

        for (name, version) in pkg.dependencies.unwrap_or_default() {
            components.push(Component::new(name, version, Ecosystem::Npm));
        }

        for (name, version) in pkg.dev_dependencies.unwrap_or_default() {
            components.push(Component::new(name, version, Ecosystem::Npm).dev_dependency());
        }

        Ok(components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Analyzer;
    use std::collections::HashSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn keys(components: &[Component]) -> HashSet<(String, String, bool)> {
        components
            .iter()
            .map(|c| (c.name.clone(), c.version.clone(), c.is_dev_dependency()))
            .collect()
    }

    #[test]
    fn test_parse_package_json() {
        let json = r#"{
  "name": "my-app",
  "version": "1.0.0",
  "dependencies": {
    "express": "^4.18.2",
    "lodash": "~4.17.21"
  },
  "devDependencies": {
    "jest": "^29.0.0"
  }
}"#;
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "{}", json).unwrap();
        let deps = NpmAnalyzer.analyze(f.path()).unwrap();

        assert_eq!(deps.len(), 3);
        let expected: HashSet<_> = [
            ("express".to_string(), "^4.18.2".to_string(), false),
            ("lodash".to_string(), "~4.17.21".to_string(), false),
            ("jest".to_string(), "^29.0.0".to_string(), true),
        ]
        .into_iter()
        .collect();
        assert_eq!(keys(&deps), expected);

        for d in &deps {
            assert_eq!(d.supplier, Ecosystem::Npm);
            assert_eq!(
                d.purl.as_deref(),
                Some(format!("pkg:npm/{}@{}", d.name, d.version).as_str())
            );
        }
    }

    #[test]
    fn test_same_name_in_both_sections() {
        let deps = NpmAnalyzer
            .parse(r#"{"dependencies": {"react": "18.2.0"}, "devDependencies": {"react": "18.2.0"}}"#)
            .unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps.iter().filter(|d| d.is_dev_dependency()).count(), 1);
    }

    #[test]
    fn test_missing_sections() {
        let deps = NpmAnalyzer.parse(r#"{"name": "empty", "version": "0.0.1"}"#).unwrap();
        assert!(deps.is_empty());

        let deps = NpmAnalyzer.parse(r#"{"dependencies": null}"#).unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_malformed_json_fails() {
        assert!(NpmAnalyzer.parse("{ \"dependencies\": ").is_err());
        assert!(NpmAnalyzer.parse(r#"{"dependencies": {"a": 1}}"#).is_err());
    }
}
