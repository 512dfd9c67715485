use anyhow::Result;
use tracing::trace;

use crate::models::{Component, Ecosystem};

/// Version operators, tried in this order until one splits the line.
const OPERATORS: [&str; 3] = ["==", ">=", "<="];

/// Analyzer for `requirements.txt`.
///
/// Handles `name==version`, `name>=version` and `name<=version` lines.
/// Lines without one of those operators are dropped.
pub struct PypiAnalyzer;

impl super::Analyzer for PypiAnalyzer {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Pypi
    }

    fn parse(&self, content: &str) -> Result<Vec<Component>> {
        let mut deps = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match split_requirement(line) {
                Some((name, version)) => deps.push(Component::new(name, version, Ecosystem::Pypi)),
                None => trace!(line = %line, "no version operator, line dropped"),
            }
        }

        Ok(deps)
    }
}

/// Split on the first operator present. The version ends at a repeat of the
/// same operator, if any.
fn split_requirement(line: &str) -> Option<(&str, &str)> {
    OPERATORS.iter().find_map(|op| {
        let mut parts = line.split(op);
        let name = parts.next()?;
        let version = parts.next()?;
        Some((name.trim(), version.trim()))
    })
}
