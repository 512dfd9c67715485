use anyhow::Result;

use crate::models::{Component, Ecosystem};

/// Analyzer for `go.mod`.
///
/// Any line starting with `require ` or containing whitespace is read as
/// `<module path> <version>`; the name is the last segment of the module
/// path. Directive lines such as `go 1.21` therefore also produce components.
pub struct GoAnalyzer;

impl super::Analyzer for GoAnalyzer {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Go
    }

    fn parse(&self, content: &str) -> Result<Vec<Component>> {
        let mut deps = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            let candidate = line.starts_with("require ")
                || (!line.is_empty() && line.contains(char::is_whitespace));
            if !candidate {
                continue;
            }

            let mut fields = line.split_whitespace();
            if let (Some(module), Some(version)) = (fields.next(), fields.next()) {
                deps.push(Component::new(last_segment(module), version, Ecosystem::Go));
            }
        }

        Ok(deps)
    }
}

/// `github.com/pkg/errors` → `errors`
fn last_segment(module: &str) -> &str {
    let trimmed = module.trim_end_matches('/');
    match trimmed.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => module,
    }
}
