use anyhow::Result;
use tracing::trace;

use crate::models::{Component, Ecosystem};

/// Analyzer for `pom.xml`.
///
/// Line-based: inside `<dependencies>`, a line holding a complete
/// `<artifactId>` element yields a component only if a `<version>` element
/// sits on the same line. The usual one-element-per-line layout yields nothing.
pub struct MavenAnalyzer;

impl super::Analyzer for MavenAnalyzer {
    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Maven
    }

    fn parse(&self, content: &str) -> Result<Vec<Component>> {
        let mut deps = Vec::new();
        let mut in_dependencies = false;

        for line in content.lines() {
            let line = line.trim();

            if line.contains("<dependencies>") {
                in_dependencies = true;
                continue;
            }
            if line.contains("</dependencies>") {
                in_dependencies = false;
                continue;
            }
            if !in_dependencies || !(line.contains("<artifactId>") && line.contains("</artifactId>")) {
                continue;
            }

            let artifact_id = extract_tag(line, "artifactId");
            let version = extract_tag(line, "version");
            match (artifact_id, version) {
                (Some(artifact_id), Some(version)) if !artifact_id.is_empty() && !version.is_empty() => {
                    deps.push(Component::new(artifact_id, version, Ecosystem::Maven));
                }
                _ => trace!(line = %line, "artifactId without version on the same line"),
            }
        }

        Ok(deps)
    }
}

/// Text between `<tag>` and the following `</tag>` on one line.
fn extract_tag<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);

    let start = line.find(&open)? + open.len();
    let len = line[start..].find(&close)?;
    Some(&line[start..start + len])
}
