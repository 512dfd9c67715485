use std::path::Path;

use crate::models::Ecosystem;

/// Returned by [`detect_project_type`] when no signature file is present.
pub const UNKNOWN: &str = "unknown";

/// Report the ecosystem of the first signature file directly inside `path`.
///
/// Entries are checked in file-name order and subdirectories are not
/// searched. Display only; the analysis pipeline does not use this.
pub fn detect_project_type(path: &Path) -> &'static str {
    let Ok(entries) = std::fs::read_dir(path) else {
        return UNKNOWN;
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter_map(|e| e.file_name().to_str().map(str::to_string))
        .collect();
    names.sort();

    names
        .iter()
        .find_map(|name| signature(name))
        .map_or(UNKNOWN, |e| e.as_str())
}

fn signature(file_name: &str) -> Option<Ecosystem> {
    match file_name {
        "package.json" => Some(Ecosystem::Npm),
        "requirements.txt" | "setup.py" | "pyproject.toml" => Some(Ecosystem::Pypi),
        "go.mod" => Some(Ecosystem::Go),
        "Cargo.toml" => Some(Ecosystem::Cargo),
        "pom.xml" => Some(Ecosystem::Maven),
        _ => None,
    }
}
