//! Directory walk that feeds every manifest it finds to the matching analyzers.
//!
//! Entries are visited in file-name order so repeated scans of an unchanged
//! tree return the same components in the same order.

use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use super::registry;
use crate::error::ScanError;
use crate::models::Component;

/// Directory names that are never descended into, at any depth including the root.
pub const PRUNED_DIRS: &[&str] = &["node_modules", "vendor", ".git", "dist", "build"];

/// Scan `root` recursively and collect the components of every manifest found.
///
/// Manifests that fail to read or parse are skipped, as are directory entries
/// the walk cannot access. Only an unreadable `root` is reported as an error.
pub fn analyze_dir(root: &Path) -> Result<Vec<Component>, ScanError> {
    let unreadable = |source| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    };

    let metadata = std::fs::metadata(root).map_err(unreadable)?;
    if metadata.is_dir() {
        std::fs::read_dir(root).map_err(unreadable)?;
    }

    let mut components = Vec::new();
    let mut parsed = 0usize;
    let mut skipped = 0usize;

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_pruned(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        for analyzer in registry().filter(|a| a.should_analyze(path)) {
            match analyzer.analyze(path) {
                Ok(found) => {
                    debug!(
                        path = %path.display(),
                        ecosystem = %analyzer.ecosystem(),
                        count = found.len(),
                        "parsed manifest"
                    );
                    parsed += 1;
                    components.extend(found);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %format!("{err:#}"), "skipping manifest");
                    skipped += 1;
                }
            }
        }
    }

    info!(
        root = %root.display(),
        manifests = parsed,
        skipped,
        components = components.len(),
        "scan complete"
    );

    Ok(components)
}

fn is_pruned(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }

    let pruned = entry
        .file_name()
        .to_str()
        .is_some_and(|name| PRUNED_DIRS.contains(&name));
    if pruned {
        debug!(path = %entry.path().display(), "pruned directory");
    }
    pruned
}
