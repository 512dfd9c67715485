use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a directory scan before it produces any results.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot read project directory {}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
