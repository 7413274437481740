//! Locating the review configuration document.
//!
//! The document conventionally lives at the project root. Discovery walks
//! from a starting directory up through its ancestors and returns the first
//! candidate file found.

use std::path::{Path, PathBuf};
use tracing::debug;

/// File names checked in each directory, in priority order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".coderabbit.yaml", ".coderabbit.yml"];

/// Find the nearest review configuration document at or above `start`.
pub fn discover(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                debug!(path = %candidate.display(), "found review config");
                return Some(candidate);
            }
        }
    }

    debug!(start = %start.display(), "no review config found");
    None
}
