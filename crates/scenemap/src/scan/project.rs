//! Project root discovery

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::ScanError;

/// File marking the root of a Godot project
pub const PROJECT_MARKER: &str = "project.godot";

/// Walk up from `start` to the first directory containing [`PROJECT_MARKER`]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        if dir.join(PROJECT_MARKER).is_file() {
            debug!(root = %dir.display(), "Found project root");
            return Some(dir.to_path_buf());
        }
    }
    None
}

/// Like [`find_project_root`], but a missing marker is an error
pub fn require_project_root(start: &Path) -> Result<PathBuf, ScanError> {
    find_project_root(start).ok_or_else(|| ScanError::project_not_found(start, PROJECT_MARKER))
}
