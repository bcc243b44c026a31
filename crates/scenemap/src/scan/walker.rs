//! Directory traversal
//!
//! Depth-first walk in file system order. Symbolic links are never followed,
//! so link cycles cannot trap the walk. Entries that cannot be read are
//! logged and skipped.

use std::path::{Path, PathBuf};

use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::core::{ScanError, SCENE_EXTENSION};

/// Walks a directory tree looking for scene files
#[derive(Debug, Clone)]
pub struct SceneWalker {
    root: PathBuf,
    max_depth: Option<usize>,
}

impl SceneWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: None,
        }
    }

    /// Limit how many directory levels below the root are visited
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Call `visit` for every scene file under the root
    ///
    /// Stops at the first error returned by `visit`. Returns the number of
    /// scene files visited.
    pub fn walk<F>(&self, mut visit: F) -> Result<usize, ScanError>
    where
        F: FnMut(&Path) -> Result<(), ScanError>,
    {
        let mut walker = WalkDir::new(&self.root).follow_links(false);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let mut visited = 0;
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                    warn!(path = %path, error = %e, "Could not open path");
                    continue;
                }
            };

            if entry.file_type().is_dir() || !is_scene_file(entry.path()) {
                continue;
            }

            trace!(path = %entry.path().display(), "Found scene");
            visit(entry.path())?;
            visited += 1;
        }

        Ok(visited)
    }

    /// Collect every scene file under the root
    pub fn scene_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        // The collecting closure never fails
        let _ = self.walk(|path| {
            files.push(path.to_path_buf());
            Ok(())
        });
        files
    }
}

/// Whether `path` names a scene file
pub fn is_scene_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(SCENE_EXTENSION))
        .unwrap_or(false)
}
