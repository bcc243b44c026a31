//! Project scanning
//!
//! Walks a Godot project, extracts scene relationships and script members, and
//! feeds them to the diagram writer:
//! Walker → Scene parser → Script parser → Diagram writer

mod project;
mod scene;
mod script;
mod session;
mod walker;

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, span, Level};

pub use project::{find_project_root, require_project_root, PROJECT_MARKER};
pub use scene::{
    count_lines, ResourceKind, ResourceReference, SceneExtraction, SceneParser,
    EXT_RESOURCE_MARKER,
};
pub use script::ScriptParser;
pub use session::{RunStatistics, ScanSession};
pub use walker::{is_scene_file, SceneWalker};

use crate::core::{ScanError, SourceReader};

/// Default diagram file name, created in the working directory
pub const DEFAULT_OUTPUT: &str = "output.mmd";

/// Where to scan and where to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Directory tree searched for scenes
    pub scan_root: PathBuf,
    /// Directory script paths are resolved against
    pub project_root: PathBuf,
    /// Diagram file
    pub output: PathBuf,
    /// Directory levels below `scan_root` to visit, unlimited when `None`
    pub max_depth: Option<usize>,
}

impl ScanOptions {
    /// Options for scanning `scan_root`, with the project root found by
    /// walking upward and the diagram written next to the scan root
    pub fn discover(scan_root: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let scan_root = scan_root.into();
        let project_root = require_project_root(&scan_root)?;
        let output = scan_root.join(DEFAULT_OUTPUT);
        Ok(Self {
            scan_root,
            project_root,
            output,
            max_depth: None,
        })
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn walker(&self) -> SceneWalker {
        SceneWalker::new(&self.scan_root).with_max_depth(self.max_depth)
    }
}

/// Drive `session` over every scene `walker` finds
pub fn run_scan<W: Write, R: SourceReader>(
    walker: &SceneWalker,
    mut session: ScanSession<W, R>,
) -> Result<(W, RunStatistics), ScanError> {
    let scan_span = span!(Level::INFO, "run_scan", root = %walker.root().display());
    let _enter = scan_span.enter();

    let visited = walker.walk(|path: &Path| session.process_scene(path))?;
    info!(visited, "Traversal completed");

    session.finish()
}
