//! Scenemap - Map Godot scenes and scripts into Mermaid.js class diagrams
//!
//! Every `.tscn` file becomes a class. The first script attached to a scene
//! contributes its public fields and methods, and every embedded scene becomes
//! a `<|--` edge. Along the way the scan counts scenes and script lines.
//!
//! Extraction is line-oriented and heuristic. Nothing here parses the scene
//! format or GDScript properly.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scenemap::{scan_project, ScanOptions};
//!
//! let options = ScanOptions::discover(std::env::current_dir().unwrap()).unwrap();
//! let stats = scan_project(&options).unwrap();
//! println!("Scenes: {}", stats.scenes);
//! ```
//!
//! # Advanced Usage
//!
//! The pieces work on plain text too:
//!
//! ```rust
//! use scenemap::prelude::*;
//!
//! let reader = MemoryReader::new().with_file("/game/player.gd", "var Health = 100\nfunc Attack():");
//! let parser = SceneParser::new(reader, "/game");
//!
//! let scene = r#"[ext_resource path="res://player.gd" type="Script" id=1]"#;
//! let extraction = parser.parse("Player", scene);
//! assert_eq!(extraction.record.member_count(), 2);
//!
//! let mut writer = DiagramWriter::new(Vec::new()).unwrap();
//! writer.write_scene(&extraction.record).unwrap();
//! let diagram = String::from_utf8(writer.finish().unwrap()).unwrap();
//! assert!(diagram.contains("Player: +Attack()"));
//! ```

pub mod core;
pub mod diagram;
pub mod scan;

pub use crate::core::*;
pub use scan::{RunStatistics, ScanOptions, DEFAULT_OUTPUT};

use std::path::Path;

use tracing::{span, Level};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        class_name_from_path, extract_field, FsReader, MemoryReader, ScanError, SourceReader,
    };
    pub use crate::diagram::{
        DiagramWriter, MemberDeclaration, MemberKind, SceneRecord, Statement,
    };
    pub use crate::scan::{
        RunStatistics, ScanOptions, ScanSession, SceneParser, SceneWalker, ScriptParser,
    };
}

/// Scan a project on disk and write the diagram file
///
/// Creating the output file is fatal, as is any later write to it. Scenes and
/// scripts that cannot be read are logged and skipped.
pub fn scan_project(options: &ScanOptions) -> anyhow::Result<RunStatistics> {
    use crate::diagram::DiagramWriter;
    use crate::scan::{run_scan, ScanSession, SceneParser};

    let project_span = span!(
        Level::INFO,
        "scan_project",
        project_root = %options.project_root.display(),
        output = %options.output.display()
    );
    let _enter = project_span.enter();

    let writer = DiagramWriter::create(&options.output)?;
    let parser = SceneParser::new(FsReader::new(), &options.project_root);
    let session = ScanSession::new(writer, parser);

    let (file, stats) = run_scan(&options.walker(), session)?;
    file.sync_all().map_err(ScanError::write)?;
    Ok(stats)
}

/// Scan a project on disk and return the diagram as a string
///
/// # Example
/// ```rust,no_run
/// let (diagram, stats) = scenemap::scan_to_string("/game", "/game").unwrap();
/// assert!(diagram.starts_with("classDiagram"));
/// ```
pub fn scan_to_string(
    scan_root: impl AsRef<Path>,
    project_root: impl AsRef<Path>,
) -> anyhow::Result<(String, RunStatistics)> {
    use crate::diagram::DiagramWriter;
    use crate::scan::{run_scan, ScanSession, SceneParser, SceneWalker};

    let writer = DiagramWriter::new(Vec::new())?;
    let parser = SceneParser::new(FsReader::new(), project_root.as_ref());
    let session = ScanSession::new(writer, parser);

    let (buffer, stats) = run_scan(&SceneWalker::new(scan_root.as_ref()), session)?;
    Ok((String::from_utf8(buffer)?, stats))
}
