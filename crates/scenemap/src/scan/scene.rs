//! Scene relationship extractor
//!
//! Reads the `ext_resource` lines of a `.tscn` file. The first attached script
//! supplies the scene's members, every attached script counts toward lines of
//! code, and every embedded scene becomes a composition edge.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, span, warn, Level};

use super::script::ScriptParser;
use crate::core::{class_name_from_path, extract_field, SourceReader, PATH_KEY, TYPE_KEY};
use crate::diagram::SceneRecord;

/// Substring marking an embedded resource declaration
pub const EXT_RESOURCE_MARKER: &str = "ext_resource";

/// Declared type of an embedded resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    Script,
    PackedScene,
    Other(String),
}

impl ResourceKind {
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "Script" => ResourceKind::Script,
            "PackedScene" => ResourceKind::PackedScene,
            other => ResourceKind::Other(other.to_string()),
        }
    }
}

/// One `ext_resource` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceReference {
    pub kind: ResourceKind,
    /// Path relative to the project root
    pub path: String,
}

impl ResourceReference {
    /// Parse a scene line, returning `None` unless it declares a resource
    ///
    /// # Example
    /// ```
    /// use scenemap::scan::{ResourceKind, ResourceReference};
    ///
    /// let line = r#"[ext_resource path="res://Enemy.tscn" type="PackedScene" id=2]"#;
    /// let reference = ResourceReference::from_line(line).unwrap();
    /// assert_eq!(reference.kind, ResourceKind::PackedScene);
    /// assert_eq!(reference.path, "Enemy.tscn");
    /// ```
    pub fn from_line(line: &str) -> Option<Self> {
        if !line.contains(EXT_RESOURCE_MARKER) {
            return None;
        }
        Some(Self {
            kind: ResourceKind::from_type_name(&extract_field(line, TYPE_KEY)),
            path: extract_field(line, PATH_KEY),
        })
    }
}

/// Result of processing one scene's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneExtraction {
    pub record: SceneRecord,
    /// Lines across every script the scene references
    pub lines_of_code: usize,
    pub script_references: usize,
    pub unreadable_scripts: usize,
}

/// Count lines the way the scan summary reports them: the number of
/// `\n`-separated segments, so an empty file counts as one line
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

/// Scene relationship extractor
pub struct SceneParser<R: SourceReader> {
    reader: R,
    project_root: PathBuf,
    scripts: ScriptParser,
}

impl<R: SourceReader> SceneParser<R> {
    /// Create a parser resolving script paths against `project_root`
    pub fn new(reader: R, project_root: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            project_root: project_root.into(),
            scripts: ScriptParser::new(),
        }
    }

    /// Read the scene at `path` and process it
    pub fn parse_file(&self, path: &Path) -> io::Result<SceneExtraction> {
        let text = self.reader.read_to_string(path)?;
        Ok(self.parse(&class_name_from_path(path), &text))
    }

    /// Process scene `text` for the scene named `scene_name`
    pub fn parse(&self, scene_name: &str, text: &str) -> SceneExtraction {
        let scene_span = span!(Level::DEBUG, "parse_scene", scene = scene_name);
        let _enter = scene_span.enter();

        let mut extraction = SceneExtraction {
            record: SceneRecord::new(scene_name),
            lines_of_code: 0,
            script_references: 0,
            unreadable_scripts: 0,
        };
        let mut found_script = false;

        for reference in text.lines().filter_map(ResourceReference::from_line) {
            match reference.kind {
                ResourceKind::Script => {
                    extraction.script_references += 1;
                    let source = match self.read_script(&reference.path) {
                        Ok(source) => source,
                        Err(e) => {
                            warn!(script = %reference.path, error = %e, "Could not read script");
                            extraction.unreadable_scripts += 1;
                            found_script = true;
                            continue;
                        }
                    };

                    if !found_script {
                        for member in self.scripts.parse(&source) {
                            extraction.record.add_member(member);
                        }
                        found_script = true;
                    }
                    extraction.lines_of_code += count_lines(&source);
                }
                ResourceKind::PackedScene => {
                    extraction
                        .record
                        .add_composition(class_name_from_path(&reference.path));
                }
                ResourceKind::Other(_) => {}
            }
        }

        debug!(
            members = extraction.record.member_count(),
            compositions = extraction.record.composition_count(),
            lines_of_code = extraction.lines_of_code,
            "Parsed scene"
        );
        extraction
    }

    fn read_script(&self, relative: &str) -> io::Result<String> {
        self.reader
            .read_to_string(&self.project_root.join(relative))
    }
}
