//! Class diagram emitter
//!
//! Streams Mermaid `classDiagram` markup. Scenes are written in the order they
//! are handed over and the sink is flushed after each one, so an interrupted
//! scan still leaves a valid diagram prefix behind.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::trace;

use super::database::{MemberKind, SceneRecord, Statement};
use crate::core::ScanError;

/// First line of every emitted diagram
pub const DIAGRAM_HEADER: &str = "classDiagram";

/// Render a single statement of `scene` without indentation or newline
///
/// # Example
/// ```
/// use scenemap::diagram::{format_statement, MemberDeclaration, Statement};
///
/// let statement = Statement::Member(MemberDeclaration::method("Attack"));
/// assert_eq!(format_statement("Player", &statement), "Player: +Attack()");
/// ```
pub fn format_statement(scene: &str, statement: &Statement) -> String {
    match statement {
        Statement::Member(member) => match member.kind {
            MemberKind::Field => format!("{}: +{}", scene, member.name),
            MemberKind::Method => format!("{}: +{}()", scene, member.name),
        },
        Statement::Composition(edge) => format!("{} <|-- {}", edge.container, edge.embedded),
    }
}

/// Streaming writer for class diagram markup
pub struct DiagramWriter<W: Write> {
    writer: W,
    scenes_written: usize,
}

impl DiagramWriter<File> {
    /// Create (or truncate) the diagram file at `path` and write the header
    pub fn create(path: impl AsRef<Path>) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ScanError::output_create(path, e))?;
        Self::new(file)
    }
}

impl<W: Write> DiagramWriter<W> {
    /// Wrap `writer` and emit the diagram header
    pub fn new(mut writer: W) -> Result<Self, ScanError> {
        writeln!(writer, "{}", DIAGRAM_HEADER).map_err(ScanError::write)?;
        writer.flush().map_err(ScanError::write)?;
        Ok(Self {
            writer,
            scenes_written: 0,
        })
    }

    /// Append one scene: its class declaration followed by its statements
    pub fn write_scene(&mut self, scene: &SceneRecord) -> Result<(), ScanError> {
        writeln!(self.writer, "\tclass {}", scene.name).map_err(ScanError::write)?;
        for statement in scene.statements() {
            let line = format_statement(&scene.name, statement);
            trace!(scene = %scene.name, statement = %line, "Emitting statement");
            writeln!(self.writer, "\t{}", line).map_err(ScanError::write)?;
        }
        self.writer.flush().map_err(ScanError::write)?;
        self.scenes_written += 1;
        Ok(())
    }

    pub fn scenes_written(&self) -> usize {
        self.scenes_written
    }

    /// Flush and hand back the underlying writer
    pub fn finish(mut self) -> Result<W, ScanError> {
        self.writer.flush().map_err(ScanError::write)?;
        Ok(self.writer)
    }
}
