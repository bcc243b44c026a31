//! Scan session context
//!
//! Owns the diagram writer, the scene parser and the running statistics for a
//! single scan, and hands the totals back when the scan finishes.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use super::scene::SceneParser;
use crate::core::{ScanError, SourceReader};
use crate::diagram::DiagramWriter;

/// Totals gathered over one scan
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    /// Scene files read and emitted
    pub scenes: usize,
    /// Lines across every script reference, duplicates included
    pub lines_of_code: usize,
    /// Scene files that could not be read
    pub skipped_scenes: usize,
    pub script_references: usize,
    pub unreadable_scripts: usize,
}

/// State threaded through a single scan
pub struct ScanSession<W: Write, R: SourceReader> {
    writer: DiagramWriter<W>,
    parser: SceneParser<R>,
    statistics: RunStatistics,
}

impl<W: Write, R: SourceReader> ScanSession<W, R> {
    pub fn new(writer: DiagramWriter<W>, parser: SceneParser<R>) -> Self {
        Self {
            writer,
            parser,
            statistics: RunStatistics::default(),
        }
    }

    /// Process one scene file
    ///
    /// An unreadable scene is logged and skipped. Only a failure to write the
    /// diagram is returned as an error.
    pub fn process_scene(&mut self, path: &Path) -> Result<(), ScanError> {
        let extraction = match self.parser.parse_file(path) {
            Ok(extraction) => extraction,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read scene");
                self.statistics.skipped_scenes += 1;
                return Ok(());
            }
        };

        self.writer.write_scene(&extraction.record)?;

        self.statistics.scenes += 1;
        self.statistics.lines_of_code += extraction.lines_of_code;
        self.statistics.script_references += extraction.script_references;
        self.statistics.unreadable_scripts += extraction.unreadable_scripts;
        Ok(())
    }

    /// Flush the diagram and return the writer with the final totals
    pub fn finish(self) -> Result<(W, RunStatistics), ScanError> {
        debug_assert_eq!(self.writer.scenes_written(), self.statistics.scenes);
        let scenes_written = self.writer.scenes_written();
        let writer = self.writer.finish()?;
        info!(
            scenes = scenes_written,
            lines_of_code = self.statistics.lines_of_code,
            skipped_scenes = self.statistics.skipped_scenes,
            "Scan finished"
        );
        Ok((writer, self.statistics))
    }
}
