//! Source reader abstraction
//!
//! Scene and script text is read through this trait so extraction can run
//! against the file system or against in-memory fixtures.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Core trait for reading source files as text
pub trait SourceReader {
    /// Read the whole file at `path` as text
    ///
    /// Bytes that are not valid UTF-8 are replaced, never rejected.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Reader backed by the local file system
#[derive(Debug, Default, Clone, Copy)]
pub struct FsReader;

impl FsReader {
    pub fn new() -> Self {
        Self
    }
}

impl SourceReader for FsReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Reader serving files from memory, keyed by path
#[derive(Debug, Default, Clone)]
pub struct MemoryReader {
    files: HashMap<PathBuf, String>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl SourceReader for MemoryReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: not found", path.display()),
            )
        })
    }
}

impl<R: SourceReader + ?Sized> SourceReader for &R {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }
}
