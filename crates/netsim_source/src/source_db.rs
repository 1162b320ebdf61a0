//! Central store of every document loaded during a run.

use crate::file_id::FileId;
use crate::source_file::SourceFile;
use crate::span::Span;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A span resolved to 1-indexed line/column coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpan {
    /// Path of the document.
    pub file_path: PathBuf,
    /// Line of the first byte.
    pub line: u32,
    /// Column of the first byte.
    pub col: u32,
}

impl fmt::Display for ResolvedSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file_path.display(), self.line, self.col)
    }
}

/// Owns all loaded netlist text and resolves [`Span`]s against it.
#[derive(Default)]
pub struct SourceDb {
    files: Vec<SourceFile>,
}

impl SourceDb {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Reads a document from disk.
    pub fn load_file(&mut self, path: &Path) -> Result<FileId, io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(self.add_source(path, content))
    }

    /// Adds an in-memory document; `name` is used as its path in diagnostics.
    pub fn add_source(&mut self, name: impl Into<PathBuf>, content: String) -> FileId {
        let id = FileId::from_raw(self.files.len() as u32);
        self.files.push(SourceFile::new(id, name.into(), content));
        id
    }

    /// Returns the document with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id was not issued by this database.
    pub fn get_file(&self, id: FileId) -> &SourceFile {
        &self.files[id.as_raw() as usize]
    }

    /// Returns the document for `id`, or `None` for dummy or foreign ids.
    pub fn try_get_file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.as_raw() as usize)
    }

    /// Resolves a span to its starting line and column.
    pub fn resolve_span(&self, span: Span) -> Option<ResolvedSpan> {
        let file = self.try_get_file(span.file)?;
        let (line, col) = file.line_col(span.start);
        Some(ResolvedSpan {
            file_path: file.path.clone(),
            line,
            col,
        })
    }
}
