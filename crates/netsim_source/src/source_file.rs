//! A loaded document with a line-start index for line/column lookup.

use crate::file_id::FileId;
use std::path::PathBuf;

/// One netlist document held by the [`SourceDb`](crate::SourceDb).
pub struct SourceFile {
    /// Identifier assigned by the database.
    pub id: FileId,
    /// Filesystem path, or a synthetic name for in-memory text.
    pub path: PathBuf,
    /// Full document text.
    pub content: String,
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Creates a file and indexes its line starts.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        let mut line_starts = vec![0u32];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| (i + 1) as u32),
        );
        Self {
            id,
            path,
            content,
            line_starts,
        }
    }

    /// Converts a byte offset into 1-indexed `(line, column)`.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let col = byte_offset - self.line_starts[line_idx] + 1;
        (line_idx as u32 + 1, col)
    }

    /// Returns the text of the line containing `byte_offset`, without its newline.
    pub fn line_text(&self, byte_offset: u32) -> &str {
        let (line, _) = self.line_col(byte_offset);
        let start = self.line_starts[line as usize - 1] as usize;
        let end = self
            .line_starts
            .get(line as usize)
            .map_or(self.content.len(), |&next| next as usize);
        self.content[start..end].trim_end_matches(['\n', '\r'])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_file(content: &str) -> SourceFile {
        SourceFile::new(
            FileId::from_raw(0),
            PathBuf::from("adder.net"),
            content.to_string(),
        )
    }

    #[test]
    fn line_col_resolution() {
        let f = make_file("INPUTS: a\nOUTPUTS: y\n");
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_col(8), (1, 9));
        assert_eq!(f.line_col(10), (2, 1));
        assert_eq!(f.line_col(13), (2, 4));
    }

    #[test]
    fn line_text_strips_newline() {
        let f = make_file("GATES:\r\ny = NOT(a)\nSTIMULUS:");
        assert_eq!(f.line_text(0), "GATES:");
        assert_eq!(f.line_text(10), "y = NOT(a)");
        assert_eq!(f.line_text(22), "STIMULUS:");
    }

    #[test]
    fn empty_file() {
        let f = make_file("");
        assert_eq!(f.line_col(0), (1, 1));
        assert_eq!(f.line_text(0), "");
    }
}
