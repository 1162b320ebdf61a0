//! Byte-offset ranges within a netlist document.

use crate::file_id::FileId;
use serde::{Deserialize, Serialize};

/// A byte range within a source document. `start` is inclusive, `end` exclusive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Span {
    /// The document this span belongs to.
    pub file: FileId,
    /// Byte offset of the first byte.
    pub start: u32,
    /// Byte offset one past the last byte.
    pub end: u32,
}

impl Span {
    /// A span with no source location.
    pub const DUMMY: Span = Span {
        file: FileId::DUMMY,
        start: 0,
        end: 0,
    };

    /// Creates a new span.
    pub fn new(file: FileId, start: u32, end: u32) -> Self {
        Self { file, start, end }
    }

    /// Returns the span's length in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Narrows this span to a sub-range given as byte offsets relative to `start`.
    pub fn subspan(self, rel_start: usize, rel_end: usize) -> Span {
        Span {
            file: self.file,
            start: self.start + rel_start as u32,
            end: (self.start + rel_end as u32).min(self.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        let f = FileId::from_raw(0);
        assert_eq!(Span::new(f, 4, 9).len(), 5);
        assert!(Span::new(f, 4, 4).is_empty());
    }

    #[test]
    fn subspan_is_relative() {
        let s = Span::new(FileId::from_raw(0), 10, 30);
        let sub = s.subspan(2, 5);
        assert_eq!((sub.start, sub.end), (12, 15));
    }

    #[test]
    fn subspan_clamps_to_parent() {
        let s = Span::new(FileId::from_raw(0), 10, 12);
        assert_eq!(s.subspan(0, 8).end, 12);
    }

    #[test]
    fn dummy() {
        assert_eq!(Span::DUMMY.file, FileId::DUMMY);
        assert!(Span::DUMMY.is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let s = Span::new(FileId::from_raw(1), 3, 8);
        let json = serde_json::to_string(&s).unwrap();
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(s, back);
    }
}
