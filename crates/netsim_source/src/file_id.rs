//! Opaque identifier for documents loaded into a [`SourceDb`](crate::SourceDb).

use serde::{Deserialize, Serialize};

/// Identifies one loaded netlist document.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct FileId(u32);

impl FileId {
    /// Placeholder for spans that do not belong to any loaded document.
    pub const DUMMY: FileId = FileId(u32::MAX);

    /// Creates a `FileId` from a raw index.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw index.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}
