//! Netlist source text management and span tracking for diagnostics.
//!
//! The [`SourceDb`] owns every loaded netlist document. Parsers attach
//! [`Span`]s to what they produce, and [`SourceDb::resolve_span`] turns a
//! span back into a `file:line:col` location for error reporting.

#![warn(missing_docs)]

pub mod file_id;
pub mod source_db;
pub mod source_file;
pub mod span;

pub use file_id::FileId;
pub use source_db::{ResolvedSpan, SourceDb};
pub use source_file::SourceFile;
pub use span::Span;
