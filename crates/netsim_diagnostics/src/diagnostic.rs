//! Structured diagnostic messages.

use crate::code::DiagnosticCode;
use crate::label::Label;
use netsim_source::Span;
use serde::{Deserialize, Serialize};

/// A reportable error with a code, a location, and optional context.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable code identifying the kind of problem.
    pub code: DiagnosticCode,
    /// Main message.
    pub message: String,
    /// Where the problem was detected. May be [`Span::DUMMY`].
    pub primary_span: Span,
    /// Additional annotated spans.
    pub labels: Vec<Label>,
    /// Footnotes printed as `= note: ...`.
    pub notes: Vec<String>,
    /// Suggestions printed as `= help: ...`.
    pub help: Vec<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            primary_span: span,
            labels: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Adds a label.
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Adds a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help message.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}
