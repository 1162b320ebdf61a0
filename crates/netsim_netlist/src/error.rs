//! Netlist parse errors.
//!
//! Parsing is fail-fast: the first problem found aborts the parse, and the
//! returned [`ParseError`] names the offending line so it can be rendered
//! as a [`Diagnostic`].

use crate::gate::GateKind;
use netsim_common::IdentError;
use netsim_diagnostics::{Diagnostic, DiagnosticCode, Label};
use netsim_source::Span;
use std::fmt;

/// The four netlist sections, in required order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Section {
    /// `INPUTS:`
    Inputs,
    /// `OUTPUTS:`
    Outputs,
    /// `GATES:`
    Gates,
    /// `STIMULUS:`
    Stimulus,
}

impl Section {
    /// All sections in required order.
    pub const ALL: [Section; 4] = [
        Section::Inputs,
        Section::Outputs,
        Section::Gates,
        Section::Stimulus,
    ];

    /// The header text that opens this section.
    pub fn header(self) -> &'static str {
        match self {
            Section::Inputs => "INPUTS:",
            Section::Outputs => "OUTPUTS:",
            Section::Gates => "GATES:",
            Section::Stimulus => "STIMULUS:",
        }
    }

    /// The section whose header starts `line`, if any.
    pub fn from_header_line(line: &str) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|section| line.starts_with(section.header()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Errors produced while parsing a netlist document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A required section header was not found where expected.
    #[error("expected '{section}' section at line {line}")]
    MissingSection {
        /// The section that was expected.
        section: Section,
        /// Line where the header was expected.
        line: usize,
        /// Location of the unexpected line, or the end of the document.
        span: Span,
    },

    /// A section header appeared after a later section had started.
    #[error(
        "'{section}' section at line {line} is out of order (expected INPUTS, OUTPUTS, GATES, STIMULUS)"
    )]
    SectionOutOfOrder {
        /// The misplaced section.
        section: Section,
        /// Line of the misplaced header.
        line: usize,
        /// Location of the misplaced header.
        span: Span,
    },

    /// A section that requires entries has none.
    #[error("'{section}' section at line {line} must not be empty")]
    EmptySection {
        /// The empty section.
        section: Section,
        /// Line of the section header.
        line: usize,
        /// Location of the section header.
        span: Span,
    },

    /// Unexpected text after a `GATES:` or `STIMULUS:` header.
    #[error("unexpected text after '{section}' at line {line}: '{text}'")]
    InvalidHeader {
        /// The section whose header carries extra text.
        section: Section,
        /// Line of the header.
        line: usize,
        /// The extra text.
        text: String,
        /// Location of the extra text.
        span: Span,
    },

    /// A gate line does not match `<name> = <KIND>(<args>)`.
    #[error("invalid gate line {line}: '{text}'")]
    InvalidGate {
        /// Line number.
        line: usize,
        /// The line's text.
        text: String,
        /// Location of the line.
        span: Span,
    },

    /// A gate line names a kind other than AND, OR, XOR or NOT.
    #[error("unknown gate kind '{kind}' at line {line}")]
    UnknownGateKind {
        /// Line number.
        line: usize,
        /// The unrecognized kind text.
        kind: String,
        /// Location of the kind text.
        span: Span,
    },

    /// A token where a signal name was expected is not an identifier.
    #[error("invalid identifier '{name}' at line {line}: {reason}")]
    InvalidIdentifier {
        /// Line number.
        line: usize,
        /// The offending token.
        name: String,
        /// Why it is not an identifier.
        reason: IdentError,
        /// Location of the token.
        span: Span,
    },

    /// A stimulus time is not a non-negative integer.
    #[error("invalid stimulus time '{token}' at line {line}")]
    InvalidTime {
        /// Line number.
        line: usize,
        /// The offending token.
        token: String,
        /// Location of the token.
        span: Span,
    },

    /// A gate has the wrong number of operands for its kind.
    #[error("gate '{gate}' at line {line}: {kind} takes {expected} input(s), found {found}")]
    Arity {
        /// Line number.
        line: usize,
        /// The gate's output name.
        gate: String,
        /// The gate's kind.
        kind: GateKind,
        /// Operands required by the kind.
        expected: usize,
        /// Operands actually given.
        found: usize,
        /// Location of the gate line.
        span: Span,
    },

    /// A name is declared twice.
    #[error("'{name}' at line {line} is already declared at line {first_line}")]
    DuplicateName {
        /// Line of the second declaration.
        line: usize,
        /// The duplicated name.
        name: String,
        /// Line of the first declaration.
        first_line: usize,
        /// Location of the second declaration.
        span: Span,
    },

    /// A stimulus line has the wrong number of value tokens.
    #[error("stimulus line {line} has {found} value(s), expected {expected}: '{text}'")]
    StimulusLength {
        /// Line number.
        line: usize,
        /// Number of primary inputs.
        expected: usize,
        /// Number of value tokens found after the time.
        found: usize,
        /// The line's text.
        text: String,
        /// Location of the line.
        span: Span,
    },

    /// A stimulus time is not greater than the one before it.
    #[error("stimulus time {time} at line {line} is not greater than previous time {previous}")]
    NonIncreasingTime {
        /// Line number.
        line: usize,
        /// The offending time.
        time: u64,
        /// The previous event's time.
        previous: u64,
        /// Location of the time token.
        span: Span,
    },

    /// A stimulus value is not `0` or `1`.
    #[error("stimulus value '{token}' at line {line} must be 0 or 1")]
    NonBinaryValue {
        /// Line number.
        line: usize,
        /// The offending token.
        token: String,
        /// Location of the token.
        span: Span,
    },
}

impl ParseError {
    /// The 1-based line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingSection { line, .. }
            | ParseError::SectionOutOfOrder { line, .. }
            | ParseError::EmptySection { line, .. }
            | ParseError::InvalidHeader { line, .. }
            | ParseError::InvalidGate { line, .. }
            | ParseError::UnknownGateKind { line, .. }
            | ParseError::InvalidIdentifier { line, .. }
            | ParseError::InvalidTime { line, .. }
            | ParseError::Arity { line, .. }
            | ParseError::DuplicateName { line, .. }
            | ParseError::StimulusLength { line, .. }
            | ParseError::NonIncreasingTime { line, .. }
            | ParseError::NonBinaryValue { line, .. } => *line,
        }
    }

    /// Location of the offending text.
    pub fn span(&self) -> Span {
        match self {
            ParseError::MissingSection { span, .. }
            | ParseError::SectionOutOfOrder { span, .. }
            | ParseError::EmptySection { span, .. }
            | ParseError::InvalidHeader { span, .. }
            | ParseError::InvalidGate { span, .. }
            | ParseError::UnknownGateKind { span, .. }
            | ParseError::InvalidIdentifier { span, .. }
            | ParseError::InvalidTime { span, .. }
            | ParseError::Arity { span, .. }
            | ParseError::DuplicateName { span, .. }
            | ParseError::StimulusLength { span, .. }
            | ParseError::NonIncreasingTime { span, .. }
            | ParseError::NonBinaryValue { span, .. } => *span,
        }
    }

    /// The diagnostic code for this error's class.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            ParseError::MissingSection { .. }
            | ParseError::SectionOutOfOrder { .. }
            | ParseError::EmptySection { .. } => DiagnosticCode::STRUCTURE,
            ParseError::InvalidHeader { .. }
            | ParseError::InvalidGate { .. }
            | ParseError::UnknownGateKind { .. }
            | ParseError::InvalidIdentifier { .. }
            | ParseError::InvalidTime { .. } => DiagnosticCode::GRAMMAR,
            ParseError::Arity { .. } => DiagnosticCode::ARITY,
            ParseError::DuplicateName { .. } => DiagnosticCode::DUPLICATE_NAME,
            ParseError::StimulusLength { .. }
            | ParseError::NonIncreasingTime { .. }
            | ParseError::NonBinaryValue { .. } => DiagnosticCode::STIMULUS,
        }
    }

    /// Converts this error into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = self.span();
        let diag = Diagnostic::error(self.code(), self.to_string(), span);
        match self {
            ParseError::InvalidGate { .. } => diag
                .with_label(Label::primary(span, "not a gate declaration"))
                .with_help("gate lines look like `y = AND(a, b)` or `y = NOT(a)`"),
            ParseError::UnknownGateKind { .. } => diag
                .with_label(Label::primary(span, "unknown kind"))
                .with_help("supported gate kinds are AND, OR, XOR and NOT"),
            ParseError::Arity { kind, .. } => diag.with_label(Label::primary(
                span,
                format!("{kind} takes {}", kind.arity()),
            )),
            ParseError::DuplicateName { .. } => {
                diag.with_label(Label::primary(span, "declared again here"))
            }
            ParseError::MissingSection { .. }
            | ParseError::SectionOutOfOrder { .. } => diag
                .with_note("sections must appear in the order INPUTS, OUTPUTS, GATES, STIMULUS"),
            ParseError::StimulusLength { expected, .. } => diag.with_help(format!(
                "each stimulus line is a time followed by {expected} value(s), one per input"
            )),
            _ => diag,
        }
    }
}
