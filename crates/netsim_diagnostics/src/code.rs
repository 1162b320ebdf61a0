//! Stable diagnostic codes.
//!
//! Numbers are grouped by pipeline stage: `1xx` for the netlist parser,
//! `2xx` for dependency resolution and `3xx` for internal failures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An error number, displayed with its `E` prefix as e.g. `E102`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiagnosticCode(u16);

impl DiagnosticCode {
    /// A section is missing, out of order, or empty.
    pub const STRUCTURE: DiagnosticCode = DiagnosticCode(101);
    /// A line does not match the token grammar.
    pub const GRAMMAR: DiagnosticCode = DiagnosticCode(102);
    /// A gate has the wrong number of operands for its kind.
    pub const ARITY: DiagnosticCode = DiagnosticCode(103);
    /// A name is declared twice.
    pub const DUPLICATE_NAME: DiagnosticCode = DiagnosticCode(104);
    /// A stimulus line has bad length, time or values.
    pub const STIMULUS: DiagnosticCode = DiagnosticCode(105);
    /// The gate graph contains a cycle.
    pub const CYCLE: DiagnosticCode = DiagnosticCode(201);
    /// A referenced signal is never defined.
    pub const UNDEFINED_SIGNAL: DiagnosticCode = DiagnosticCode(202);
    /// An internal invariant failed.
    pub const INTERNAL: DiagnosticCode = DiagnosticCode(301);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:03}", self.0)
    }
}
