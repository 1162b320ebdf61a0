//! Gate kinds and gate declarations.

use netsim_source::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported boolean gates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GateKind {
    /// Two-input conjunction.
    And,
    /// Two-input disjunction.
    Or,
    /// Two-input exclusive or.
    Xor,
    /// One-input negation.
    Not,
}

impl GateKind {
    /// All gate kinds, in keyword order.
    pub const ALL: [GateKind; 4] = [GateKind::And, GateKind::Or, GateKind::Xor, GateKind::Not];

    /// Number of operands this kind takes.
    pub fn arity(self) -> usize {
        match self {
            GateKind::Not => 1,
            GateKind::And | GateKind::Or | GateKind::Xor => 2,
        }
    }

    /// The upper-case keyword used in netlist text.
    pub fn keyword(self) -> &'static str {
        match self {
            GateKind::And => "AND",
            GateKind::Or => "OR",
            GateKind::Xor => "XOR",
            GateKind::Not => "NOT",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Returned by [`GateKind::from_str`] for anything but an exact keyword.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gate kind '{0}'")]
pub struct UnknownGateKind(pub String);

impl FromStr for GateKind {
    type Err = UnknownGateKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::ALL
            .into_iter()
            .find(|kind| kind.keyword() == s)
            .ok_or_else(|| UnknownGateKind(s.to_string()))
    }
}

/// A gate operand: the name of a primary input or of another gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operand {
    /// Referenced signal name.
    pub name: String,
    /// Location of the name in the gate line.
    pub span: Span,
}

/// One `<name> = <KIND>(<args>)` declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    /// Output signal name, unique across inputs and gates.
    pub name: String,
    /// Boolean function computed by the gate.
    pub kind: GateKind,
    /// Operands in declared order; length equals `kind.arity()`.
    pub operands: Vec<Operand>,
    /// Location of the whole declaration line.
    pub span: Span,
}

impl Gate {
    /// Iterates over operand names in declared order.
    pub fn operand_names(&self) -> impl Iterator<Item = &str> {
        self.operands.iter().map(|op| op.name.as_str())
    }
}
