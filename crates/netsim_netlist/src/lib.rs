//! Netlist data model and the line-oriented netlist parser.
//!
//! A netlist document has four sections in fixed order:
//!
//! ```text
//! INPUTS: A B
//! OUTPUTS: C
//! GATES:
//! C = AND(A, B)
//! STIMULUS:
//! 0 0 0
//! 1 1 0
//! ```
//!
//! [`parse_netlist`] validates the document and produces an immutable
//! [`Netlist`]. Gate operands are kept as names here; checking that they
//! resolve, and ordering gates for evaluation, happens in `netsim_sim`.

#![warn(missing_docs)]

pub mod arena;
pub mod error;
pub mod gate;
pub mod ids;
pub mod netlist;
pub mod parser;

pub use arena::{Arena, ArenaId};
pub use error::{ParseError, Section};
pub use gate::{Gate, GateKind, Operand, UnknownGateKind};
pub use ids::GateId;
pub use netlist::{Netlist, Port, SignalKind, StimulusEvent};
pub use parser::parse_netlist;
