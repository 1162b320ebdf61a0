//! Structured diagnostics for netlist errors and their terminal rendering.
//!
//! Every user-facing failure (parse, resolve, internal) converts into a
//! [`Diagnostic`] carrying a stable [`DiagnosticCode`], a primary [`Span`]
//! and optional notes. [`TerminalRenderer`] prints it rustc-style with the
//! offending netlist line underlined.
//!
//! [`Span`]: netsim_source::Span

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod label;
pub mod renderer;

pub use code::DiagnosticCode;
pub use diagnostic::Diagnostic;
pub use label::{Label, LabelStyle};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
