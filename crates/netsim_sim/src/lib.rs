//! Dependency resolution, evaluation and waveform output for netsim.
//!
//! The pipeline after parsing is:
//!
//! 1. [`resolve_order`] checks that every name resolves and orders the gates
//!    so each runs after the gates it reads, or reports the gates on a cycle.
//! 2. [`Simulator`] compiles the netlist into a slot plan and evaluates each
//!    stimulus event with [`evaluate`], producing [`SignalTraces`].
//! 3. A [`WaveformWriter`] serializes the traces as WaveDrom JSON or VCD.
//!
//! # Usage
//!
//! ```ignore
//! use netsim_sim::{simulate, SimOptions, WaveDromWriter, WaveformWriter};
//!
//! let netlist = netsim_netlist::parse_netlist(&text, file)?;
//! let traces = simulate(&netlist, &SimOptions::default())?;
//! print!("{}", WaveDromWriter::default().render(&traces)?);
//! ```

#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod eval;
pub mod order;
pub mod trace;
pub mod waveform;

pub use engine::{simulate, SimOptions, Simulator};
pub use error::{ResolveError, SimError};
pub use eval::evaluate;
pub use order::{resolve_order, EvalOrder};
pub use trace::{SignalTrace, SignalTraces};
pub use waveform::{writer_for, VcdWriter, WaveDromWriter, WaveformFormat, WaveformWriter};
