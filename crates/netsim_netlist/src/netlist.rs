//! The validated, immutable netlist.

use crate::arena::Arena;
use crate::gate::Gate;
use crate::ids::GateId;
use netsim_source::Span;
use serde::Serialize;
use std::collections::HashMap;

/// A primary input or primary output declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Port {
    /// Signal name.
    pub name: String,
    /// Location of the name in its header line.
    pub span: Span,
}

/// One time-stamped assignment of values to every primary input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StimulusEvent {
    /// Stimulus time. Strictly increasing across events.
    pub time: u64,
    /// One value per primary input, in input declaration order.
    pub values: Vec<bool>,
}

/// How a name is defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignalKind {
    /// A primary input at the given position in the INPUTS list.
    PrimaryInput(usize),
    /// The output of a gate.
    Gate(GateId),
}

/// A parsed combinational circuit plus its stimulus.
///
/// Only the parser constructs a `Netlist`, after checking the structural
/// invariants: non-empty input, output and gate lists, unique names across
/// inputs and gates, correct gate arity, and well-formed, strictly
/// increasing stimulus. Whether gate operands resolve is checked by the
/// dependency resolver.
#[derive(Debug, Serialize)]
pub struct Netlist {
    inputs: Vec<Port>,
    outputs: Vec<Port>,
    gates: Arena<GateId, Gate>,
    stimulus: Vec<StimulusEvent>,
    #[serde(skip)]
    names: HashMap<String, SignalKind>,
}

impl Netlist {
    pub(crate) fn new(
        inputs: Vec<Port>,
        outputs: Vec<Port>,
        gates: Arena<GateId, Gate>,
        stimulus: Vec<StimulusEvent>,
    ) -> Self {
        let mut names = HashMap::with_capacity(inputs.len() + gates.len());
        for (idx, port) in inputs.iter().enumerate() {
            names.insert(port.name.clone(), SignalKind::PrimaryInput(idx));
        }
        for (id, gate) in gates.iter() {
            names.insert(gate.name.clone(), SignalKind::Gate(id));
        }
        Self {
            inputs,
            outputs,
            gates,
            stimulus,
            names,
        }
    }

    /// Primary inputs in declared order.
    pub fn inputs(&self) -> &[Port] {
        &self.inputs
    }

    /// Primary outputs in declared order.
    pub fn outputs(&self) -> &[Port] {
        &self.outputs
    }

    /// Gates in declaration order.
    pub fn gates(&self) -> &Arena<GateId, Gate> {
        &self.gates
    }

    /// The gate with the given ID.
    pub fn gate(&self, id: GateId) -> &Gate {
        self.gates.get(id)
    }

    /// Stimulus events in increasing time order.
    pub fn stimulus(&self) -> &[StimulusEvent] {
        &self.stimulus
    }

    /// How `name` is defined, or `None` if nothing defines it.
    pub fn signal_kind(&self, name: &str) -> Option<SignalKind> {
        self.names.get(name).copied()
    }

    /// The gate driving `name`, if `name` is a gate output.
    pub fn gate_by_name(&self, name: &str) -> Option<GateId> {
        match self.signal_kind(name)? {
            SignalKind::Gate(id) => Some(id),
            SignalKind::PrimaryInput(_) => None,
        }
    }

    /// Signals that appear in traces: every input, then every output.
    pub fn tracked_signals(&self) -> impl Iterator<Item = &Port> {
        self.inputs.iter().chain(self.outputs.iter())
    }
}
