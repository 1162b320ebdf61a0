//! The simulation engine.
//!
//! [`Simulator::new`] resolves the evaluation order once and compiles the
//! netlist into a slot plan: every primary input and every gate output gets
//! a dense slot index, and each gate becomes a step reading operand slots
//! and writing its own. Evaluating an event is then a single pass over the
//! plan with no name lookups. Events are independent, so they may be
//! evaluated in parallel and merged back in time order.

use crate::error::SimError;
use crate::eval::evaluate;
use crate::order::{resolve_order, EvalOrder};
use crate::trace::{SignalTrace, SignalTraces};
use log::{debug, trace};
use netsim_common::{InternalError, NetsimResult};
use netsim_config::SimulationConfig;
use netsim_netlist::{GateKind, Netlist, SignalKind, StimulusEvent};
use rayon::prelude::*;

/// Largest operand count of any gate kind.
const MAX_OPERANDS: usize = 2;

/// How [`simulate`] evaluates stimulus events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimOptions {
    /// Evaluate events on the rayon thread pool.
    pub parallel: bool,
    /// Minimum event count before `parallel` takes effect.
    pub parallel_threshold: usize,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: 64,
        }
    }
}

impl From<&SimulationConfig> for SimOptions {
    fn from(config: &SimulationConfig) -> Self {
        Self {
            parallel: config.parallel,
            parallel_threshold: config.parallel_threshold,
        }
    }
}

/// One gate of the slot plan.
#[derive(Debug)]
struct Step {
    kind: GateKind,
    operands: Vec<usize>,
    output: usize,
}

/// A netlist compiled for repeated evaluation.
#[derive(Debug)]
pub struct Simulator<'n> {
    netlist: &'n Netlist,
    order: EvalOrder,
    plan: Vec<Step>,
    /// Slot of each tracked signal, inputs then outputs.
    tracked: Vec<usize>,
    slot_count: usize,
}

impl<'n> Simulator<'n> {
    /// Resolves `netlist` and builds its slot plan.
    pub fn new(netlist: &'n Netlist) -> Result<Self, SimError> {
        let order = resolve_order(netlist)?;
        let input_count = netlist.inputs().len();
        let slot_of = |name: &str| -> NetsimResult<usize> {
            match netlist.signal_kind(name) {
                Some(SignalKind::PrimaryInput(idx)) => Ok(idx),
                Some(SignalKind::Gate(id)) => Ok(input_count + id.index()),
                None => Err(InternalError::new(format!(
                    "signal '{name}' has no slot after resolution"
                ))),
            }
        };

        let mut plan = Vec::with_capacity(order.len());
        for &id in order.gates() {
            let gate = netlist.gate(id);
            let mut operands = Vec::with_capacity(gate.operands.len());
            for operand in &gate.operands {
                operands.push(slot_of(&operand.name)?);
            }
            plan.push(Step {
                kind: gate.kind,
                operands,
                output: input_count + id.index(),
            });
        }

        let mut tracked = Vec::new();
        for port in netlist.tracked_signals() {
            tracked.push(slot_of(&port.name)?);
        }

        debug!(
            "compiled {} gate(s) into {} slot(s), tracking {} signal(s)",
            plan.len(),
            input_count + netlist.gates().len(),
            tracked.len()
        );
        Ok(Self {
            netlist,
            order,
            plan,
            tracked,
            slot_count: input_count + netlist.gates().len(),
        })
    }

    /// The resolved evaluation order.
    pub fn order(&self) -> &EvalOrder {
        &self.order
    }

    /// Evaluates every stimulus event in time order on the current thread.
    pub fn run(&self) -> NetsimResult<SignalTraces> {
        let rows = self
            .netlist
            .stimulus()
            .iter()
            .map(|event| self.eval_event(event))
            .collect::<NetsimResult<Vec<_>>>()?;
        Ok(self.assemble(rows))
    }

    /// Evaluates stimulus events on the rayon thread pool.
    ///
    /// Produces exactly the traces [`run`](Self::run) does.
    pub fn run_parallel(&self) -> NetsimResult<SignalTraces> {
        let rows = self
            .netlist
            .stimulus()
            .par_iter()
            .map(|event| self.eval_event(event))
            .collect::<NetsimResult<Vec<_>>>()?;
        Ok(self.assemble(rows))
    }

    /// Binds one event's inputs, runs the plan and returns the tracked values.
    fn eval_event(&self, event: &StimulusEvent) -> NetsimResult<Vec<bool>> {
        let input_count = self.netlist.inputs().len();
        if event.values.len() != input_count {
            return Err(InternalError::new(format!(
                "stimulus at time {} has {} value(s) for {} input(s)",
                event.time,
                event.values.len(),
                input_count
            )));
        }

        let mut slots = vec![false; self.slot_count];
        slots[..input_count].copy_from_slice(&event.values);
        for step in &self.plan {
            let mut buf = [false; MAX_OPERANDS];
            let args = buf.get_mut(..step.operands.len()).ok_or_else(|| {
                InternalError::new(format!("gate with {} operands", step.operands.len()))
            })?;
            for (arg, &slot) in args.iter_mut().zip(&step.operands) {
                *arg = slots[slot];
            }
            slots[step.output] = evaluate(step.kind, args)?;
        }

        let row: Vec<bool> = self.tracked.iter().map(|&slot| slots[slot]).collect();
        trace!("t={}: {:?}", event.time, row);
        Ok(row)
    }

    /// Transposes per-event rows into per-signal traces.
    fn assemble(&self, rows: Vec<Vec<bool>>) -> SignalTraces {
        let signals = self
            .netlist
            .tracked_signals()
            .enumerate()
            .map(|(col, port)| SignalTrace {
                name: port.name.clone(),
                values: rows.iter().map(|row| row[col]).collect(),
            })
            .collect();
        let times = self.netlist.stimulus().iter().map(|e| e.time).collect();
        SignalTraces::new(times, signals)
    }
}

/// Resolves and simulates `netlist` in one call.
pub fn simulate(netlist: &Netlist, options: &SimOptions) -> Result<SignalTraces, SimError> {
    let simulator = Simulator::new(netlist)?;
    let events = netlist.stimulus().len();
    let traces = if options.parallel && events >= options.parallel_threshold {
        debug!("evaluating {events} event(s) in parallel");
        simulator.run_parallel()?
    } else {
        simulator.run()?
    };
    Ok(traces)
}
