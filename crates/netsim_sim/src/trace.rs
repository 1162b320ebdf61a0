//! Per-signal value sequences produced by a simulation run.

use serde::Serialize;

/// The values one tracked signal took, one per stimulus event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignalTrace {
    /// Signal name.
    pub name: String,
    /// One value per stimulus event, in time order.
    pub values: Vec<bool>,
}

impl SignalTrace {
    /// The values as a string of `0` and `1` characters.
    pub fn wave(&self) -> String {
        self.values.iter().map(|&v| if v { '1' } else { '0' }).collect()
    }
}

/// Traces for every primary input then every primary output, in declared
/// order, plus the stimulus time of each event.
///
/// Every trace has exactly [`event_count`](Self::event_count) values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignalTraces {
    times: Vec<u64>,
    signals: Vec<SignalTrace>,
}

impl SignalTraces {
    pub(crate) fn new(times: Vec<u64>, signals: Vec<SignalTrace>) -> Self {
        debug_assert!(signals.iter().all(|s| s.values.len() == times.len()));
        Self { times, signals }
    }

    /// Values of the first tracked signal called `name`.
    pub fn get(&self, name: &str) -> Option<&[bool]> {
        self.signals
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.values.as_slice())
    }

    /// Values of `name` as a `0`/`1` string.
    pub fn wave_string(&self, name: &str) -> Option<String> {
        self.signals.iter().find(|s| s.name == name).map(SignalTrace::wave)
    }

    /// Traces in tracked order.
    pub fn iter(&self) -> impl Iterator<Item = &SignalTrace> {
        self.signals.iter()
    }

    /// Stimulus time of each event.
    pub fn times(&self) -> &[u64] {
        &self.times
    }

    /// Number of tracked signals.
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Whether no signal is tracked.
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Number of stimulus events, and so the length of every trace.
    pub fn event_count(&self) -> usize {
        self.times.len()
    }
}
