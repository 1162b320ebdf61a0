//! Conformance test helpers for netsim.
//!
//! Provides pipeline functions that run netlist text through parse, resolve
//! and simulate, and return structured results for assertion in the
//! integration tests under `tests/`.

#![warn(missing_docs)]

use netsim_diagnostics::{Diagnostic, DiagnosticRenderer, TerminalRenderer};
use netsim_netlist::{parse_netlist, Netlist};
use netsim_sim::{
    resolve_order, simulate, SimOptions, SignalTraces, WaveDromWriter, WaveformWriter,
};
use netsim_source::SourceDb;

/// Name the fixture text is registered under in diagnostics.
pub const FIXTURE_NAME: &str = "fixture.net";

/// Result of running the parse, resolve and simulate pipeline.
pub struct PipelineResult {
    /// Source database holding the fixture, for rendering diagnostics.
    pub source_db: SourceDb,
    /// The parsed netlist, if parsing succeeded.
    pub netlist: Option<Netlist>,
    /// Gate names in evaluation order, if resolution succeeded.
    pub order: Vec<String>,
    /// The traces, if every stage succeeded.
    pub traces: Option<SignalTraces>,
    /// The error that stopped the pipeline, if any.
    pub diagnostic: Option<Diagnostic>,
}

impl PipelineResult {
    /// Whether the pipeline stopped with an error.
    pub fn has_error(&self) -> bool {
        self.diagnostic.is_some()
    }

    /// The diagnostic code of the error, e.g. `"E201"`.
    pub fn error_code(&self) -> Option<String> {
        self.diagnostic.as_ref().map(|d| d.code.to_string())
    }

    /// The traces, panicking with the rendered error if there are none.
    pub fn traces(&self) -> &SignalTraces {
        match &self.traces {
            Some(traces) => traces,
            None => panic!("pipeline failed:\n{}", self.rendered()),
        }
    }

    /// The `0`/`1` wave of `signal`.
    pub fn wave(&self, signal: &str) -> String {
        self.traces()
            .wave_string(signal)
            .unwrap_or_else(|| panic!("no trace for '{signal}'"))
    }

    /// The error rendered as the CLI would print it, without color.
    pub fn rendered(&self) -> String {
        match &self.diagnostic {
            Some(diag) => TerminalRenderer::new(false).render(diag, &self.source_db),
            None => String::new(),
        }
    }
}

/// Runs the full pipeline on netlist text with default options.
pub fn run_pipeline(source: &str) -> PipelineResult {
    run_pipeline_with(source, &SimOptions::default())
}

/// Runs the full pipeline on netlist text.
pub fn run_pipeline_with(source: &str, options: &SimOptions) -> PipelineResult {
    let mut source_db = SourceDb::new();
    let file = source_db.add_source(FIXTURE_NAME, source.to_string());
    let mut result = PipelineResult {
        source_db,
        netlist: None,
        order: Vec::new(),
        traces: None,
        diagnostic: None,
    };

    let netlist = match parse_netlist(source, file) {
        Ok(netlist) => netlist,
        Err(e) => {
            result.diagnostic = Some(e.to_diagnostic());
            return result;
        }
    };
    match resolve_order(&netlist) {
        Ok(order) => {
            result.order = order.names(&netlist).map(str::to_string).collect();
        }
        Err(e) => {
            result.diagnostic = Some(e.to_diagnostic());
            result.netlist = Some(netlist);
            return result;
        }
    }
    match simulate(&netlist, options) {
        Ok(traces) => result.traces = Some(traces),
        Err(e) => result.diagnostic = e.to_diagnostic(),
    }
    result.netlist = Some(netlist);
    result
}

/// Runs the pipeline and renders the default WaveDrom document.
pub fn wavedrom_document(source: &str) -> String {
    let result = run_pipeline(source);
    match WaveDromWriter::default().render(result.traces()) {
        Ok(text) => text,
        Err(e) => panic!("rendering failed: {e}"),
    }
}

/// Builds an `bits`-wide ripple-carry adder netlist with exhaustive stimulus.
///
/// Inputs are `cin`, `a0..`, `b0..`; outputs are `s0..` and the final carry
/// `c<bits>`. Gates are declared from the most significant bit down, the
/// reverse of evaluation order. Event `k` drives the bits of `k` onto
/// `cin, a0.., b0..` (least significant first) at time `k`.
pub fn ripple_adder(bits: usize) -> String {
    let a: Vec<String> = (0..bits).map(|i| format!("a{i}")).collect();
    let b: Vec<String> = (0..bits).map(|i| format!("b{i}")).collect();
    let s: Vec<String> = (0..bits).map(|i| format!("s{i}")).collect();

    let mut text = format!("INPUTS: cin {} {}\n", a.join(" "), b.join(" "));
    text.push_str(&format!("OUTPUTS: {} c{bits}\nGATES:\n", s.join(" ")));
    for i in (0..bits).rev() {
        let carry_in = if i == 0 { "cin".to_string() } else { format!("c{i}") };
        text.push_str(&format!("c{} = OR(g{i}, t{i})\n", i + 1));
        text.push_str(&format!("t{i} = AND(p{i}, {carry_in})\n"));
        text.push_str(&format!("s{i} = XOR(p{i}, {carry_in})\n"));
        text.push_str(&format!("g{i} = AND(a{i}, b{i})\n"));
        text.push_str(&format!("p{i} = XOR(a{i}, b{i})\n"));
    }

    text.push_str("STIMULUS:\n");
    let inputs = 2 * bits + 1;
    for k in 0..(1u64 << inputs) {
        text.push_str(&k.to_string());
        for bit in 0..inputs {
            text.push_str(if (k >> bit) & 1 == 1 { " 1" } else { " 0" });
        }
        text.push('\n');
    }
    text
}
