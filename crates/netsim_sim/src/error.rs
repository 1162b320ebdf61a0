//! Error types for dependency resolution and simulation.
//!
//! [`ResolveError`] covers netlists that parse but cannot be evaluated.
//! [`SimError`] is what the engine and the waveform writers return.

use netsim_common::InternalError;
use netsim_diagnostics::{Diagnostic, DiagnosticCode, Label};
use netsim_source::Span;
use std::io;

/// A parsed netlist whose gates cannot be put in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Gates depend on each other in a loop.
    #[error("cyclic dependency between gates {}", .gates.join(", "))]
    CyclicDependency {
        /// Names of the gates on a cycle, in declaration order.
        gates: Vec<String>,
        /// Definition of each gate in `gates`, index for index.
        spans: Vec<Span>,
    },

    /// A gate operand names neither a primary input nor a gate.
    #[error("gate '{gate}' reads undefined signal '{signal}'")]
    UndefinedSignal {
        /// The gate reading the signal.
        gate: String,
        /// The undefined name.
        signal: String,
        /// Location of the operand.
        span: Span,
    },

    /// A primary output names neither a primary input nor a gate.
    #[error("output '{name}' is not driven by any input or gate")]
    UndefinedOutput {
        /// The undriven output.
        name: String,
        /// Location of the name in the `OUTPUTS:` line.
        span: Span,
    },
}

impl ResolveError {
    /// Location the error points at.
    pub fn span(&self) -> Span {
        match self {
            ResolveError::CyclicDependency { spans, .. } => {
                spans.first().copied().unwrap_or(Span::DUMMY)
            }
            ResolveError::UndefinedSignal { span, .. }
            | ResolveError::UndefinedOutput { span, .. } => *span,
        }
    }

    /// The diagnostic code for this error's class.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            ResolveError::CyclicDependency { .. } => DiagnosticCode::CYCLE,
            ResolveError::UndefinedSignal { .. } | ResolveError::UndefinedOutput { .. } => {
                DiagnosticCode::UNDEFINED_SIGNAL
            }
        }
    }

    /// Converts this error into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = self.span();
        let diag = Diagnostic::error(self.code(), self.to_string(), span);
        match self {
            ResolveError::CyclicDependency { gates, spans } => {
                let mut diag = diag.with_label(Label::primary(span, "part of a cycle"));
                for (gate, &other) in gates.iter().zip(spans).skip(1) {
                    diag = diag.with_label(Label::secondary(
                        other,
                        format!("'{gate}' is part of the cycle"),
                    ));
                }
                diag.with_note(format!("{} gate(s) feed back into themselves", gates.len()))
                    .with_help("combinational netlists must not contain feedback loops")
            }
            ResolveError::UndefinedSignal { signal, .. } => diag
                .with_label(Label::primary(span, "not declared"))
                .with_help(format!(
                    "declare '{signal}' in INPUTS or define it with a gate"
                )),
            ResolveError::UndefinedOutput { .. } => {
                diag.with_label(Label::primary(span, "no input or gate has this name"))
            }
        }
    }
}

/// Errors returned by the simulator and the waveform writers.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The netlist could not be ordered for evaluation.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// An internal invariant was violated during evaluation.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Writing the waveform document failed.
    #[error("waveform I/O error: {0}")]
    WaveformIo(#[from] io::Error),

    /// Serializing the WaveDrom document failed.
    #[error("waveform serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Converts this error into a diagnostic, when it refers to the netlist
    /// or to an internal failure. I/O failures have no source location and
    /// are reported as plain messages.
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match self {
            SimError::Resolve(e) => Some(e.to_diagnostic()),
            SimError::Internal(e) => Some(
                Diagnostic::error(DiagnosticCode::INTERNAL, e.to_string(), Span::DUMMY)
                    .with_note("this is a bug in netsim, not a problem with the netlist"),
            ),
            SimError::WaveformIo(_) | SimError::Json(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsim_diagnostics::LabelStyle;

    #[test]
    fn cycle_display_lists_gates() {
        let e = ResolveError::CyclicDependency {
            gates: vec!["A".into(), "B".into()],
            spans: vec![Span::DUMMY, Span::DUMMY],
        };
        assert_eq!(e.to_string(), "cyclic dependency between gates A, B");
        assert_eq!(e.code().to_string(), "E201");
    }

    #[test]
    fn cycle_diagnostic_locates_every_gate() {
        let file = netsim_source::FileId::from_raw(0);
        let spans = vec![Span::new(file, 0, 13), Span::new(file, 14, 27), Span::new(file, 28, 41)];
        let e = ResolveError::CyclicDependency {
            gates: vec!["p".into(), "q".into(), "r".into()],
            spans: spans.clone(),
        };
        assert_eq!(e.span(), spans[0]);
        let diag = e.to_diagnostic();
        let styles: Vec<LabelStyle> = diag.labels.iter().map(|l| l.style).collect();
        assert_eq!(
            styles,
            vec![LabelStyle::Primary, LabelStyle::Secondary, LabelStyle::Secondary]
        );
        assert_eq!(diag.labels[1].span, spans[1]);
        assert_eq!(diag.labels[1].message, "'q' is part of the cycle");
        assert_eq!(diag.labels[2].message, "'r' is part of the cycle");
    }

    #[test]
    fn single_gate_cycle_has_no_secondary_labels() {
        let e = ResolveError::CyclicDependency {
            gates: vec!["z".into()],
            spans: vec![Span::DUMMY],
        };
        assert_eq!(e.to_diagnostic().labels.len(), 1);
    }

    #[test]
    fn undefined_signal_display() {
        let e = ResolveError::UndefinedSignal {
            gate: "y".into(),
            signal: "q".into(),
            span: Span::DUMMY,
        };
        assert_eq!(e.to_string(), "gate 'y' reads undefined signal 'q'");
        assert_eq!(e.code(), DiagnosticCode::UNDEFINED_SIGNAL);
        assert_eq!(e.to_diagnostic().help.len(), 1);
    }

    #[test]
    fn undefined_output_shares_code() {
        let e = ResolveError::UndefinedOutput {
            name: "z".into(),
            span: Span::DUMMY,
        };
        assert_eq!(e.code().to_string(), "E202");
    }

    #[test]
    fn resolve_error_is_transparent() {
        let e: SimError = ResolveError::UndefinedOutput {
            name: "z".into(),
            span: Span::DUMMY,
        }
        .into();
        assert_eq!(e.to_string(), "output 'z' is not driven by any input or gate");
        assert!(e.to_diagnostic().is_some());
    }

    #[test]
    fn internal_error_diagnostic() {
        let e = SimError::from(InternalError::new("slot 9 out of range"));
        let diag = e.to_diagnostic().unwrap();
        assert_eq!(diag.code, DiagnosticCode::INTERNAL);
        assert_eq!(diag.message, "internal simulator error: slot 9 out of range");
    }

    #[test]
    fn io_error_has_no_diagnostic() {
        let e = SimError::WaveformIo(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(e.to_string().contains("waveform I/O error"));
        assert!(e.to_diagnostic().is_none());
    }
}
