//! Line-oriented parser for netlist documents.
//!
//! Blank lines and lines starting with `#` are dropped before section
//! detection. The remaining lines must form the sections `INPUTS:`,
//! `OUTPUTS:`, `GATES:` and `STIMULUS:` in that order. The first problem
//! found aborts the parse.

use crate::arena::Arena;
use crate::error::{ParseError, Section};
use crate::gate::{Gate, GateKind, Operand};
use crate::ids::GateId;
use crate::netlist::{Netlist, Port, StimulusEvent};
use log::debug;
use netsim_common::validate_identifier;
use netsim_source::{FileId, Span};
use std::collections::HashMap;

/// Parses and validates a netlist document.
///
/// `file` is used only to build the [`Span`]s carried by the netlist and by
/// any returned error.
pub fn parse_netlist(source: &str, file: FileId) -> Result<Netlist, ParseError> {
    let eof = source.len() as u32;
    let mut parser = Parser {
        lines: significant_lines(source, file),
        pos: 0,
        eof_line: source.matches('\n').count() + 1,
        eof_span: Span::new(file, eof, eof),
        declared: HashMap::new(),
    };
    parser.parse()
}

/// A non-blank, non-comment line, trimmed.
#[derive(Clone, Copy)]
struct SourceLine<'a> {
    number: usize,
    text: &'a str,
    span: Span,
}

impl<'a> SourceLine<'a> {
    /// Span of `token`, which must be a subslice of `self.text`.
    fn token_span(&self, token: &str) -> Span {
        let rel = token.as_ptr() as usize - self.text.as_ptr() as usize;
        self.span.subspan(rel, rel + token.len())
    }

    fn invalid_gate(&self) -> ParseError {
        ParseError::InvalidGate {
            line: self.number,
            text: self.text.to_string(),
            span: self.span,
        }
    }

    fn identifier(&self, token: &'a str) -> Result<&'a str, ParseError> {
        validate_identifier(token).map_err(|reason| ParseError::InvalidIdentifier {
            line: self.number,
            name: token.to_string(),
            reason,
            span: self.token_span(token),
        })?;
        Ok(token)
    }
}

fn significant_lines(source: &str, file: FileId) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0usize;
    for (idx, raw) in source.split_inclusive('\n').enumerate() {
        let text = raw.trim();
        if !text.is_empty() && !text.starts_with('#') {
            let start = offset + (raw.len() - raw.trim_start().len());
            lines.push(SourceLine {
                number: idx + 1,
                text,
                span: Span::new(file, start as u32, (start + text.len()) as u32),
            });
        }
        offset += raw.len();
    }
    lines
}

struct Parser<'a> {
    lines: Vec<SourceLine<'a>>,
    pos: usize,
    eof_line: usize,
    eof_span: Span,
    /// Input and gate names mapped to the line that declared them.
    declared: HashMap<&'a str, usize>,
}

impl<'a> Parser<'a> {
    fn parse(&mut self) -> Result<Netlist, ParseError> {
        let inputs = self.parse_inputs()?;
        let outputs = self.parse_outputs()?;
        let gates = self.parse_gates()?;
        let stimulus = self.parse_stimulus(inputs.len())?;

        debug!(
            "parsed netlist: {} input(s), {} output(s), {} gate(s), {} stimulus event(s)",
            inputs.len(),
            outputs.len(),
            gates.len(),
            stimulus.len()
        );
        Ok(Netlist::new(inputs, outputs, gates, stimulus))
    }

    fn peek(&self) -> Option<SourceLine<'a>> {
        self.lines.get(self.pos).copied()
    }

    /// Consumes the header line of `section`, returning it and the text after the colon.
    fn expect_header(&mut self, section: Section) -> Result<(SourceLine<'a>, &'a str), ParseError> {
        let Some(line) = self.peek() else {
            return Err(ParseError::MissingSection {
                section,
                line: self.eof_line,
                span: self.eof_span,
            });
        };
        match Section::from_header_line(line.text) {
            Some(found) if found == section => {
                self.pos += 1;
                Ok((line, &line.text[section.header().len()..]))
            }
            Some(found) if found < section => Err(ParseError::SectionOutOfOrder {
                section: found,
                line: line.number,
                span: line.span,
            }),
            _ => Err(ParseError::MissingSection {
                section,
                line: line.number,
                span: line.span,
            }),
        }
    }

    /// Consumes a header that must stand alone on its line.
    fn expect_bare_header(&mut self, section: Section) -> Result<SourceLine<'a>, ParseError> {
        let (line, rest) = self.expect_header(section)?;
        let rest = rest.trim();
        if !rest.is_empty() {
            return Err(ParseError::InvalidHeader {
                section,
                line: line.number,
                text: rest.to_string(),
                span: line.token_span(rest),
            });
        }
        Ok(line)
    }

    /// Parses the identifier list of an `INPUTS:` or `OUTPUTS:` header line.
    fn parse_port_list(
        &mut self,
        section: Section,
    ) -> Result<(SourceLine<'a>, Vec<(&'a str, Span)>), ParseError> {
        let (line, rest) = self.expect_header(section)?;
        let mut names = Vec::new();
        for token in rest.split_whitespace() {
            names.push((line.identifier(token)?, line.token_span(token)));
        }
        if names.is_empty() {
            return Err(ParseError::EmptySection {
                section,
                line: line.number,
                span: line.span,
            });
        }
        Ok((line, names))
    }

    fn parse_inputs(&mut self) -> Result<Vec<Port>, ParseError> {
        let (line, names) = self.parse_port_list(Section::Inputs)?;
        let mut ports = Vec::with_capacity(names.len());
        for (name, span) in names {
            if let Some(&first_line) = self.declared.get(name) {
                return Err(ParseError::DuplicateName {
                    line: line.number,
                    name: name.to_string(),
                    first_line,
                    span,
                });
            }
            self.declared.insert(name, line.number);
            ports.push(Port {
                name: name.to_string(),
                span,
            });
        }
        Ok(ports)
    }

    fn parse_outputs(&mut self) -> Result<Vec<Port>, ParseError> {
        let (line, names) = self.parse_port_list(Section::Outputs)?;
        let mut ports: Vec<Port> = Vec::with_capacity(names.len());
        for (name, span) in names {
            if ports.iter().any(|p| p.name == name) {
                return Err(ParseError::DuplicateName {
                    line: line.number,
                    name: name.to_string(),
                    first_line: line.number,
                    span,
                });
            }
            ports.push(Port {
                name: name.to_string(),
                span,
            });
        }
        Ok(ports)
    }

    fn parse_gates(&mut self) -> Result<Arena<GateId, Gate>, ParseError> {
        let header = self.expect_bare_header(Section::Gates)?;
        let mut gates = Arena::new();

        while let Some(line) = self.peek() {
            match Section::from_header_line(line.text) {
                Some(Section::Stimulus) => break,
                Some(section) => {
                    return Err(ParseError::SectionOutOfOrder {
                        section,
                        line: line.number,
                        span: line.span,
                    })
                }
                None => {}
            }

            let (name, gate) = parse_gate(&line)?;
            if let Some(&first_line) = self.declared.get(name) {
                return Err(ParseError::DuplicateName {
                    line: line.number,
                    name: name.to_string(),
                    first_line,
                    span: line.token_span(name),
                });
            }
            self.declared.insert(name, line.number);
            gates.alloc(gate);
            self.pos += 1;
        }

        if gates.is_empty() {
            return Err(ParseError::EmptySection {
                section: Section::Gates,
                line: header.number,
                span: header.span,
            });
        }
        Ok(gates)
    }

    fn parse_stimulus(&mut self, input_count: usize) -> Result<Vec<StimulusEvent>, ParseError> {
        self.expect_bare_header(Section::Stimulus)?;
        let mut events: Vec<StimulusEvent> = Vec::new();

        while let Some(line) = self.peek() {
            if let Some(section) = Section::from_header_line(line.text) {
                return Err(ParseError::SectionOutOfOrder {
                    section,
                    line: line.number,
                    span: line.span,
                });
            }

            let tokens: Vec<&str> = line.text.split_whitespace().collect();
            if tokens.len() != input_count + 1 {
                return Err(ParseError::StimulusLength {
                    line: line.number,
                    expected: input_count,
                    found: tokens.len().saturating_sub(1),
                    text: line.text.to_string(),
                    span: line.span,
                });
            }

            let time_token = tokens[0];
            let time = time_token
                .parse::<u64>()
                .map_err(|_| ParseError::InvalidTime {
                    line: line.number,
                    token: time_token.to_string(),
                    span: line.token_span(time_token),
                })?;
            if let Some(previous) = events.last().map(|e| e.time) {
                if time <= previous {
                    return Err(ParseError::NonIncreasingTime {
                        line: line.number,
                        time,
                        previous,
                        span: line.token_span(time_token),
                    });
                }
            }

            let values = tokens[1..]
                .iter()
                .map(|&token| match token {
                    "0" => Ok(false),
                    "1" => Ok(true),
                    _ => Err(ParseError::NonBinaryValue {
                        line: line.number,
                        token: token.to_string(),
                        span: line.token_span(token),
                    }),
                })
                .collect::<Result<Vec<bool>, ParseError>>()?;

            events.push(StimulusEvent { time, values });
            self.pos += 1;
        }
        Ok(events)
    }
}

/// Parses one `<name> = <KIND>(<args>)` line, returning the output name as
/// a slice of the source alongside the gate.
fn parse_gate<'a>(line: &SourceLine<'a>) -> Result<(&'a str, Gate), ParseError> {
    let (lhs, rhs) = line.text.split_once('=').ok_or_else(|| line.invalid_gate())?;
    let name = lhs.trim();
    if name.is_empty() {
        return Err(line.invalid_gate());
    }
    let name = line.identifier(name)?;

    let call = rhs.trim();
    let open = call.find('(').ok_or_else(|| line.invalid_gate())?;
    let kind_text = call[..open].trim();
    if kind_text.is_empty() {
        return Err(line.invalid_gate());
    }
    let kind: GateKind = kind_text
        .parse()
        .map_err(|_| ParseError::UnknownGateKind {
            line: line.number,
            kind: kind_text.to_string(),
            span: line.token_span(kind_text),
        })?;

    let inner = call[open + 1..]
        .strip_suffix(')')
        .ok_or_else(|| line.invalid_gate())?;
    if inner.contains(['(', ')']) {
        return Err(line.invalid_gate());
    }

    let mut operands = Vec::new();
    if !inner.trim().is_empty() {
        for arg in inner.split(',') {
            let arg = arg.trim();
            if arg.is_empty() {
                return Err(line.invalid_gate());
            }
            operands.push(Operand {
                name: line.identifier(arg)?.to_string(),
                span: line.token_span(arg),
            });
        }
    }

    if operands.len() != kind.arity() {
        return Err(ParseError::Arity {
            line: line.number,
            gate: name.to_string(),
            kind,
            expected: kind.arity(),
            found: operands.len(),
            span: line.span,
        });
    }

    let gate = Gate {
        name: name.to_string(),
        kind,
        operands,
        span: line.span,
    };
    Ok((name, gate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlist::SignalKind;

    const AND2: &str = "\
INPUTS: A B
OUTPUTS: C
GATES:
C = AND(A, B)
STIMULUS:
0 0 0
1 1 0
2 1 1
";

    fn parse(src: &str) -> Result<Netlist, ParseError> {
        parse_netlist(src, FileId::from_raw(0))
    }

    fn names(ports: &[Port]) -> Vec<&str> {
        ports.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn parse_and_gate_netlist() {
        let netlist = parse(AND2).unwrap();
        assert_eq!(names(netlist.inputs()), vec!["A", "B"]);
        assert_eq!(names(netlist.outputs()), vec!["C"]);
        assert_eq!(netlist.gates().len(), 1);

        let gate = netlist.gate(GateId::from_raw(0));
        assert_eq!(gate.name, "C");
        assert_eq!(gate.kind, GateKind::And);
        assert_eq!(gate.operand_names().collect::<Vec<_>>(), vec!["A", "B"]);

        let times: Vec<u64> = netlist.stimulus().iter().map(|e| e.time).collect();
        assert_eq!(times, vec![0, 1, 2]);
        assert_eq!(netlist.stimulus()[1].values, vec![true, false]);
    }

    #[test]
    fn gate_spans_point_into_source() {
        let netlist = parse(AND2).unwrap();
        let gate = netlist.gate(GateId::from_raw(0));
        assert_eq!((gate.span.start, gate.span.end), (30, 43));
        assert_eq!((gate.operands[0].span.start, gate.operands[0].span.end), (38, 39));
        assert_eq!((gate.operands[1].span.start, gate.operands[1].span.end), (41, 42));
    }

    #[test]
    fn name_lookup() {
        let netlist = parse(AND2).unwrap();
        assert_eq!(netlist.signal_kind("B"), Some(SignalKind::PrimaryInput(1)));
        assert_eq!(
            netlist.signal_kind("C"),
            Some(SignalKind::Gate(GateId::from_raw(0)))
        );
        assert_eq!(netlist.gate_by_name("C"), Some(GateId::from_raw(0)));
        assert_eq!(netlist.gate_by_name("A"), None);
        assert_eq!(netlist.signal_kind("nope"), None);
        let tracked: Vec<&str> = netlist.tracked_signals().map(|p| p.name.as_str()).collect();
        assert_eq!(tracked, vec!["A", "B", "C"]);
    }

    #[test]
    fn comments_blank_lines_and_indentation_are_ignored() {
        let src = "\
# half adder

   INPUTS: a b
OUTPUTS: s c
# the gates
GATES:
  s = XOR(a,b)
c = AND( a , b )

STIMULUS:
   0 1 1
";
        let netlist = parse(src).unwrap();
        assert_eq!(netlist.gates().len(), 2);
        assert_eq!(netlist.gate(GateId::from_raw(1)).operands[1].name, "b");
        assert_eq!(netlist.stimulus().len(), 1);
    }

    #[test]
    fn gate_kinds_and_spacing() {
        let src = "INPUTS: a b\nOUTPUTS: w\nGATES:\nx = OR(a, b)\ny = XOR (x, b)\nz = NOT(y)\nw = AND(z,z)\nSTIMULUS:\n";
        let netlist = parse(src).unwrap();
        let kinds: Vec<GateKind> = netlist.gates().values().map(|g| g.kind).collect();
        assert_eq!(
            kinds,
            vec![GateKind::Or, GateKind::Xor, GateKind::Not, GateKind::And]
        );
    }

    #[test]
    fn empty_stimulus_section_is_valid() {
        let netlist = parse("INPUTS: a\nOUTPUTS: y\nGATES:\ny = NOT(a)\nSTIMULUS:\n").unwrap();
        assert!(netlist.stimulus().is_empty());
    }

    #[test]
    fn gate_may_reference_later_gate() {
        let src = "INPUTS: a b\nOUTPUTS: z\nGATES:\nz = NOT(t)\nt = AND(a, b)\nSTIMULUS:\n";
        assert!(parse(src).is_ok());
    }

    // ---- Structural errors ----

    #[test]
    fn empty_document_is_missing_inputs() {
        let err = parse("").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingSection {
                section: Section::Inputs,
                line: 1,
                ..
            }
        ));
    }

    #[test]
    fn missing_outputs_section() {
        let err = parse("INPUTS: a\nGATES:\ny = NOT(a)\nSTIMULUS:\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingSection {
                section: Section::Outputs,
                line: 2,
                ..
            }
        ));
    }

    #[test]
    fn missing_stimulus_header_is_structural() {
        let err = parse("INPUTS: a\nOUTPUTS: y\nGATES:\ny = NOT(a)\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingSection {
                section: Section::Stimulus,
                line: 5,
                ..
            }
        ));
        assert_eq!(err.code().to_string(), "E101");
    }

    #[test]
    fn sections_out_of_order() {
        let err = parse("OUTPUTS: y\nINPUTS: a\nGATES:\ny = NOT(a)\nSTIMULUS:\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingSection {
                section: Section::Inputs,
                ..
            }
        ));

        let err = parse("INPUTS: a\nOUTPUTS: y\nGATES:\ny = NOT(a)\nINPUTS: b\nSTIMULUS:\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::SectionOutOfOrder {
                section: Section::Inputs,
                line: 5,
                ..
            }
        ));
    }

    #[test]
    fn header_inside_stimulus_is_out_of_order() {
        let err = parse("INPUTS: a\nOUTPUTS: y\nGATES:\ny = NOT(a)\nSTIMULUS:\n0 1\nGATES:\n")
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::SectionOutOfOrder {
                section: Section::Gates,
                line: 7,
                ..
            }
        ));
    }

    #[test]
    fn empty_inputs_and_outputs() {
        let err = parse("INPUTS:\nOUTPUTS: y\nGATES:\ny = NOT(a)\nSTIMULUS:\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::EmptySection {
                section: Section::Inputs,
                ..
            }
        ));

        let err = parse("INPUTS: a\nOUTPUTS:   \nGATES:\ny = NOT(a)\nSTIMULUS:\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::EmptySection {
                section: Section::Outputs,
                ..
            }
        ));
    }

    #[test]
    fn empty_gates_section() {
        let err = parse("INPUTS: a\nOUTPUTS: a\nGATES:\nSTIMULUS:\n0 1\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::EmptySection {
                section: Section::Gates,
                line: 3,
                ..
            }
        ));
    }

    #[test]
    fn text_after_gates_header() {
        let err = parse("INPUTS: a\nOUTPUTS: y\nGATES: y = NOT(a)\nSTIMULUS:\n").unwrap_err();
        match err {
            ParseError::InvalidHeader { section, text, .. } => {
                assert_eq!(section, Section::Gates);
                assert_eq!(text, "y = NOT(a)");
            }
            other => panic!("expected InvalidHeader, got {other:?}"),
        }
    }

    // ---- Grammar errors ----

    fn gate_error(gate_line: &str) -> ParseError {
        let src = format!("INPUTS: a b\nOUTPUTS: y\nGATES:\n{gate_line}\nSTIMULUS:\n");
        parse(&src).unwrap_err()
    }

    #[test]
    fn malformed_gate_lines() {
        for line in [
            "y AND(a, b)",
            "= AND(a, b)",
            "y = AND a, b",
            "y = AND(a, b",
            "y = AND(a, b) extra",
            "y = (a, b)",
            "y = AND((a), b)",
            "y = AND(a,)",
            "y = AND(,b)",
        ] {
            let err = gate_error(line);
            assert!(
                matches!(err, ParseError::InvalidGate { line: 4, .. }),
                "{line}: {err:?}"
            );
            assert_eq!(err.code().to_string(), "E102");
        }
    }

    #[test]
    fn unknown_gate_kind() {
        let err = gate_error("y = NAND(a, b)");
        match err {
            ParseError::UnknownGateKind { kind, span, .. } => {
                assert_eq!(kind, "NAND");
                assert_eq!(span.len(), 4);
            }
            other => panic!("expected UnknownGateKind, got {other:?}"),
        }
        assert!(matches!(
            gate_error("y = and(a, b)"),
            ParseError::UnknownGateKind { .. }
        ));
    }

    #[test]
    fn invalid_identifiers() {
        assert!(matches!(
            gate_error("1y = NOT(a)"),
            ParseError::InvalidIdentifier { .. }
        ));
        assert!(matches!(
            gate_error("y = AND(a, 2b)"),
            ParseError::InvalidIdentifier { .. }
        ));
        let err = parse("INPUTS: a b-c\nOUTPUTS: y\nGATES:\ny = NOT(a)\nSTIMULUS:\n").unwrap_err();
        match err {
            ParseError::InvalidIdentifier { name, line, .. } => {
                assert_eq!(name, "b-c");
                assert_eq!(line, 1);
            }
            other => panic!("expected InvalidIdentifier, got {other:?}"),
        }
    }

    // ---- Arity and duplicate names ----

    #[test]
    fn arity_errors() {
        match gate_error("y = NOT(a, b)") {
            ParseError::Arity {
                kind,
                expected,
                found,
                ..
            } => {
                assert_eq!(kind, GateKind::Not);
                assert_eq!(expected, 1);
                assert_eq!(found, 2);
            }
            other => panic!("expected Arity, got {other:?}"),
        }
        assert!(matches!(
            gate_error("y = AND(a)"),
            ParseError::Arity { found: 1, .. }
        ));
        assert!(matches!(
            gate_error("y = XOR(a, b, a)"),
            ParseError::Arity { found: 3, .. }
        ));
        assert!(matches!(
            gate_error("y = NOT()"),
            ParseError::Arity { found: 0, .. }
        ));
    }

    #[test]
    fn gate_name_collides_with_input() {
        let err = gate_error("a = NOT(b)");
        match err {
            ParseError::DuplicateName {
                name,
                line,
                first_line,
                ..
            } => {
                assert_eq!(name, "a");
                assert_eq!(line, 4);
                assert_eq!(first_line, 1);
            }
            other => panic!("expected DuplicateName, got {other:?}"),
        }
    }

    #[test]
    fn gate_defined_twice() {
        let src = "INPUTS: a\nOUTPUTS: y\nGATES:\ny = NOT(a)\ny = NOT(a)\nSTIMULUS:\n";
        let err = parse(src).unwrap_err();
        assert!(matches!(
            err,
            ParseError::DuplicateName {
                line: 5,
                first_line: 4,
                ..
            }
        ));
        assert_eq!(err.code().to_string(), "E104");
    }

    #[test]
    fn duplicate_inputs_and_outputs() {
        let err = parse("INPUTS: a a\nOUTPUTS: y\nGATES:\ny = NOT(a)\nSTIMULUS:\n").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateName { .. }));
        let err = parse("INPUTS: a\nOUTPUTS: y y\nGATES:\ny = NOT(a)\nSTIMULUS:\n").unwrap_err();
        assert!(matches!(err, ParseError::DuplicateName { .. }));
    }

    #[test]
    fn grammar_checked_before_arity_and_duplicates() {
        assert!(matches!(
            gate_error("a = NOT(b, 9x)"),
            ParseError::InvalidIdentifier { .. }
        ));
        assert!(matches!(
            gate_error("a = NOT(a, b)"),
            ParseError::Arity { .. }
        ));
    }

    // ---- Stimulus errors ----

    fn stimulus_error(lines: &str) -> ParseError {
        let src = format!("INPUTS: a b\nOUTPUTS: y\nGATES:\ny = AND(a, b)\nSTIMULUS:\n{lines}");
        parse(&src).unwrap_err()
    }

    #[test]
    fn wrong_value_count() {
        match stimulus_error("0 1\n") {
            ParseError::StimulusLength {
                expected, found, line, ..
            } => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
                assert_eq!(line, 6);
            }
            other => panic!("expected StimulusLength, got {other:?}"),
        }
        assert!(matches!(
            stimulus_error("0 1 1 0\n"),
            ParseError::StimulusLength { found: 3, .. }
        ));
    }

    #[test]
    fn times_must_strictly_increase() {
        match stimulus_error("0 0 0\n5 1 1\n5 0 1\n") {
            ParseError::NonIncreasingTime {
                time, previous, line, ..
            } => {
                assert_eq!(time, 5);
                assert_eq!(previous, 5);
                assert_eq!(line, 8);
            }
            other => panic!("expected NonIncreasingTime, got {other:?}"),
        }
        assert!(matches!(
            stimulus_error("3 0 0\n1 1 1\n"),
            ParseError::NonIncreasingTime { .. }
        ));
    }

    #[test]
    fn gaps_in_time_are_allowed() {
        let src = "INPUTS: a\nOUTPUTS: y\nGATES:\ny = NOT(a)\nSTIMULUS:\n10 0\n25 1\n1000 0\n";
        let netlist = parse(src).unwrap();
        let times: Vec<u64> = netlist.stimulus().iter().map(|e| e.time).collect();
        assert_eq!(times, vec![10, 25, 1000]);
    }

    #[test]
    fn non_binary_values() {
        for bad in ["0 1 2\n", "0 x 1\n", "0 1 01\n"] {
            let err = stimulus_error(bad);
            assert!(matches!(err, ParseError::NonBinaryValue { .. }), "{bad}");
            assert_eq!(err.code().to_string(), "E105");
        }
    }

    #[test]
    fn invalid_time_tokens() {
        for bad in ["t0 1 1\n", "-1 1 1\n", "1.5 0 0\n"] {
            let err = stimulus_error(bad);
            assert!(matches!(err, ParseError::InvalidTime { .. }), "{bad}");
            assert_eq!(err.code().to_string(), "E102");
        }
    }
}
