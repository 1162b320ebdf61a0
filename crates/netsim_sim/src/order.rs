//! Gate evaluation order.
//!
//! A gate may run once every gate whose output it reads has run. Primary
//! inputs are bound before any gate, so they never contribute an edge.
//! [`resolve_order`] applies Kahn's algorithm with a min-heap frontier: of
//! all gates whose dependencies are satisfied, the earliest declared is
//! emitted first, so the order is a pure function of the netlist text.

use crate::error::ResolveError;
use log::{debug, warn};
use netsim_netlist::{GateId, Netlist, SignalKind};
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// A topological order over a netlist's gates.
///
/// Every gate appears after all gates it reads. Computed once per netlist
/// and shared by every stimulus event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOrder {
    gates: Vec<GateId>,
    /// Position of each gate in `gates`, indexed by `GateId::index()`.
    positions: Vec<usize>,
}

impl EvalOrder {
    fn new(gates: Vec<GateId>) -> Self {
        let mut positions = vec![0; gates.len()];
        for (pos, id) in gates.iter().enumerate() {
            positions[id.index()] = pos;
        }
        Self { gates, positions }
    }

    /// Gate IDs in evaluation order.
    pub fn gates(&self) -> &[GateId] {
        &self.gates
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the order is empty.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Where `id` is evaluated, or `None` if it belongs to another netlist.
    pub fn position(&self, id: GateId) -> Option<usize> {
        self.positions.get(id.index()).copied()
    }

    /// Gate names in evaluation order.
    pub fn names<'n>(&'n self, netlist: &'n Netlist) -> impl Iterator<Item = &'n str> + 'n {
        self.gates
            .iter()
            .map(move |&id| netlist.gate(id).name.as_str())
    }
}

/// Computes the evaluation order for `netlist`.
///
/// Fails if a gate operand or a primary output names no signal, or if the
/// gates form a cycle. A cycle error lists only the gates on a cycle, not
/// the gates merely downstream of one.
pub fn resolve_order(netlist: &Netlist) -> Result<EvalOrder, ResolveError> {
    check_references(netlist)?;

    let count = netlist.gates().len();
    let mut dependents: Vec<Vec<GateId>> = vec![Vec::new(); count];
    let mut pending = vec![0usize; count];
    for (id, gate) in netlist.gates().iter() {
        for operand in &gate.operands {
            if let Some(SignalKind::Gate(source)) = netlist.signal_kind(&operand.name) {
                dependents[source.index()].push(id);
                pending[id.index()] += 1;
            }
        }
    }

    let mut ready: BinaryHeap<Reverse<GateId>> = netlist
        .gates()
        .ids()
        .filter(|id| pending[id.index()] == 0)
        .map(Reverse)
        .collect();
    let mut order = Vec::with_capacity(count);
    while let Some(Reverse(id)) = ready.pop() {
        order.push(id);
        for &dependent in &dependents[id.index()] {
            pending[dependent.index()] -= 1;
            if pending[dependent.index()] == 0 {
                ready.push(Reverse(dependent));
            }
        }
    }

    if order.len() < count {
        return Err(cycle_error(netlist, &pending));
    }

    for id in unobserved_gates(netlist) {
        warn!("gate '{}' does not feed any output", netlist.gate(id).name);
    }
    let order = EvalOrder::new(order);
    debug!(
        "resolved evaluation order: {}",
        order.names(netlist).collect::<Vec<_>>().join(" ")
    );
    Ok(order)
}

fn check_references(netlist: &Netlist) -> Result<(), ResolveError> {
    for gate in netlist.gates().values() {
        for operand in &gate.operands {
            if netlist.signal_kind(&operand.name).is_none() {
                return Err(ResolveError::UndefinedSignal {
                    gate: gate.name.clone(),
                    signal: operand.name.clone(),
                    span: operand.span,
                });
            }
        }
    }
    for output in netlist.outputs() {
        match netlist.signal_kind(&output.name) {
            None => {
                return Err(ResolveError::UndefinedOutput {
                    name: output.name.clone(),
                    span: output.span,
                })
            }
            Some(SignalKind::PrimaryInput(_)) => {
                warn!("output '{}' is a primary input and is traced unchanged", output.name)
            }
            Some(SignalKind::Gate(_)) => {}
        }
    }
    Ok(())
}

/// Builds the cycle error from the gates Kahn's algorithm could not emit.
///
/// Those gates are either on a cycle or downstream of one. Strongly
/// connected components of the residual graph separate the two: a gate is
/// on a cycle iff its component has more than one member or it reads itself.
fn cycle_error(netlist: &Netlist, pending: &[usize]) -> ResolveError {
    let mut graph: DiGraph<GateId, ()> = DiGraph::new();
    let mut nodes: HashMap<GateId, NodeIndex> = HashMap::new();
    for id in netlist.gates().ids().filter(|id| pending[id.index()] > 0) {
        nodes.insert(id, graph.add_node(id));
    }
    for (&id, &node) in &nodes {
        for operand in &netlist.gate(id).operands {
            if let Some(SignalKind::Gate(source)) = netlist.signal_kind(&operand.name) {
                if let Some(&source_node) = nodes.get(&source) {
                    graph.add_edge(source_node, node, ());
                }
            }
        }
    }

    let mut on_cycle: Vec<GateId> = tarjan_scc(&graph)
        .into_iter()
        .filter(|component| {
            component.len() > 1 || graph.contains_edge(component[0], component[0])
        })
        .flatten()
        .map(|node| graph[node])
        .collect();
    if on_cycle.is_empty() {
        on_cycle = nodes.keys().copied().collect();
    }
    on_cycle.sort();

    let (gates, spans) = on_cycle
        .iter()
        .map(|&id| {
            let gate = netlist.gate(id);
            (gate.name.clone(), gate.span)
        })
        .unzip();
    ResolveError::CyclicDependency { gates, spans }
}

/// Gates no primary output depends on, directly or through other gates.
fn unobserved_gates(netlist: &Netlist) -> Vec<GateId> {
    let mut observed = vec![false; netlist.gates().len()];
    let mut stack: Vec<GateId> = netlist
        .outputs()
        .iter()
        .filter_map(|output| netlist.gate_by_name(&output.name))
        .collect();
    while let Some(id) = stack.pop() {
        if std::mem::replace(&mut observed[id.index()], true) {
            continue;
        }
        for operand in &netlist.gate(id).operands {
            if let Some(source) = netlist.gate_by_name(&operand.name) {
                stack.push(source);
            }
        }
    }
    netlist
        .gates()
        .ids()
        .filter(|id| !observed[id.index()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsim_netlist::parse_netlist;
    use netsim_source::FileId;

    fn netlist(gates: &str) -> Netlist {
        let src = format!("INPUTS: a b\nOUTPUTS: z\nGATES:\n{gates}STIMULUS:\n");
        parse_netlist(&src, FileId::from_raw(0)).unwrap()
    }

    fn order_names(netlist: &Netlist) -> Vec<String> {
        let order = resolve_order(netlist).unwrap();
        order.names(netlist).map(str::to_string).collect()
    }

    #[test]
    fn independent_gates_keep_declaration_order() {
        let n = netlist("x = AND(a, b)\ny = OR(a, b)\nz = XOR(x, y)\n");
        assert_eq!(order_names(&n), vec!["x", "y", "z"]);
    }

    #[test]
    fn forward_reference_is_reordered() {
        let n = netlist("z = NOT(t)\nt = AND(a, b)\n");
        assert_eq!(order_names(&n), vec!["t", "z"]);
    }

    #[test]
    fn ties_break_by_declaration_order() {
        // d and c both become ready once p runs; d was declared first.
        let n = netlist("z = AND(c, d)\nd = NOT(p)\nc = NOT(p)\np = AND(a, b)\n");
        assert_eq!(order_names(&n), vec!["p", "d", "c", "z"]);
    }

    #[test]
    fn order_is_topological() {
        let n = netlist(
            "z = OR(m, n)\nm = AND(k, a)\nn = XOR(k, m)\nk = NOT(b)\nw = AND(z, n)\n",
        );
        let order = resolve_order(&n).unwrap();
        assert_eq!(order.len(), 5);
        for (id, gate) in n.gates().iter() {
            let pos = order.position(id).unwrap();
            for operand in &gate.operands {
                if let Some(dep) = n.gate_by_name(&operand.name) {
                    assert!(order.position(dep).unwrap() < pos, "{} before {}", operand.name, gate.name);
                }
            }
        }
    }

    #[test]
    fn repeated_operand() {
        let n = netlist("t = NOT(a)\nz = AND(t, t)\n");
        assert_eq!(order_names(&n), vec!["t", "z"]);
    }

    #[test]
    fn position_lookup() {
        let n = netlist("z = NOT(t)\nt = AND(a, b)\n");
        let order = resolve_order(&n).unwrap();
        assert_eq!(order.gates(), &[GateId::from_raw(1), GateId::from_raw(0)]);
        assert_eq!(order.position(GateId::from_raw(0)), Some(1));
        assert_eq!(order.position(GateId::from_raw(7)), None);
    }

    #[test]
    fn two_gate_cycle() {
        let n = netlist("A = AND(B, a)\nB = AND(A, b)\nz = NOT(A)\n");
        match resolve_order(&n).unwrap_err() {
            ResolveError::CyclicDependency { gates, spans } => {
                assert_eq!(gates, vec!["A", "B"]);
                assert_eq!(
                    spans,
                    vec![n.gate(GateId::from_raw(0)).span, n.gate(GateId::from_raw(1)).span]
                );
            }
            other => panic!("expected CyclicDependency, got {other:?}"),
        }
    }

    #[test]
    fn cycle_excludes_downstream_gates() {
        let n = netlist("z = NOT(q)\nq = OR(r, a)\nr = AND(q, b)\n");
        match resolve_order(&n).unwrap_err() {
            ResolveError::CyclicDependency { gates, .. } => assert_eq!(gates, vec!["q", "r"]),
            other => panic!("expected CyclicDependency, got {other:?}"),
        }
    }

    #[test]
    fn self_loop() {
        let n = netlist("z = AND(z, a)\n");
        match resolve_order(&n).unwrap_err() {
            ResolveError::CyclicDependency { gates, .. } => assert_eq!(gates, vec!["z"]),
            other => panic!("expected CyclicDependency, got {other:?}"),
        }
    }

    #[test]
    fn undefined_operand() {
        let n = netlist("z = AND(a, q)\n");
        match resolve_order(&n).unwrap_err() {
            ResolveError::UndefinedSignal { gate, signal, span } => {
                assert_eq!(gate, "z");
                assert_eq!(signal, "q");
                assert_eq!(span.len(), 1);
            }
            other => panic!("expected UndefinedSignal, got {other:?}"),
        }
    }

    #[test]
    fn undefined_output() {
        let src = "INPUTS: a\nOUTPUTS: y missing\nGATES:\ny = NOT(a)\nSTIMULUS:\n";
        let n = parse_netlist(src, FileId::from_raw(0)).unwrap();
        assert!(matches!(
            resolve_order(&n),
            Err(ResolveError::UndefinedOutput { name, .. }) if name == "missing"
        ));
    }

    #[test]
    fn output_may_be_primary_input() {
        let src = "INPUTS: a\nOUTPUTS: a y\nGATES:\ny = NOT(a)\nSTIMULUS:\n";
        let n = parse_netlist(src, FileId::from_raw(0)).unwrap();
        assert_eq!(resolve_order(&n).unwrap().len(), 1);
    }

    #[test]
    fn unobserved_chain_is_reported_whole() {
        let n = netlist("u = NOT(a)\nv = NOT(u)\nz = AND(a, b)\n");
        assert_eq!(
            unobserved_gates(&n),
            vec![GateId::from_raw(0), GateId::from_raw(1)]
        );
    }

    #[test]
    fn gates_feeding_outputs_are_observed() {
        let n = netlist("z = OR(m, t)\nt = NOT(m)\nm = AND(a, b)\n");
        assert!(unobserved_gates(&n).is_empty());
    }

    #[test]
    fn resolution_is_deterministic() {
        let n = netlist("z = XOR(x, y)\ny = OR(a, x)\nx = AND(a, b)\n");
        let first = resolve_order(&n).unwrap();
        for _ in 0..10 {
            assert_eq!(resolve_order(&n).unwrap(), first);
        }
    }
}
