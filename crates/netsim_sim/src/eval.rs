//! Boolean semantics of each gate kind.

use netsim_common::{InternalError, NetsimResult};
use netsim_netlist::GateKind;

/// Evaluates one gate.
///
/// `inputs` holds the resolved operand values in declared order. The parser
/// guarantees the operand count matches `kind`, so a mismatch here is an
/// internal error.
pub fn evaluate(kind: GateKind, inputs: &[bool]) -> NetsimResult<bool> {
    match (kind, inputs) {
        (GateKind::Not, &[a]) => Ok(!a),
        (GateKind::And, &[a, b]) => Ok(a && b),
        (GateKind::Or, &[a, b]) => Ok(a || b),
        (GateKind::Xor, &[a, b]) => Ok(a != b),
        _ => Err(InternalError::new(format!(
            "{kind} gate evaluated with {} operand(s), expected {}",
            inputs.len(),
            kind.arity()
        ))),
    }
}
