//! `netsim check`: validate a netlist without simulating it.
//!
//! Runs the parser and the dependency resolver, then prints the gate
//! evaluation order to stdout, one gate per line.

use std::path::Path;

use netsim_sim::{resolve_order, SimError};

use crate::pipeline::Session;
use crate::{CheckArgs, GlobalArgs};

/// Runs the `netsim check` command.
///
/// Returns exit code 0 if the netlist is valid and 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let path = Path::new(&args.netlist);
    let session = Session::open(path, global.color)?;
    let Some(netlist) = session.parse() else {
        return Ok(1);
    };
    let order = match resolve_order(&netlist) {
        Ok(order) => order,
        Err(e) => return session.fail(SimError::from(e)),
    };

    for name in order.names(&netlist) {
        println!("{name}");
    }
    if !global.quiet {
        eprintln!(
            "   Checked {}: {} input(s), {} output(s), {} gate(s), {} stimulus event(s)",
            path.display(),
            netlist.inputs().len(),
            netlist.outputs().len(),
            netlist.gates().len(),
            netlist.stimulus().len()
        );
    }
    Ok(0)
}
