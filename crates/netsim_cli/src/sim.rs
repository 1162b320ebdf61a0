//! `netsim sim`: simulate a netlist and write its waveform.
//!
//! Parses the netlist, resolves gate order, evaluates every stimulus event
//! and writes the traces as WaveDrom JSON or VCD. Nothing is written unless
//! every stage succeeds.

use std::fs;
use std::path::{Path, PathBuf};

use netsim_sim::{simulate, writer_for, SimOptions, WaveformFormat};

use crate::pipeline::{default_output_path, load_config, Session};
use crate::{FormatArg, GlobalArgs, SimArgs};

impl From<FormatArg> for WaveformFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Wavedrom => WaveformFormat::WaveDrom,
            FormatArg::Vcd => WaveformFormat::Vcd,
        }
    }
}

/// Runs the `netsim sim` command.
///
/// Prints the written path to stdout. Returns exit code 0 on success and 1
/// if the netlist was rejected.
pub fn run(args: &SimArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let netlist_path = Path::new(&args.netlist);
    let config = load_config(global, netlist_path)?;
    let format = choose_format(args, config.output.format.into());

    if !global.quiet {
        eprintln!("   Simulating {}", netlist_path.display());
    }

    let session = Session::open(netlist_path, global.color)?;
    let Some(netlist) = session.parse() else {
        return Ok(1);
    };

    let mut options = SimOptions::from(&config.simulation);
    options.parallel |= args.parallel;
    let traces = match simulate(&netlist, &options) {
        Ok(traces) => traces,
        Err(e) => return session.fail(e),
    };
    let document = match writer_for(format, &config).render(&traces) {
        Ok(document) => document,
        Err(e) => return session.fail(e),
    };

    let out_path = match &args.output {
        Some(p) => PathBuf::from(p),
        None => default_output_path(netlist_path, format),
    };
    fs::write(&out_path, document)?;

    if !global.quiet {
        eprintln!("   Wrote {}", out_path.display());
    }
    println!("{}", out_path.display());
    Ok(0)
}

/// `--format` wins, then the extension of `-o`, then the configured format.
fn choose_format(args: &SimArgs, configured: WaveformFormat) -> WaveformFormat {
    if let Some(arg) = args.format {
        return arg.into();
    }
    args.output
        .as_deref()
        .and_then(|p| Path::new(p).extension())
        .and_then(|ext| WaveformFormat::from_extension(&ext.to_string_lossy()))
        .unwrap_or(configured)
}
