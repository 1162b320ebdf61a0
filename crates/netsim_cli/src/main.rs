//! netsim CLI, the command-line interface for the netsim logic simulator.
//!
//! Provides `netsim sim` for simulating a netlist and writing its waveform,
//! and `netsim check` for validating a netlist and printing its gate
//! evaluation order.

#![warn(missing_docs)]

mod check;
mod pipeline;
mod sim;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

/// netsim, a combinational logic simulator.
#[derive(Parser, Debug)]
#[command(name = "netsim", version, about = "Combinational logic simulator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `netsim.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Simulate a netlist and write its waveform.
    Sim(SimArgs),
    /// Validate a netlist and print its gate evaluation order.
    Check(CheckArgs),
}

/// Arguments for the `netsim sim` subcommand.
#[derive(Parser, Debug)]
pub struct SimArgs {
    /// Netlist file to simulate.
    pub netlist: String,

    /// Output path (default: the netlist path with the format's extension).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Waveform output format.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Evaluate stimulus events in parallel.
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the `netsim check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Netlist file to check.
    pub netlist: String,
}

/// Waveform output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// WaveDrom JSON.
    Wavedrom,
    /// Value Change Dump (IEEE 1364).
    Vcd,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    if let Err(e) = init_logging(&global) {
        eprintln!("warning: could not install logger: {e}");
    }

    let result = match cli.command {
        Command::Sim(ref args) => sim::run(args, &global),
        Command::Check(ref args) => check::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Log level for the given flags. `--quiet` wins over `--verbose`.
fn log_level(global: &GlobalArgs) -> LevelFilter {
    if global.quiet {
        LevelFilter::Error
    } else if global.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs a stderr logger.
fn init_logging(global: &GlobalArgs) -> Result<(), log::SetLoggerError> {
    log_dispatch(global).chain(std::io::stderr()).apply()
}

/// Formats records as `[LEVEL target] message`, filtered by the global flags.
fn log_dispatch(global: &GlobalArgs) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log_level(global))
}
