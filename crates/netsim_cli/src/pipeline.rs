//! Shared plumbing for the subcommands: loading the netlist and its
//! configuration, and reporting diagnostics.

use std::path::{Path, PathBuf};

use log::debug;
use netsim_config::{ConfigError, SimulatorConfig};
use netsim_diagnostics::{Diagnostic, DiagnosticRenderer, TerminalRenderer};
use netsim_netlist::{parse_netlist, Netlist};
use netsim_sim::{SimError, WaveformFormat};
use netsim_source::{FileId, SourceDb};

use crate::GlobalArgs;

/// A netlist file loaded for one command.
pub(crate) struct Session {
    source_db: SourceDb,
    file: FileId,
    color: bool,
}

impl Session {
    /// Reads the netlist at `path`.
    pub(crate) fn open(path: &Path, color: bool) -> Result<Self, std::io::Error> {
        let mut source_db = SourceDb::new();
        let file = source_db.load_file(path)?;
        Ok(Self {
            source_db,
            file,
            color,
        })
    }

    /// Parses the netlist, reporting any error. `None` means the error has
    /// already been printed.
    pub(crate) fn parse(&self) -> Option<Netlist> {
        let source = &self.source_db.get_file(self.file).content;
        match parse_netlist(source, self.file) {
            Ok(netlist) => Some(netlist),
            Err(e) => {
                self.report(&e.to_diagnostic());
                None
            }
        }
    }

    /// Prints a simulation error, returning the process exit code. Errors
    /// without a diagnostic form are passed back to the caller.
    pub(crate) fn fail(&self, err: SimError) -> Result<i32, Box<dyn std::error::Error>> {
        match err.to_diagnostic() {
            Some(diag) => {
                self.report(&diag);
                Ok(1)
            }
            None => Err(err.into()),
        }
    }

    /// Renders `diag` to stderr.
    pub(crate) fn report(&self, diag: &Diagnostic) {
        let renderer = TerminalRenderer::new(self.color);
        eprint!("{}", renderer.render(diag, &self.source_db));
    }
}

/// Loads the configuration for a run on `netlist`.
///
/// `--config` takes precedence; otherwise `netsim.toml` next to the netlist
/// is used if present, and defaults apply if not.
pub(crate) fn load_config(
    global: &GlobalArgs,
    netlist: &Path,
) -> Result<SimulatorConfig, ConfigError> {
    if let Some(path) = &global.config {
        debug!("loading config from {path}");
        return netsim_config::load_config(Path::new(path));
    }
    let dir = match netlist.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    match netsim_config::find_config(dir) {
        Some(path) => {
            debug!("loading config from {}", path.display());
            netsim_config::load_config(&path)
        }
        None => Ok(SimulatorConfig::default()),
    }
}

/// The output path used when `-o` is not given: the netlist path with its
/// extension replaced by the format's. A netlist that already carries that
/// extension gets `out.<ext>` instead, so it is never overwritten.
pub(crate) fn default_output_path(netlist: &Path, format: WaveformFormat) -> PathBuf {
    let path = netlist.with_extension(format.extension());
    if path == netlist {
        netlist.with_extension(format!("out.{}", format.extension()))
    } else {
        path
    }
}
