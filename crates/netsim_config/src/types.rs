//! Configuration types deserialized from `netsim.toml`.

use serde::Deserialize;

/// The complete simulator configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// How traces are written.
    pub output: OutputConfig,
    /// How stimulus events are evaluated.
    pub simulation: SimulationConfig,
    /// Settings used only by the VCD writer.
    pub vcd: VcdConfig,
}

/// Output document settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output document format.
    pub format: OutputFormat,
    /// Pretty-print JSON output with two-space indentation.
    pub pretty: bool,
    /// Use WaveDrom's `.` notation for a value repeated from the previous event.
    pub collapse_repeats: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::WaveDrom,
            pretty: true,
            collapse_repeats: false,
        }
    }
}

/// Output document format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// WaveDrom JSON (`{"signal": [...]}`), the default.
    #[default]
    WaveDrom,
    /// Value Change Dump (IEEE 1364).
    Vcd,
}

/// Evaluation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Evaluate independent stimulus events on a thread pool.
    pub parallel: bool,
    /// Minimum number of stimulus events before parallel evaluation is used.
    pub parallel_threshold: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            parallel_threshold: 64,
        }
    }
}

/// VCD writer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VcdConfig {
    /// Unit of one stimulus time step, e.g. `"1ns"` or `"10ps"`.
    pub timescale: String,
    /// Name of the single `$scope module` holding all signals.
    pub scope: String,
}

impl Default for VcdConfig {
    fn default() -> Self {
        Self {
            timescale: "1ns".to_string(),
            scope: "top".to_string(),
        }
    }
}
