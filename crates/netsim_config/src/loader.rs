//! Configuration file discovery, loading and validation.

use crate::error::ConfigError;
use crate::types::SimulatorConfig;
use netsim_common::validate_identifier;
use std::path::{Path, PathBuf};

/// File name looked up next to the input netlist.
pub const CONFIG_FILE_NAME: &str = "netsim.toml";

const TIMESCALE_MAGNITUDES: [&str; 3] = ["1", "10", "100"];
const TIMESCALE_UNITS: [&str; 6] = ["s", "ms", "us", "ns", "ps", "fs"];

/// Loads and validates a configuration file.
pub fn load_config(path: &Path) -> Result<SimulatorConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates configuration text.
pub fn load_config_from_str(content: &str) -> Result<SimulatorConfig, ConfigError> {
    let config: SimulatorConfig =
        toml::from_str(content).map_err(|e| ConfigError::Syntax(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Returns `<dir>/netsim.toml` if it exists.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let candidate = dir.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

fn validate_config(config: &SimulatorConfig) -> Result<(), ConfigError> {
    // The scope is written unquoted into `$scope module <name> $end`.
    if let Err(reason) = validate_identifier(&config.vcd.scope) {
        return Err(ConfigError::Invalid {
            field: "vcd.scope",
            reason: format!("'{}' is not a valid module name ({reason})", config.vcd.scope),
        });
    }
    if !is_valid_timescale(&config.vcd.timescale) {
        return Err(ConfigError::Invalid {
            field: "vcd.timescale",
            reason: format!(
                "'{}' is not of the form <1|10|100><s|ms|us|ns|ps|fs>",
                config.vcd.timescale
            ),
        });
    }
    if config.simulation.parallel_threshold == 0 {
        return Err(ConfigError::Invalid {
            field: "simulation.parallel_threshold",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn is_valid_timescale(timescale: &str) -> bool {
    let digits_end = timescale
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(timescale.len());
    let (magnitude, unit) = timescale.split_at(digits_end);
    TIMESCALE_MAGNITUDES.contains(&magnitude) && TIMESCALE_UNITS.contains(&unit.trim())
}
