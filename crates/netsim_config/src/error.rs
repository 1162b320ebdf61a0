//! Error types for configuration loading and validation.

/// Errors produced while loading a `netsim.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read netsim.toml: {0}")]
    Read(#[from] std::io::Error),

    /// The TOML is malformed, has a wrongly typed value or an unknown key.
    #[error("malformed netsim.toml: {0}")]
    Syntax(String),

    /// A well-formed value is out of range.
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted key path, e.g. `vcd.timescale`.
        field: &'static str,
        /// What is wrong with the value.
        reason: String,
    },
}
