//! Parsing and validation of `netsim.toml` simulator configuration files.
//!
//! Every field has a default, so a run without any configuration file
//! behaves exactly like one with an empty `netsim.toml`.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config, load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
