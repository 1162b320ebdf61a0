//! Shared foundational types used across the netsim workspace.
//!
//! Provides the internal-error result type used for invariant failures and
//! the identifier rules shared by the netlist parser and the output writers.

#![warn(missing_docs)]

pub mod ident;
pub mod result;

pub use ident::{validate_identifier, IdentError};
pub use result::{InternalError, NetsimResult};
