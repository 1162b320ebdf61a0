//! Opaque ID newtypes for netlist entities.

use crate::arena::ArenaId;
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }

            /// Returns the raw index as a `usize`.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl ArenaId for $name {
            fn from_raw(index: u32) -> Self {
                Self(index)
            }

            fn as_raw(self) -> u32 {
                self.0
            }
        }
    };
}

define_id!(
    /// ID of a gate. Ordering follows declaration order in the netlist text.
    GateId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_roundtrip() {
        let id = GateId::from_raw(7);
        assert_eq!(id.as_raw(), 7);
        assert_eq!(id.index(), 7);
    }

    #[test]
    fn ordering_is_declaration_order() {
        assert!(GateId::from_raw(1) < GateId::from_raw(2));
    }

    #[test]
    fn serde_roundtrip() {
        let id = GateId::from_raw(3);
        let json = serde_json::to_string(&id).unwrap();
        let back: GateId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
