//! The four fixed Modbus address spaces.

use std::fmt;

use serde::Serialize;

/// One of the four independent Modbus address spaces.
///
/// No overlap checking ever crosses from one space into another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressSpace {
    /// Single-bit read/write units.
    Coils,
    /// Single-bit read-only units.
    DiscreteInputs,
    /// 16-bit read/write words.
    Holding,
    /// 16-bit read-only words.
    InputRegisters,
}

impl AddressSpace {
    /// All spaces in reporting order.
    pub const ALL: [AddressSpace; 4] = [
        AddressSpace::Coils,
        AddressSpace::DiscreteInputs,
        AddressSpace::Holding,
        AddressSpace::InputRegisters,
    ];

    /// Returns the key under which this space appears in the address map document.
    pub fn key(self) -> &'static str {
        match self {
            AddressSpace::Coils => "coils",
            AddressSpace::DiscreteInputs => "discrete_inputs",
            AddressSpace::Holding => "holding",
            AddressSpace::InputRegisters => "input_registers",
        }
    }

    /// Position of this space in [`AddressSpace::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the single-bit spaces, where every entry is one address.
    pub fn is_bit_space(self) -> bool {
        matches!(self, AddressSpace::Coils | AddressSpace::DiscreteInputs)
    }
}

impl fmt::Display for AddressSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
