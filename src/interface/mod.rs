//! Bus interface abstraction for the register access layer.

pub mod spi;

/// Byte ordering used when assembling 16-bit register words from the two
/// octets that cross the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteOrder {
    /// The first octet of each pair carries bits 15-8.
    #[default]
    MsbFirst,
    /// The first octet of each pair carries bits 7-0.
    LsbFirst,
}

/// Abstraction over the framed register transfers required by the access
/// layer.
///
/// Implementations own the bus binding for one device (select line plus bus
/// configuration) and must wrap every operation in exactly one
/// select/deselect pair, no matter how many payload octets it moves.
pub trait RegisterInterface {
    /// Error type produced by the concrete bus implementation.
    type BusError;

    /// Reads consecutive byte registers starting at `reg` into `buf`.
    fn read_bytes(&mut self, reg: u8, buf: &mut [u8]) -> crate::Result<(), Self::BusError>;

    /// Writes consecutive byte registers starting at `reg` from `data`.
    fn write_bytes(&mut self, reg: u8, data: &[u8]) -> crate::Result<(), Self::BusError>;

    /// Reads consecutive 16-bit registers starting at `reg` into `buf`.
    fn read_words(&mut self, reg: u8, buf: &mut [u16]) -> crate::Result<(), Self::BusError>;

    /// Writes consecutive 16-bit registers starting at `reg` from `data`.
    fn write_words(&mut self, reg: u8, data: &[u16]) -> crate::Result<(), Self::BusError>;

    /// Reads a single byte register.
    fn read_byte(&mut self, reg: u8) -> crate::Result<u8, Self::BusError> {
        let mut value = [0u8; 1];
        self.read_bytes(reg, &mut value)?;
        Ok(value[0])
    }

    /// Writes a single byte register.
    fn write_byte(&mut self, reg: u8, value: u8) -> crate::Result<(), Self::BusError> {
        self.write_bytes(reg, core::slice::from_ref(&value))
    }

    /// Reads a single 16-bit register.
    fn read_word(&mut self, reg: u8) -> crate::Result<u16, Self::BusError> {
        let mut value = [0u16; 1];
        self.read_words(reg, &mut value)?;
        Ok(value[0])
    }

    /// Writes a single 16-bit register.
    fn write_word(&mut self, reg: u8, value: u16) -> crate::Result<(), Self::BusError> {
        self.write_words(reg, core::slice::from_ref(&value))
    }
}
