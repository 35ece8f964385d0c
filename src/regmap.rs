//! Caller-facing register map composing bit and bit-field access on top of a
//! [`RegisterInterface`].

use embedded_hal::spi::SpiDevice;

use crate::error::{Error, Result};
use crate::field::BitField;
use crate::interface::spi::SpiInterface;
use crate::interface::{ByteOrder, RegisterInterface};

/// Register access layer for one device.
///
/// Owns the bus binding through its interface and exposes the full accessor
/// surface: bytes, 16-bit words, single bits, and bit fields. Every call is
/// a complete, self-contained transaction sequence; bit and field writes use
/// read-modify-write and there is no cross-call state beyond the binding.
pub struct RegMap<IFACE> {
    interface: IFACE,
}

impl<IFACE> RegMap<IFACE> {
    /// Creates a new register map from the provided bus interface.
    pub const fn new(interface: IFACE) -> Self {
        Self { interface }
    }

    /// Consumes the register map and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }
}

impl<SPI> RegMap<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Convenience constructor for SPI transports.
    pub const fn new_spi(spi: SPI, byte_order: ByteOrder) -> Self {
        Self::new(SpiInterface::new(spi, byte_order))
    }

    /// Releases the register map, returning the SPI device.
    pub fn release_spi(self) -> SPI {
        self.release().release()
    }
}

impl<IFACE, CommE> RegMap<IFACE>
where
    IFACE: RegisterInterface<BusError = CommE>,
{
    // ==================================================================
    // == Byte & Word Access ============================================
    // ==================================================================
    /// Reads a single byte register.
    pub fn read_byte(&mut self, reg: u8) -> Result<u8, CommE> {
        self.interface.read_byte(reg)
    }

    /// Reads consecutive byte registers starting at `reg` into `buf`.
    pub fn read_bytes(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), CommE> {
        self.interface.read_bytes(reg, buf)
    }

    /// Writes a single byte register.
    pub fn write_byte(&mut self, reg: u8, value: u8) -> Result<(), CommE> {
        self.interface.write_byte(reg, value)
    }

    /// Writes consecutive byte registers starting at `reg` from `data`.
    pub fn write_bytes(&mut self, reg: u8, data: &[u8]) -> Result<(), CommE> {
        self.interface.write_bytes(reg, data)
    }

    /// Reads a single 16-bit register.
    pub fn read_word(&mut self, reg: u8) -> Result<u16, CommE> {
        self.interface.read_word(reg)
    }

    /// Reads consecutive 16-bit registers starting at `reg` into `buf`.
    pub fn read_words(&mut self, reg: u8, buf: &mut [u16]) -> Result<(), CommE> {
        self.interface.read_words(reg, buf)
    }

    /// Writes a single 16-bit register.
    pub fn write_word(&mut self, reg: u8, value: u16) -> Result<(), CommE> {
        self.interface.write_word(reg, value)
    }

    /// Writes consecutive 16-bit registers starting at `reg` from `data`.
    pub fn write_words(&mut self, reg: u8, data: &[u16]) -> Result<(), CommE> {
        self.interface.write_words(reg, data)
    }

    // ==================================================================
    // == Bit & Bit-Field Access ========================================
    // ==================================================================
    /// Reads one bit of a byte register.
    ///
    /// Returns the bit masked in place, not right-shifted: a set bit 6 reads
    /// back as `0b0100_0000`.
    pub fn read_bit(&mut self, reg: u8, bit: u8) -> Result<u8, CommE> {
        let field = BitField::byte(bit, 1).map_err(Error::InvalidField)?;
        let raw = self.interface.read_byte(reg)?;
        Ok(field.masked(u16::from(raw)) as u8)
    }

    /// Reads one bit of a 16-bit register, masked in place.
    pub fn read_bit_word(&mut self, reg: u8, bit: u8) -> Result<u16, CommE> {
        let field = BitField::word(bit, 1).map_err(Error::InvalidField)?;
        let raw = self.interface.read_word(reg)?;
        Ok(field.masked(raw))
    }

    /// Reads a bit field of a byte register, right-aligned.
    ///
    /// `start` names the most significant bit of the field and the field
    /// extends `len` bits toward bit 0.
    pub fn read_bits(&mut self, reg: u8, start: u8, len: u8) -> Result<u8, CommE> {
        let field = BitField::byte(start, len).map_err(Error::InvalidField)?;
        let raw = self.interface.read_byte(reg)?;
        Ok(field.extract(u16::from(raw)) as u8)
    }

    /// Reads a bit field of a 16-bit register, right-aligned.
    pub fn read_bits_word(&mut self, reg: u8, start: u8, len: u8) -> Result<u16, CommE> {
        let field = BitField::word(start, len).map_err(Error::InvalidField)?;
        let raw = self.interface.read_word(reg)?;
        Ok(field.extract(raw))
    }

    /// Sets or clears one bit of a byte register via read-modify-write.
    pub fn write_bit(&mut self, reg: u8, bit: u8, value: bool) -> Result<(), CommE> {
        let field = BitField::byte(bit, 1).map_err(Error::InvalidField)?;
        let current = self.interface.read_byte(reg)?;
        let updated = field.insert(u16::from(current), u16::from(value)) as u8;
        self.interface.write_byte(reg, updated)
    }

    /// Sets or clears one bit of a 16-bit register via read-modify-write.
    pub fn write_bit_word(&mut self, reg: u8, bit: u8, value: bool) -> Result<(), CommE> {
        let field = BitField::word(bit, 1).map_err(Error::InvalidField)?;
        let current = self.interface.read_word(reg)?;
        let updated = field.insert(current, u16::from(value));
        self.interface.write_word(reg, updated)
    }

    /// Replaces a bit field of a byte register via read-modify-write.
    ///
    /// `value` is right-aligned; bits beyond `len` are discarded. A failed
    /// prerequisite read aborts before any write-back is issued.
    pub fn write_bits(&mut self, reg: u8, start: u8, len: u8, value: u8) -> Result<(), CommE> {
        let field = BitField::byte(start, len).map_err(Error::InvalidField)?;
        let current = self.interface.read_byte(reg)?;
        let updated = field.insert(u16::from(current), u16::from(value)) as u8;
        self.interface.write_byte(reg, updated)
    }

    /// Replaces a bit field of a 16-bit register via read-modify-write.
    pub fn write_bits_word(
        &mut self,
        reg: u8,
        start: u8,
        len: u8,
        value: u16,
    ) -> Result<(), CommE> {
        let field = BitField::word(start, len).map_err(Error::InvalidField)?;
        let current = self.interface.read_word(reg)?;
        let updated = field.insert(current, value);
        self.interface.write_word(reg, updated)
    }
}

#[cfg(test)]
mod tests {
    use super::RegMap;
    use crate::error::Error;
    use crate::field::FieldError;
    use crate::testutil::{BusFault, MemInterface};

    #[test]
    fn read_bit_returns_masked_value() {
        let mut regs = RegMap::new(MemInterface::with_byte(0x02, 0b0110_1001));

        assert_eq!(regs.read_bit(0x02, 6).unwrap(), 0b0100_0000);
        assert_eq!(regs.read_bit(0x02, 1).unwrap(), 0);
    }

    #[test]
    fn read_bit_word_returns_masked_value() {
        let mut regs = RegMap::new(MemInterface::with_word(0x01, 0b0001_0000_0000_0000));

        assert_eq!(regs.read_bit_word(0x01, 12).unwrap(), 0b0001_0000_0000_0000);
        assert_eq!(regs.read_bit_word(0x01, 3).unwrap(), 0);
    }

    #[test]
    fn read_bits_right_aligns_the_field() {
        // 01101001 register, start=4 len=3 -> 010
        let mut regs = RegMap::new(MemInterface::with_byte(0x00, 0b0110_1001));

        assert_eq!(regs.read_bits(0x00, 4, 3).unwrap(), 0b010);
    }

    #[test]
    fn read_bits_word_right_aligns_the_field() {
        let mut regs = RegMap::new(MemInterface::with_word(0x00, 0b1101_0110_0110_1001));

        assert_eq!(regs.read_bits_word(0x00, 12, 3).unwrap(), 0b101);
    }

    #[test]
    fn write_bit_sets_and_clears() {
        let mut regs = RegMap::new(MemInterface::with_byte(0x03, 0b0000_1000));

        regs.write_bit(0x03, 0, true).unwrap();
        assert_eq!(regs.interface_mut().byte(0x03), 0b0000_1001);

        regs.write_bit(0x03, 3, false).unwrap();
        assert_eq!(regs.interface_mut().byte(0x03), 0b0000_0001);
        assert_eq!(regs.interface_mut().byte_writes, 2);
    }

    #[test]
    fn write_bits_merges_with_existing_bits() {
        // 10101111 original, start=4 len=3, write 010 -> 10101011
        let mut regs = RegMap::new(MemInterface::with_byte(0x00, 0b1010_1111));

        regs.write_bits(0x00, 4, 3, 0b010).unwrap();
        assert_eq!(regs.interface_mut().byte(0x00), 0b1010_1011);
    }

    #[test]
    fn write_bits_word_merges_with_existing_bits() {
        // start=12 len=3, write 010 over 1010111110010110 -> 1010101110010110
        let mut regs = RegMap::new(MemInterface::with_word(0x00, 0b1010_1111_1001_0110));

        regs.write_bits_word(0x00, 12, 3, 0b010).unwrap();
        assert_eq!(regs.interface_mut().word(0x00), 0b1010_1011_1001_0110);
    }

    #[test]
    fn field_round_trip_leaves_register_unchanged() {
        let mut regs = RegMap::new(MemInterface::with_byte(0x00, 0b1011_0110));

        let value = regs.read_bits(0x00, 6, 4).unwrap();
        regs.write_bits(0x00, 6, 4, value).unwrap();
        assert_eq!(regs.interface_mut().byte(0x00), 0b1011_0110);
    }

    #[test]
    fn read_back_write_back_is_idempotent() {
        let mut regs = RegMap::new(MemInterface::with_byte(0x07, 0x5A));

        let value = regs.read_byte(0x07).unwrap();
        regs.write_byte(0x07, value).unwrap();
        assert_eq!(regs.read_byte(0x07).unwrap(), 0x5A);
    }

    #[test]
    fn failed_read_aborts_write_bits_without_write_back() {
        let mut interface = MemInterface::with_byte(0x00, 0xFF);
        interface.fail_reads = true;
        let mut regs = RegMap::new(interface);

        assert_eq!(
            regs.write_bits(0x00, 4, 3, 0b010),
            Err(Error::Interface(BusFault))
        );
        assert_eq!(regs.interface_mut().byte_writes, 0);

        assert_eq!(
            regs.write_bit_word(0x00, 3, true),
            Err(Error::Interface(BusFault))
        );
        assert_eq!(regs.interface_mut().word_writes, 0);
    }

    #[test]
    fn invalid_descriptors_fail_without_bus_traffic() {
        let mut regs = RegMap::new(MemInterface::with_byte(0x00, 0xFF));

        assert_eq!(
            regs.read_bits(0x00, 2, 4),
            Err(Error::InvalidField(FieldError::ExtendsPastBitZero))
        );
        assert_eq!(
            regs.write_bits(0x00, 9, 2, 0b11),
            Err(Error::InvalidField(FieldError::StartOutOfRange))
        );
        assert_eq!(
            regs.read_bit(0x00, 8),
            Err(Error::InvalidField(FieldError::StartOutOfRange))
        );
        assert_eq!(regs.interface_mut().byte_reads, 0);
        assert_eq!(regs.interface_mut().byte_writes, 0);
    }
}
