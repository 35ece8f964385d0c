//! SPI transport implementation built on top of `embedded-hal` `SpiDevice`.
//!
//! `SpiDevice::transaction` supplies the framing discipline the access layer
//! depends on: the bus is acquired with this device's clock settings, the
//! select line is asserted before the first octet and deasserted after the
//! last, and each operation exchanges octets synchronously.

use embedded_hal::spi::{Operation, SpiDevice};

use super::{ByteOrder, RegisterInterface};
use crate::error::{Error, Result};

/// High bit of the address octet, set to request a read.
const READ_FLAG: u8 = 0x80;

/// Longest word burst (in 16-bit words) a single transaction can stage.
///
/// Word payloads are packed into an on-stack buffer so the whole burst stays
/// inside one select/deselect pair without an allocator. Longer bursts fail
/// with [`Error::WordBurstTooLong`] instead of being split across frames.
pub const WORD_BURST_MAX: usize = 32;

/// SPI-based interface owning the bus binding for one device.
pub struct SpiInterface<SPI> {
    spi: SPI,
    byte_order: ByteOrder,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    ///
    /// `byte_order` fixes how word transfers map onto octet pairs for the
    /// lifetime of the binding.
    pub const fn new(spi: SPI, byte_order: ByteOrder) -> Self {
        Self { spi, byte_order }
    }

    /// Byte ordering this binding was constructed with.
    pub const fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Builds the address octet that opens every transaction.
    const fn address_octet(reg: u8, is_read: bool) -> u8 {
        if is_read { reg | READ_FLAG } else { reg }
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    /// Frames a degenerate access that carries only the address octet.
    ///
    /// Zero-length transfers still produce one select/deselect pair so the
    /// wire traffic per accessor call stays uniform.
    fn address_only(&mut self, address: u8) -> Result<(), SPI::Error> {
        let address = [address];
        let mut operations = [Operation::Write(&address)];
        self.spi.transaction(&mut operations)?;
        Ok(())
    }

    fn pack(&self, words: &[u16], octets: &mut [u8]) {
        for (word, pair) in words.iter().zip(octets.chunks_exact_mut(2)) {
            let bytes = match self.byte_order {
                ByteOrder::MsbFirst => word.to_be_bytes(),
                ByteOrder::LsbFirst => word.to_le_bytes(),
            };
            pair.copy_from_slice(&bytes);
        }
    }

    fn unpack(&self, octets: &[u8], words: &mut [u16]) {
        for (word, pair) in words.iter_mut().zip(octets.chunks_exact(2)) {
            *word = match self.byte_order {
                ByteOrder::MsbFirst => u16::from_be_bytes([pair[0], pair[1]]),
                ByteOrder::LsbFirst => u16::from_le_bytes([pair[0], pair[1]]),
            };
        }
    }
}

impl<SPI> RegisterInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type BusError = SPI::Error;

    fn read_bytes(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::BusError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("read {=usize} bytes from {=u8:#x}", buf.len(), reg);

        let address = Self::address_octet(reg, true);
        if buf.is_empty() {
            return self.address_only(address);
        }

        let address = [address];
        let mut operations = [Operation::Write(&address), Operation::Read(buf)];
        self.spi.transaction(&mut operations)?;
        Ok(())
    }

    fn write_bytes(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::BusError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("write {=usize} bytes to {=u8:#x}", data.len(), reg);

        let address = Self::address_octet(reg, false);
        if data.is_empty() {
            return self.address_only(address);
        }

        let address = [address];
        let mut operations = [Operation::Write(&address), Operation::Write(data)];
        self.spi.transaction(&mut operations)?;
        Ok(())
    }

    fn read_words(&mut self, reg: u8, buf: &mut [u16]) -> Result<(), Self::BusError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("read {=usize} words from {=u8:#x}", buf.len(), reg);

        if buf.len() > WORD_BURST_MAX {
            return Err(Error::WordBurstTooLong);
        }

        let address = Self::address_octet(reg, true);
        if buf.is_empty() {
            return self.address_only(address);
        }

        let mut raw = [0u8; WORD_BURST_MAX * 2];
        let octets = &mut raw[..buf.len() * 2];
        {
            let address = [address];
            let mut operations = [Operation::Write(&address), Operation::Read(octets)];
            self.spi.transaction(&mut operations)?;
        }

        self.unpack(&raw[..buf.len() * 2], buf);
        Ok(())
    }

    fn write_words(&mut self, reg: u8, data: &[u16]) -> Result<(), Self::BusError> {
        #[cfg(feature = "defmt")]
        defmt::trace!("write {=usize} words to {=u8:#x}", data.len(), reg);

        if data.len() > WORD_BURST_MAX {
            return Err(Error::WordBurstTooLong);
        }

        let address = Self::address_octet(reg, false);
        if data.is_empty() {
            return self.address_only(address);
        }

        let mut raw = [0u8; WORD_BURST_MAX * 2];
        self.pack(data, &mut raw[..data.len() * 2]);

        let address = [address];
        let mut operations = [
            Operation::Write(&address),
            Operation::Write(&raw[..data.len() * 2]),
        ];
        self.spi.transaction(&mut operations)?;
        Ok(())
    }
}
