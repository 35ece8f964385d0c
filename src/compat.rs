//! Signature-parity layer for drivers written against an addressed,
//! timeout-aware register bus.
//!
//! Shared-bus abstractions (I2C-style) address each device explicitly and
//! bound reads with a timeout. [`AddressedRegisterAccess`] mirrors those
//! signatures so driver code written against such a bus compiles against
//! this crate unmodified. It is a separate capability interface with its own
//! `*_at` operation names, never an overload set: every operation forwards
//! unconditionally to its [`RegMap`] counterpart and discards the device
//! address and timeout, so the delegation itself is testable.
//!
//! The timeout is discarded by contract. A point-to-point select-line bus
//! has no device address, and bounding a hung bus is the responsibility of
//! the concrete `SpiDevice` implementation, which owns blocking behavior.

use crate::error::Result;
use crate::interface::RegisterInterface;
use crate::regmap::RegMap;

/// Register access carrying a device address and read timeout for interface
/// parity with shared-bus abstractions.
pub trait AddressedRegisterAccess {
    /// Error type produced by the underlying bus implementation.
    type BusError;

    /// Delegates to [`RegMap::read_bit`], ignoring `device` and `timeout_ms`.
    fn read_bit_at(
        &mut self,
        device: u8,
        reg: u8,
        bit: u8,
        timeout_ms: u16,
    ) -> Result<u8, Self::BusError>;

    /// Delegates to [`RegMap::read_bit_word`], ignoring `device` and `timeout_ms`.
    fn read_bit_word_at(
        &mut self,
        device: u8,
        reg: u8,
        bit: u8,
        timeout_ms: u16,
    ) -> Result<u16, Self::BusError>;

    /// Delegates to [`RegMap::read_bits`], ignoring `device` and `timeout_ms`.
    fn read_bits_at(
        &mut self,
        device: u8,
        reg: u8,
        start: u8,
        len: u8,
        timeout_ms: u16,
    ) -> Result<u8, Self::BusError>;

    /// Delegates to [`RegMap::read_bits_word`], ignoring `device` and `timeout_ms`.
    fn read_bits_word_at(
        &mut self,
        device: u8,
        reg: u8,
        start: u8,
        len: u8,
        timeout_ms: u16,
    ) -> Result<u16, Self::BusError>;

    /// Delegates to [`RegMap::read_byte`], ignoring `device` and `timeout_ms`.
    fn read_byte_at(&mut self, device: u8, reg: u8, timeout_ms: u16)
    -> Result<u8, Self::BusError>;

    /// Delegates to [`RegMap::read_word`], ignoring `device` and `timeout_ms`.
    fn read_word_at(
        &mut self,
        device: u8,
        reg: u8,
        timeout_ms: u16,
    ) -> Result<u16, Self::BusError>;

    /// Delegates to [`RegMap::read_bytes`], ignoring `device` and `timeout_ms`.
    fn read_bytes_at(
        &mut self,
        device: u8,
        reg: u8,
        buf: &mut [u8],
        timeout_ms: u16,
    ) -> Result<(), Self::BusError>;

    /// Delegates to [`RegMap::read_words`], ignoring `device` and `timeout_ms`.
    fn read_words_at(
        &mut self,
        device: u8,
        reg: u8,
        buf: &mut [u16],
        timeout_ms: u16,
    ) -> Result<(), Self::BusError>;

    /// Delegates to [`RegMap::write_bit`], ignoring `device`.
    fn write_bit_at(
        &mut self,
        device: u8,
        reg: u8,
        bit: u8,
        value: bool,
    ) -> Result<(), Self::BusError>;

    /// Delegates to [`RegMap::write_bit_word`], ignoring `device`.
    fn write_bit_word_at(
        &mut self,
        device: u8,
        reg: u8,
        bit: u8,
        value: bool,
    ) -> Result<(), Self::BusError>;

    /// Delegates to [`RegMap::write_bits`], ignoring `device`.
    fn write_bits_at(
        &mut self,
        device: u8,
        reg: u8,
        start: u8,
        len: u8,
        value: u8,
    ) -> Result<(), Self::BusError>;

    /// Delegates to [`RegMap::write_bits_word`], ignoring `device`.
    fn write_bits_word_at(
        &mut self,
        device: u8,
        reg: u8,
        start: u8,
        len: u8,
        value: u16,
    ) -> Result<(), Self::BusError>;

    /// Delegates to [`RegMap::write_byte`], ignoring `device`.
    fn write_byte_at(&mut self, device: u8, reg: u8, value: u8) -> Result<(), Self::BusError>;

    /// Delegates to [`RegMap::write_word`], ignoring `device`.
    fn write_word_at(&mut self, device: u8, reg: u8, value: u16) -> Result<(), Self::BusError>;

    /// Delegates to [`RegMap::write_bytes`], ignoring `device`.
    fn write_bytes_at(&mut self, device: u8, reg: u8, data: &[u8]) -> Result<(), Self::BusError>;

    /// Delegates to [`RegMap::write_words`], ignoring `device`.
    fn write_words_at(&mut self, device: u8, reg: u8, data: &[u16])
    -> Result<(), Self::BusError>;
}

impl<IFACE, CommE> AddressedRegisterAccess for RegMap<IFACE>
where
    IFACE: RegisterInterface<BusError = CommE>,
{
    type BusError = CommE;

    fn read_bit_at(
        &mut self,
        device: u8,
        reg: u8,
        bit: u8,
        timeout_ms: u16,
    ) -> Result<u8, CommE> {
        let _ = (device, timeout_ms);
        self.read_bit(reg, bit)
    }

    fn read_bit_word_at(
        &mut self,
        device: u8,
        reg: u8,
        bit: u8,
        timeout_ms: u16,
    ) -> Result<u16, CommE> {
        let _ = (device, timeout_ms);
        self.read_bit_word(reg, bit)
    }

    fn read_bits_at(
        &mut self,
        device: u8,
        reg: u8,
        start: u8,
        len: u8,
        timeout_ms: u16,
    ) -> Result<u8, CommE> {
        let _ = (device, timeout_ms);
        self.read_bits(reg, start, len)
    }

    fn read_bits_word_at(
        &mut self,
        device: u8,
        reg: u8,
        start: u8,
        len: u8,
        timeout_ms: u16,
    ) -> Result<u16, CommE> {
        let _ = (device, timeout_ms);
        self.read_bits_word(reg, start, len)
    }

    fn read_byte_at(&mut self, device: u8, reg: u8, timeout_ms: u16) -> Result<u8, CommE> {
        let _ = (device, timeout_ms);
        self.read_byte(reg)
    }

    fn read_word_at(&mut self, device: u8, reg: u8, timeout_ms: u16) -> Result<u16, CommE> {
        let _ = (device, timeout_ms);
        self.read_word(reg)
    }

    fn read_bytes_at(
        &mut self,
        device: u8,
        reg: u8,
        buf: &mut [u8],
        timeout_ms: u16,
    ) -> Result<(), CommE> {
        let _ = (device, timeout_ms);
        self.read_bytes(reg, buf)
    }

    fn read_words_at(
        &mut self,
        device: u8,
        reg: u8,
        buf: &mut [u16],
        timeout_ms: u16,
    ) -> Result<(), CommE> {
        let _ = (device, timeout_ms);
        self.read_words(reg, buf)
    }

    fn write_bit_at(&mut self, device: u8, reg: u8, bit: u8, value: bool) -> Result<(), CommE> {
        let _ = device;
        self.write_bit(reg, bit, value)
    }

    fn write_bit_word_at(
        &mut self,
        device: u8,
        reg: u8,
        bit: u8,
        value: bool,
    ) -> Result<(), CommE> {
        let _ = device;
        self.write_bit_word(reg, bit, value)
    }

    fn write_bits_at(
        &mut self,
        device: u8,
        reg: u8,
        start: u8,
        len: u8,
        value: u8,
    ) -> Result<(), CommE> {
        let _ = device;
        self.write_bits(reg, start, len, value)
    }

    fn write_bits_word_at(
        &mut self,
        device: u8,
        reg: u8,
        start: u8,
        len: u8,
        value: u16,
    ) -> Result<(), CommE> {
        let _ = device;
        self.write_bits_word(reg, start, len, value)
    }

    fn write_byte_at(&mut self, device: u8, reg: u8, value: u8) -> Result<(), CommE> {
        let _ = device;
        self.write_byte(reg, value)
    }

    fn write_word_at(&mut self, device: u8, reg: u8, value: u16) -> Result<(), CommE> {
        let _ = device;
        self.write_word(reg, value)
    }

    fn write_bytes_at(&mut self, device: u8, reg: u8, data: &[u8]) -> Result<(), CommE> {
        let _ = device;
        self.write_bytes(reg, data)
    }

    fn write_words_at(&mut self, device: u8, reg: u8, data: &[u16]) -> Result<(), CommE> {
        let _ = device;
        self.write_words(reg, data)
    }
}
