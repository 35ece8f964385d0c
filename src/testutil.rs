//! In-memory register file used as a bus interface stand-in by unit tests.

use crate::error::{Error, Result};
use crate::interface::RegisterInterface;

/// Error injected by [`MemInterface`] when failures are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

/// Register interface backed by plain arrays, with per-access counters.
pub struct MemInterface {
    bytes: [u8; 16],
    words: [u16; 16],
    pub fail_reads: bool,
    pub byte_reads: usize,
    pub word_reads: usize,
    pub byte_writes: usize,
    pub word_writes: usize,
}

impl MemInterface {
    pub fn new() -> Self {
        Self {
            bytes: [0; 16],
            words: [0; 16],
            fail_reads: false,
            byte_reads: 0,
            word_reads: 0,
            byte_writes: 0,
            word_writes: 0,
        }
    }

    pub fn with_byte(reg: u8, value: u8) -> Self {
        let mut interface = Self::new();
        interface.bytes[reg as usize] = value;
        interface
    }

    pub fn with_word(reg: u8, value: u16) -> Self {
        let mut interface = Self::new();
        interface.words[reg as usize] = value;
        interface
    }

    pub fn byte(&self, reg: u8) -> u8 {
        self.bytes[reg as usize]
    }

    pub fn word(&self, reg: u8) -> u16 {
        self.words[reg as usize]
    }
}

impl RegisterInterface for MemInterface {
    type BusError = BusFault;

    fn read_bytes(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::BusError> {
        if self.fail_reads {
            return Err(Error::Interface(BusFault));
        }
        self.byte_reads += 1;
        for (offset, slot) in buf.iter_mut().enumerate() {
            *slot = self.bytes[reg as usize + offset];
        }
        Ok(())
    }

    fn write_bytes(&mut self, reg: u8, data: &[u8]) -> Result<(), Self::BusError> {
        self.byte_writes += 1;
        for (offset, value) in data.iter().enumerate() {
            self.bytes[reg as usize + offset] = *value;
        }
        Ok(())
    }

    fn read_words(&mut self, reg: u8, buf: &mut [u16]) -> Result<(), Self::BusError> {
        if self.fail_reads {
            return Err(Error::Interface(BusFault));
        }
        self.word_reads += 1;
        for (offset, slot) in buf.iter_mut().enumerate() {
            *slot = self.words[reg as usize + offset];
        }
        Ok(())
    }

    fn write_words(&mut self, reg: u8, data: &[u16]) -> Result<(), Self::BusError> {
        self.word_writes += 1;
        for (offset, value) in data.iter().enumerate() {
            self.words[reg as usize + offset] = *value;
        }
        Ok(())
    }
}
