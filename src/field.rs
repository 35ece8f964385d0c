//! Bit-field descriptors and the packing arithmetic behind bit-level access.
//!
//! A [`BitField`] names a contiguous run of bits inside an 8- or 16-bit
//! register. `start` is the *most significant* bit of the run and the field
//! extends toward bit 0, so extracting `101` from any position yields `0b101`.
//!
//! ```rust
//! use spi_regmap::field::BitField;
//!
//! // 01101001 register value
//! // 76543210 bit numbers
//! //    xxx   start = 4, len = 3
//! let field = BitField::byte(4, 3).unwrap();
//! assert_eq!(field.mask(), 0b0001_1100);
//! assert_eq!(field.extract(0b0110_1001), 0b010);
//! ```

/// Reasons a bit-field descriptor can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldError {
    /// The field length is zero.
    ZeroLength,
    /// The field extends below bit 0 (`len > start + 1`).
    ExtendsPastBitZero,
    /// The start bit lies outside the register width.
    StartOutOfRange,
}

/// A validated (start bit, bit count, word width) triple.
///
/// All arithmetic is done in the `u16` domain; byte-width fields are
/// guaranteed by construction to produce masks that fit in the low octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    start: u8,
    len: u8,
    width: u8,
}

impl BitField {
    /// Describes a field inside an 8-bit register.
    pub const fn byte(start: u8, len: u8) -> Result<Self, FieldError> {
        Self::new(start, len, 8)
    }

    /// Describes a field inside a 16-bit register.
    pub const fn word(start: u8, len: u8) -> Result<Self, FieldError> {
        Self::new(start, len, 16)
    }

    const fn new(start: u8, len: u8, width: u8) -> Result<Self, FieldError> {
        if len == 0 {
            return Err(FieldError::ZeroLength);
        }
        if start >= width {
            return Err(FieldError::StartOutOfRange);
        }
        if len > start + 1 {
            return Err(FieldError::ExtendsPastBitZero);
        }
        Ok(Self { start, len, width })
    }

    /// Most significant bit of the field.
    pub const fn start(&self) -> u8 {
        self.start
    }

    /// Number of bits in the field.
    pub const fn len(&self) -> u8 {
        self.len
    }

    /// Width in bits of the register the field lives in.
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Distance of the field's least significant bit from bit 0.
    pub const fn shift(&self) -> u8 {
        self.start + 1 - self.len
    }

    /// In-position mask covering exactly the field's bits.
    pub const fn mask(&self) -> u16 {
        (((1u32 << self.len) - 1) as u16) << self.shift()
    }

    /// Extracts the field from `raw`, right-aligned.
    pub const fn extract(&self, raw: u16) -> u16 {
        (raw & self.mask()) >> self.shift()
    }

    /// Extracts the field from `raw` without right-aligning it.
    pub const fn masked(&self, raw: u16) -> u16 {
        raw & self.mask()
    }

    /// Replaces the field inside `raw` with the right-aligned `value`.
    ///
    /// Bits of `value` beyond the field length are discarded, matching the
    /// mask-then-merge behavior callers expect from read-modify-write paths.
    pub const fn insert(&self, raw: u16, value: u16) -> u16 {
        (raw & !self.mask()) | ((value << self.shift()) & self.mask())
    }
}
