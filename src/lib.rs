#![no_std]

mod error;

pub mod compat;
pub mod field;
pub mod interface;
pub mod regmap;
#[cfg(test)]
mod testutil;

pub use crate::compat::AddressedRegisterAccess;
pub use crate::error::{Error, Result};
pub use crate::field::{BitField, FieldError};
pub use crate::interface::spi::SpiInterface;
pub use crate::interface::{ByteOrder, RegisterInterface};
pub use crate::regmap::RegMap;
