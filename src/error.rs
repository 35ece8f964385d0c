//! Error handling primitives for the register access layer.

use crate::field::FieldError;

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the register access layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// The provided bit-field descriptor does not fit the register width.
    InvalidField(FieldError),
    /// A word burst exceeds the staging capacity of the interface.
    WordBurstTooLong,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
