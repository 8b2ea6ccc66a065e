//! Error types.
//!
//! The driver itself cannot fail: contrast is clamped, addresses wrap and
//! the bus is polled until it completes. Errors only arise when building
//! inputs for it.

use core::fmt;

/// Errors that can occur when constructing a [`Bitmap`](crate::Bitmap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmapError {
    /// The source buffer is not exactly one screen in size.
    Length {
        /// Required length, [`BITMAP_SIZE`](crate::BITMAP_SIZE).
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },
}

impl fmt::Display for BitmapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BitmapError::Length { expected, actual } => {
                write!(f, "bitmap must be {} bytes, got {}", expected, actual)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BitmapError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            BitmapError::Length { expected, actual } => {
                defmt::write!(f, "Bitmap length {} (expected {})", actual, expected)
            }
        }
    }
}
