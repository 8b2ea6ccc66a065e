//! Full-screen image in display RAM layout.
//!
//! [`Bitmap`] is a plain 504-byte image that implements the
//! `embedded-graphics` [`DrawTarget`], so shapes and text can be composed
//! off-screen and then sent in one go with
//! [`Pcd8544::draw_bitmap()`](crate::Pcd8544::draw_bitmap).
//!
//! # Layout
//!
//! ```text
//!          x = 0   1   2        83
//! bank 0 │ b0  │ b1  │ b2  │ … │ b83  │  rows 0..8, bit 0 = row 0
//! bank 1 │ b84 │ b85 │ …               rows 8..16
//! …
//! bank 5 │ b420 … b503                 rows 40..48
//! ```

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::driver::{BITMAP_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::BitmapError;

/// An 84×48 monochrome image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    buf: [u8; BITMAP_SIZE],
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bitmap {
    /// A blank image.
    pub const fn new() -> Self {
        Self {
            buf: [0; BITMAP_SIZE],
        }
    }

    /// Wrap raw display RAM bytes.
    pub const fn from_bytes(buf: [u8; BITMAP_SIZE]) -> Self {
        Self { buf }
    }

    /// Copy a slice that must be exactly [`BITMAP_SIZE`] bytes.
    ///
    /// # Errors
    ///
    /// [`BitmapError::Length`] if the slice has any other length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, BitmapError> {
        let buf = bytes.try_into().map_err(|_| BitmapError::Length {
            expected: BITMAP_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self { buf })
    }

    /// Raw bytes, ready for [`Pcd8544::draw_bitmap()`](crate::Pcd8544::draw_bitmap).
    pub fn as_bytes(&self) -> &[u8; BITMAP_SIZE] {
        &self.buf
    }

    /// State of the pixel at `(x, y)`, or `None` off-screen.
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        let (index, mask) = Self::locate(x, y)?;
        Some(self.buf[index] & mask != 0)
    }

    /// Set or clear the pixel at `(x, y)`. Off-screen coordinates are
    /// ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if let Some((index, mask)) = Self::locate(x, y) {
            if on {
                self.buf[index] |= mask;
            } else {
                self.buf[index] &= !mask;
            }
        }
    }

    fn locate(x: usize, y: usize) -> Option<(usize, u8)> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }
        Some(((y / 8) * SCREEN_WIDTH + x, 1 << (y % 8)))
    }
}

impl TryFrom<&[u8]> for Bitmap {
    type Error = BitmapError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl OriginDimensions for Bitmap {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
    }
}

impl DrawTarget for Bitmap {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        self.buf.fill(fill);
        Ok(())
    }
}
