//! Blocking driver for the PCD8544 84×48 monochrome LCD controller
//! (Nokia 5110 / 3310 modules).
//!
//! This crate provides [`Pcd8544`], which talks to the controller over a
//! byte-wide serial bus plus chip-select, reset and data/command lines,
//! tracks the controller's RAM address pointer, and renders text with a
//! built-in 6×8 font (14 columns × 6 rows).
//!
//! # Quick Start
//!
//! ```ignore
//! use pcd8544_display_rs::{HalSpi, Pcd8544};
//!
//! // Any embedded-hal 1.0 SPI bus (mode 0, ≤ 4 MHz) and three push-pull outputs.
//! let mut lcd = Pcd8544::new(HalSpi::new(spi), cs, rst, dc);
//!
//! lcd.print("Hello\n");
//! write!(lcd, "T = {} C", 21).ok();
//! lcd.set_contrast(60);
//! ```
//!
//! Chip-specific code that can poll the SPI status flags directly should
//! implement [`SerialBus`] instead of going through [`HalSpi`].
//!
//! # Architecture
//!
//! - **`interface`** (crate-private) — command/data framing: D/C select,
//!   chip-select, transmit and wait for the bus to idle.
//! - **[`driver`]** — initialisation, contrast, addressing and text.
//! - **[`font`]** — the 256-entry glyph table.
//! - **[`bitmap`]** — an `embedded-graphics` draw target for composing
//!   full-screen images.
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging and [`defmt::Format`] impls via
//!   [`defmt`].
//! - **`task`** — [`console_task`], an Embassy-compatible loop that owns
//!   the driver and prints lines received over a channel.

#![cfg_attr(not(test), no_std)]

pub mod bitmap;
pub mod bus;
pub mod commands;
pub mod config;
#[cfg(feature = "task")]
pub mod console;
pub mod driver;
pub mod error;
pub mod font;
mod interface;
#[cfg(test)]
mod mock;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use bitmap::Bitmap;
pub use bus::{HalSpi, SerialBus};
pub use commands::{Bias, DisplayMode, TempCoefficient};
pub use config::Config;
#[cfg(feature = "task")]
pub use console::{console_task, ConsoleChannel};
pub use driver::{
    Pcd8544, Printable, BANKS, BITMAP_SIZE, COLUMNS, ROWS, SCREEN_HEIGHT, SCREEN_WIDTH,
};
pub use error::BitmapError;
pub use font::{Glyph, FONT};
