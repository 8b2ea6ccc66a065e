//! PCD8544 instruction set.
//!
//! Every instruction is a single command byte: a base opcode OR'd with its
//! argument bits. Which opcodes are valid depends on the instruction-set
//! bit (`H`) of the last function-set command:
//!
//! - basic set (`H = 0`): display control, X/Y address,
//! - extended set (`H = 1`): temperature control, bias, Vop.
//!
//! `SET_X_ADDR` and `SET_VOP` share the value `0x80`; the controller tells
//! them apart by the current instruction set.

// ---------------------------------------------------------------------------
// Function set (both instruction sets)
// ---------------------------------------------------------------------------

/// Function-set command base.
pub const FUNC_SET: u8 = 0x20;

/// Power-down bit (`PD`).
pub const POWER_DOWN: u8 = 0x04;

/// Vertical addressing bit (`V`). The driver always uses horizontal
/// addressing, which its cursor tracking relies on.
pub const VERTICAL: u8 = 0x02;

/// Extended instruction set (`H = 1`).
pub const EXTEND: u8 = 0x01;

/// Basic instruction set (`H = 0`).
pub const BASIC: u8 = 0x00;

// ---------------------------------------------------------------------------
// Basic instruction set
// ---------------------------------------------------------------------------

/// Display-control command base.
pub const DISP_CTRL: u8 = 0x08;

/// Set bank address, `0..=5`.
pub const SET_Y_ADDR: u8 = 0x40;

/// Set column address, `0..=83`.
pub const SET_X_ADDR: u8 = 0x80;

// ---------------------------------------------------------------------------
// Extended instruction set
// ---------------------------------------------------------------------------

/// Temperature-coefficient command base.
pub const TEMP_CTRL: u8 = 0x04;

/// Bias-system command base.
pub const SET_BIAS: u8 = 0x10;

/// Operating-voltage (contrast) command base.
pub const SET_VOP: u8 = 0x80;

// ---------------------------------------------------------------------------
// Contrast limits
// ---------------------------------------------------------------------------

/// Vop programmed at power-up: 3.06 V + 0.06 V × 69 ≈ 7.2 V.
pub const DEFAULT_VOP: u8 = 69;

/// Highest Vop the driver will program: 8.46 V. The datasheet asks for
/// less than 8.5 V at low temperatures.
pub const MAX_VOP: u8 = 90;

/// Lowest Vop that gives a readable image on common modules. Informational
/// only; [`Pcd8544::set_contrast`](crate::Pcd8544::set_contrast) does not
/// enforce it.
pub const MIN_USABLE_VOP: u8 = 49;

/// Operating voltage in millivolts for a Vop register value.
pub const fn vop_millivolts(level: u8) -> u32 {
    3060 + 60 * level as u32
}

// ---------------------------------------------------------------------------
// Command arguments
// ---------------------------------------------------------------------------

/// Display configuration written with `DISP_CTRL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DisplayMode {
    /// All segments off.
    Blank = 0x00,
    /// All segments on.
    AllOn = 0x01,
    /// RAM contents, set bit = dark pixel.
    Normal = 0x04,
    /// RAM contents, set bit = light pixel.
    Inverse = 0x05,
}

/// Temperature coefficient of Vop, written with `TEMP_CTRL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TempCoefficient {
    Tc0 = 0x00,
    Tc1 = 0x01,
    Tc2 = 0x02,
    Tc3 = 0x03,
}

/// LCD bias system (multiplex rate), written with `SET_BIAS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Bias {
    Bias1To100 = 0,
    Bias1To80 = 1,
    Bias1To65 = 2,
    /// Recommended for the 1:48 multiplex of an 84×48 panel.
    Bias1To48 = 3,
    Bias1To40 = 4,
    Bias1To24 = 5,
    Bias1To18 = 6,
    Bias1To10 = 7,
}
