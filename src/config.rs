//! Controller initialisation settings.

use crate::commands::{Bias, DisplayMode, TempCoefficient, DEFAULT_VOP};

/// Values programmed by [`Pcd8544::with_config()`](crate::Pcd8544::with_config).
///
/// [`Config::default()`] reproduces the stock power-up sequence: Vop 69
/// (≈ 7.2 V), temperature coefficient 0, bias 1:48, normal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Vop register value. Values above
    /// [`MAX_VOP`](crate::commands::MAX_VOP) are clamped.
    pub contrast: u8,
    /// Temperature coefficient of Vop.
    pub temperature: TempCoefficient,
    /// Bias system.
    pub bias: Bias,
    /// Display mode selected at the end of initialisation.
    pub mode: DisplayMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contrast: DEFAULT_VOP,
            temperature: TempCoefficient::Tc0,
            bias: Bias::Bias1To48,
            mode: DisplayMode::Normal,
        }
    }
}
