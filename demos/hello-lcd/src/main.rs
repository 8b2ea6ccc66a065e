//! Hello LCD demo
//!
//! Standalone hardware check for [`Pcd8544`]: shows a splash image composed
//! with `embedded-graphics`, then a text screen with a running counter, and
//! sweeps the contrast so a badly tuned module is still readable at some
//! point in the cycle.
//!
//! # Wiring
//!
//! | Signal   | Pico 2 Pin | Notes            |
//! |----------|------------|------------------|
//! | SPI0 SCK | GP18       | `CLK`            |
//! | SPI0 TX  | GP19       | `DIN`            |
//! | CS       | GP17       | `SCE`, active low |
//! | D/C      | GP16       | low = command    |
//! | RST      | GP20       | active low       |
//! | LCD VCC  | 3V3        |                  |
//! | LCD GND  | GND        |                  |

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};

use pcd8544_display_rs::{Bitmap, HalSpi, Pcd8544};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// The PCD8544 is rated for 4 MHz serial clock.
const SPI_FREQUENCY_HZ: u32 = 4_000_000;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Hello LCD demo starting");

    let mut config = spi::Config::default();
    config.frequency = SPI_FREQUENCY_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, config);

    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let rst = Output::new(p.PIN_20, Level::High);

    let mut lcd = Pcd8544::new(HalSpi::new(spi), cs, rst, dc);
    info!("LCD initialised");

    // --- Splash: frame and a circle, composed off-screen ---
    let mut splash = Bitmap::new();
    Rectangle::new(Point::zero(), splash.size())
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(&mut splash)
        .ok();
    Circle::new(Point::new(26, 8), 32)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(&mut splash)
        .ok();
    lcd.draw_bitmap(splash.as_bytes());

    Timer::after(Duration::from_secs(2)).await;

    // --- Text screen ---
    lcd.print("\x0CHello, PCD8544\n");
    lcd.print("84x48 / 14x6\n");

    let mut count: u32 = 0;
    let mut contrast: u8 = 49;

    loop {
        lcd.set_cursor(0, 3);
        write!(lcd, "count {:>8}", count).ok();
        let vop = lcd.contrast();
        lcd.set_cursor(0, 5);
        write!(lcd, "Vop {:>3}", vop).ok();

        count = count.wrapping_add(1);
        if count % 10 == 0 {
            contrast = if contrast >= 90 { 49 } else { contrast + 1 };
            lcd.set_contrast(contrast);
        }

        Timer::after(Duration::from_millis(100)).await;
    }
}
