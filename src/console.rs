//! Line console task.
//!
//! The driver has no internal locking, so every call on one instance must
//! come from a single context. [`console_task`] is that context: it owns the
//! driver and prints whatever other tasks send through a [`ConsoleChannel`].
//!
//! ```ignore
//! static CONSOLE: ConsoleChannel<32, 4> = ConsoleChannel::new();
//!
//! #[embassy_executor::task]
//! async fn lcd_task(lcd: Pcd8544<MyBus, Output<'static>, Output<'static>, Output<'static>>) {
//!     console_task(lcd, &CONSOLE).await;
//! }
//!
//! // Elsewhere:
//! let mut line = heapless::String::new();
//! core::fmt::write(&mut line, format_args!("T={}C\n", temp)).ok();
//! CONSOLE.send(line).await;
//! ```

use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embedded_hal::digital::OutputPin;
use heapless::String;

use crate::bus::SerialBus;
use crate::driver::Pcd8544;

/// Queue of text for [`console_task`]: up to `DEPTH` pending messages of at
/// most `N` bytes each.
pub type ConsoleChannel<const N: usize, const DEPTH: usize> =
    Channel<CriticalSectionRawMutex, String<N>, DEPTH>;

/// Print every message received on `lines`, forever.
///
/// This is a regular `async fn`, **not** an Embassy `#[task]`, since
/// Embassy tasks cannot be generic. Wrap it in a concrete task as shown in
/// the module documentation.
///
/// Messages are passed to [`Pcd8544::print()`] unchanged, so they may carry
/// `\n`, `\r` and `\f` control codes.
pub async fn console_task<B, CS, RST, DC, const N: usize, const DEPTH: usize>(
    mut lcd: Pcd8544<B, CS, RST, DC>,
    lines: &'static ConsoleChannel<N, DEPTH>,
) where
    B: SerialBus,
    CS: OutputPin<Error = Infallible>,
    RST: OutputPin<Error = Infallible>,
    DC: OutputPin<Error = Infallible>,
{
    #[cfg(feature = "defmt")]
    defmt::info!("LCD console running");

    loop {
        let line = lines.receive().await;

        #[cfg(feature = "defmt")]
        defmt::debug!("LCD console: {} bytes", line.len());

        lcd.print(&line);
    }
}
