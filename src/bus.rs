//! Serial bus capability required by the driver.
//!
//! The PCD8544 protocol needs more than "write some bytes": chip-select may
//! only be released once the clock line has fully idled, so the driver polls
//! the transmitter's status flags directly. [`SerialBus`] is that minimal
//! capability, implemented by chip-specific code that owns the peripheral
//! registers.
//!
//! For HALs that only expose [`embedded_hal::spi::SpiBus`], [`HalSpi`]
//! provides an adapter built on `write` + `flush`.

use embedded_hal::spi::{ErrorType, SpiBus};

/// Byte-oriented serial transmitter with status polling.
///
/// All methods are infallible. A transmitter that never reports an empty
/// buffer or never leaves the busy state hangs the caller; the driver has no
/// timeout.
pub trait SerialBus {
    /// Enable the transmitter.
    fn enable(&mut self);

    /// Disable the transmitter.
    fn disable(&mut self);

    /// Load one byte into the transmit buffer.
    fn transmit_byte(&mut self, byte: u8);

    /// `true` once the last byte has left the transmit buffer.
    fn is_transmit_buffer_empty(&mut self) -> bool;

    /// `true` while a transfer is still shifting out on the wire.
    fn is_busy(&mut self) -> bool;
}

impl<T: SerialBus + ?Sized> SerialBus for &mut T {
    #[inline]
    fn enable(&mut self) {
        T::enable(self)
    }

    #[inline]
    fn disable(&mut self) {
        T::disable(self)
    }

    #[inline]
    fn transmit_byte(&mut self, byte: u8) {
        T::transmit_byte(self, byte)
    }

    #[inline]
    fn is_transmit_buffer_empty(&mut self) -> bool {
        T::is_transmit_buffer_empty(self)
    }

    #[inline]
    fn is_busy(&mut self) -> bool {
        T::is_busy(self)
    }
}

// ── embedded-hal adapter ─────────────────────────────────────────────────

/// Adapts an [`embedded_hal::spi::SpiBus`] to [`SerialBus`].
///
/// `embedded-hal` SPI buses are blocking: `write` returns once the byte is
/// queued and `flush` returns once the bus is idle. The status queries map
/// onto those calls, so the driver's busy-wait loops each run exactly once.
///
/// The bus is assumed to be configured (mode 0, ≤ 4 MHz) before it is
/// handed over; [`enable`](SerialBus::enable) and
/// [`disable`](SerialBus::disable) are no-ops.
///
/// Because the driver has no failure path, bus errors are latched here.
/// The first error is kept until [`take_error()`](Self::take_error) is
/// called; later errors are dropped.
pub struct HalSpi<S: ErrorType> {
    spi: S,
    error: Option<S::Error>,
}

impl<S> HalSpi<S>
where
    S: SpiBus<u8>,
{
    /// Wrap a configured SPI bus.
    pub fn new(spi: S) -> Self {
        Self { spi, error: None }
    }

    /// Return and clear the first bus error seen since the last call.
    pub fn take_error(&mut self) -> Option<S::Error> {
        self.error.take()
    }

    /// Release the wrapped bus.
    pub fn into_inner(self) -> S {
        self.spi
    }

    fn latch(&mut self, result: Result<(), S::Error>) {
        if let Err(e) = result {
            if self.error.is_none() {
                #[cfg(feature = "defmt")]
                defmt::warn!("SPI error latched");
                self.error = Some(e);
            }
        }
    }
}

impl<S> SerialBus for HalSpi<S>
where
    S: SpiBus<u8>,
{
    fn enable(&mut self) {}

    fn disable(&mut self) {}

    fn transmit_byte(&mut self, byte: u8) {
        let result = self.spi.write(&[byte]);
        self.latch(result);
    }

    fn is_transmit_buffer_empty(&mut self) -> bool {
        true
    }

    fn is_busy(&mut self) -> bool {
        let result = self.spi.flush();
        self.latch(result);
        false
    }
}
