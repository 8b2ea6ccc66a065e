//! Command/data framing over the serial bus.
//!
//! Every byte the controller receives is a separate chip-select frame with
//! the D/C line selecting how it is interpreted. This module is
//! crate-private; consumers use [`Pcd8544`](crate::Pcd8544).

use core::convert::Infallible;
use core::hint::spin_loop;

use embedded_hal::digital::OutputPin;

use crate::bus::SerialBus;

/// How the controller interprets a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WriteType {
    /// D/C low: instruction.
    Command,
    /// D/C high: display RAM data.
    Data,
}

/// Drive an infallible output pin.
pub(crate) fn set_level<P>(pin: &mut P, high: bool)
where
    P: OutputPin<Error = Infallible>,
{
    let result = if high { pin.set_high() } else { pin.set_low() };
    match result {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

/// Bus plus the chip-select and D/C lines.
pub(crate) struct SpiInterface<B, CS, DC> {
    bus: B,
    cs: CS,
    dc: DC,
}

impl<B, CS, DC> SpiInterface<B, CS, DC>
where
    B: SerialBus,
    CS: OutputPin<Error = Infallible>,
    DC: OutputPin<Error = Infallible>,
{
    /// Enable the bus and park chip-select high.
    pub fn new(mut bus: B, mut cs: CS, dc: DC) -> Self {
        bus.enable();
        set_level(&mut cs, true);
        Self { bus, cs, dc }
    }

    /// Send one framed byte.
    ///
    /// 1. D/C low for a command, high for data
    /// 2. Chip-select low
    /// 3. Transmit, wait for the buffer to drain, then wait for the bus to
    ///    go idle
    /// 4. Chip-select high
    ///
    /// Chip-select must not rise while the clock is still running, hence
    /// the second wait. There is no timeout.
    pub fn send(&mut self, kind: WriteType, byte: u8) {
        set_level(&mut self.dc, kind == WriteType::Data);
        set_level(&mut self.cs, false);

        self.bus.transmit_byte(byte);
        while !self.bus.is_transmit_buffer_empty() {
            spin_loop();
        }
        while self.bus.is_busy() {
            spin_loop();
        }

        set_level(&mut self.cs, true);
    }

    /// Disable the bus. The pins are left as they are.
    pub fn disable(&mut self) {
        self.bus.disable();
    }
}
