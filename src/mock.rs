//! Recording bus and pins for unit tests.

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin};

use crate::bus::SerialBus;

/// One observable hardware action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Enable,
    Disable,
    Tx(u8),
    Cs(bool),
    Rst(bool),
    Dc(bool),
}

/// A byte as the controller sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Command(u8),
    Data(u8),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub struct MockBus {
    log: Log,
    stall_empty: usize,
    stall_busy: usize,
    pending_empty: usize,
    pending_busy: usize,
    polls: Rc<Cell<(usize, usize)>>,
}

impl MockBus {
    /// Report "not empty" `empty` times and "busy" `busy` times after each
    /// byte before going idle.
    pub fn with_stalls(mut self, empty: usize, busy: usize) -> Self {
        self.stall_empty = empty;
        self.stall_busy = busy;
        self
    }

    /// Shared `(empty polls, busy polls)` counter.
    pub fn polls(&self) -> Rc<Cell<(usize, usize)>> {
        Rc::clone(&self.polls)
    }
}

impl SerialBus for MockBus {
    fn enable(&mut self) {
        self.log.borrow_mut().push(Event::Enable);
    }

    fn disable(&mut self) {
        self.log.borrow_mut().push(Event::Disable);
    }

    fn transmit_byte(&mut self, byte: u8) {
        self.log.borrow_mut().push(Event::Tx(byte));
        self.pending_empty = self.stall_empty;
        self.pending_busy = self.stall_busy;
    }

    fn is_transmit_buffer_empty(&mut self) -> bool {
        let (e, b) = self.polls.get();
        self.polls.set((e + 1, b));
        if self.pending_empty > 0 {
            self.pending_empty -= 1;
            false
        } else {
            true
        }
    }

    fn is_busy(&mut self) -> bool {
        let (e, b) = self.polls.get();
        self.polls.set((e, b + 1));
        if self.pending_busy > 0 {
            self.pending_busy -= 1;
            true
        } else {
            false
        }
    }
}

pub struct MockPin {
    log: Log,
    event: fn(bool) -> Event,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push((self.event)(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.log.borrow_mut().push((self.event)(true));
        Ok(())
    }
}

/// `(log, bus, cs, rst, dc)` sharing one event log.
pub fn parts() -> (Log, MockBus, MockPin, MockPin, MockPin) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let bus = MockBus {
        log: Rc::clone(&log),
        stall_empty: 0,
        stall_busy: 0,
        pending_empty: 0,
        pending_busy: 0,
        polls: Rc::new(Cell::new((0, 0))),
    };
    let pin = |event: fn(bool) -> Event| MockPin {
        log: Rc::clone(&log),
        event,
    };
    let (cs, rst, dc) = (pin(Event::Cs), pin(Event::Rst), pin(Event::Dc));
    (log, bus, cs, rst, dc)
}

/// Decode the log into controller frames.
///
/// Panics if a byte is sent outside a chip-select window or if two bytes
/// share one window.
pub fn frames(events: &[Event]) -> Vec<Frame> {
    let mut out = Vec::new();
    let mut dc = false;
    let mut selected = false;
    let mut sent_in_window = false;

    for event in events {
        match *event {
            Event::Dc(level) => {
                assert!(!selected, "D/C changed inside a chip-select window");
                dc = level;
            }
            Event::Cs(false) => {
                selected = true;
                sent_in_window = false;
            }
            Event::Cs(true) => selected = false,
            Event::Tx(byte) => {
                assert!(selected, "byte {:#04x} sent with chip-select high", byte);
                assert!(!sent_in_window, "two bytes in one chip-select window");
                sent_in_window = true;
                out.push(if dc { Frame::Data(byte) } else { Frame::Command(byte) });
            }
            Event::Enable | Event::Disable | Event::Rst(_) => {}
        }
    }
    out
}

/// Decode and clear the log.
pub fn drain(log: &Log) -> Vec<Frame> {
    let out = frames(&log.borrow());
    log.borrow_mut().clear();
    out
}
