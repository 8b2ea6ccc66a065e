//! PCD8544 84×48 LCD driver.
//!
//! [`Pcd8544`] owns the bus and control lines, keeps a shadow of the
//! controller's RAM address pointer, and renders text with the built-in
//! 6×8 [`FONT`](crate::font::FONT). Nothing is buffered: every call is
//! on the wire before it returns.

use core::convert::Infallible;
use core::fmt;

use embedded_hal::digital::OutputPin;

use crate::bus::SerialBus;
use crate::commands::{
    DisplayMode, BASIC, DISP_CTRL, EXTEND, FUNC_SET, MAX_VOP, POWER_DOWN, SET_BIAS, SET_VOP,
    SET_X_ADDR, SET_Y_ADDR, TEMP_CTRL,
};
use crate::config::Config;
use crate::font::{glyph, FONT_HEIGHT, FONT_WIDTH};
use crate::interface::{set_level, SpiInterface, WriteType};

/// Panel width in pixels.
pub const SCREEN_WIDTH: usize = 84;
/// Panel height in pixels.
pub const SCREEN_HEIGHT: usize = 48;
/// Number of 8-pixel banks (Y addresses).
pub const BANKS: usize = SCREEN_HEIGHT / 8;
/// Character cells per text row.
pub const COLUMNS: usize = SCREEN_WIDTH / FONT_WIDTH;
/// Text rows.
pub const ROWS: usize = SCREEN_HEIGHT / FONT_HEIGHT;
/// Size of a full-screen image in display RAM layout.
pub const BITMAP_SIZE: usize = SCREEN_WIDTH * BANKS;

/// Blocking driver for a PCD8544 LCD.
///
/// # Lifecycle
///
/// 1. [`Pcd8544::new()`] — enables the bus, pulses reset, programs the
///    controller and clears the screen.
/// 2. Text via [`print()`](Self::print), [`write()`](Self::write) or
///    `core::fmt::Write`; raw pixels via [`set_pixels()`](Self::set_pixels)
///    and [`draw_bitmap()`](Self::draw_bitmap).
/// 3. Drop — disables the bus. The controller keeps its image.
///
/// The bus and pins are taken by value. Pass `&mut` references to keep
/// them owned elsewhere; `&mut B` is a [`SerialBus`] and `&mut P` an
/// [`OutputPin`] whenever `B` and `P` are.
///
/// # Concurrency
///
/// There is no internal locking. A chip-select frame must not interleave
/// with another transfer, so all calls on one instance must come from one
/// context (own it in a single task or behind a mutex).
///
/// # Example
///
/// ```no_run
/// # fn example(
/// #     spi: impl embedded_hal::spi::SpiBus,
/// #     cs: impl embedded_hal::digital::OutputPin<Error = core::convert::Infallible>,
/// #     rst: impl embedded_hal::digital::OutputPin<Error = core::convert::Infallible>,
/// #     dc: impl embedded_hal::digital::OutputPin<Error = core::convert::Infallible>,
/// # ) {
/// use pcd8544_display_rs::{HalSpi, Pcd8544};
///
/// let mut lcd = Pcd8544::new(HalSpi::new(spi), cs, rst, dc);
/// lcd.print("Hello\nworld");
/// lcd.set_contrast(60);
/// # }
/// ```
pub struct Pcd8544<B, CS, RST, DC>
where
    B: SerialBus,
    CS: OutputPin<Error = Infallible>,
    RST: OutputPin<Error = Infallible>,
    DC: OutputPin<Error = Infallible>,
{
    interface: SpiInterface<B, CS, DC>,
    /// Kept so the reset line stays owned by the driver.
    _rst: RST,
    /// Last Vop written, `<= MAX_VOP`.
    vop: u8,
    mode: DisplayMode,
    power_down: bool,
    /// Shadow of the controller's column pointer, `0..SCREEN_WIDTH`.
    x: u8,
    /// Shadow of the controller's bank pointer, `0..BANKS`.
    y: u8,
}

impl<B, CS, RST, DC> Pcd8544<B, CS, RST, DC>
where
    B: SerialBus,
    CS: OutputPin<Error = Infallible>,
    RST: OutputPin<Error = Infallible>,
    DC: OutputPin<Error = Infallible>,
{
    /// Reset and initialise the controller with [`Config::default()`], then
    /// clear the screen.
    ///
    /// # Arguments
    /// * `bus` — serial transmitter, clocks already configured
    /// * `cs` — chip enable (`SCE`), active low
    /// * `rst` — reset (`RES`), active low
    /// * `dc` — data/command select (`D/C`), low = command
    pub fn new(bus: B, cs: CS, rst: RST, dc: DC) -> Self {
        Self::with_config(bus, cs, rst, dc, Config::default())
    }

    /// Reset and initialise the controller with explicit settings, then
    /// clear the screen.
    ///
    /// `config.contrast` is clamped the same way as
    /// [`set_contrast()`](Self::set_contrast).
    pub fn with_config(bus: B, cs: CS, mut rst: RST, dc: DC, config: Config) -> Self {
        let interface = SpiInterface::new(bus, cs, dc);

        // The controller latches reset on the rising edge.
        set_level(&mut rst, false);
        set_level(&mut rst, true);

        let mut lcd = Self {
            interface,
            _rst: rst,
            vop: config.contrast.min(MAX_VOP),
            mode: config.mode,
            power_down: false,
            x: 0,
            y: 0,
        };

        lcd.command(lcd.function_set(EXTEND));
        lcd.command(SET_VOP | lcd.vop);
        lcd.command(TEMP_CTRL | config.temperature as u8);
        lcd.command(SET_BIAS | config.bias as u8);

        lcd.command(lcd.function_set(BASIC));
        lcd.command(DISP_CTRL | config.mode as u8);

        lcd.clear();

        #[cfg(feature = "defmt")]
        defmt::debug!("PCD8544 initialised: {}", config);

        lcd
    }

    // -----------------------------------------------------------------------
    // Controller settings
    // -----------------------------------------------------------------------

    /// Set the operating voltage (contrast).
    ///
    /// Levels above [`MAX_VOP`] are clamped to it. There is no lower clamp:
    /// small values give a faint or blank panel but are written as given.
    /// The address pointer is not affected.
    pub fn set_contrast(&mut self, level: u8) {
        self.vop = level.min(MAX_VOP);

        self.command(self.function_set(EXTEND));
        self.command(SET_VOP | self.vop);
        self.command(self.function_set(BASIC));

        #[cfg(feature = "defmt")]
        defmt::debug!("PCD8544 Vop = {}", self.vop);
    }

    /// Current contrast level.
    pub fn contrast(&self) -> u8 {
        self.vop
    }

    /// Select blank, all-on, normal or inverse video.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
        self.command(DISP_CTRL | mode as u8);
    }

    /// Current display mode.
    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    /// Enter or leave power-down.
    ///
    /// Display RAM is retained while powered down. The power-down bit is
    /// part of every function-set command, so it is kept set for the
    /// extended-mode round trip of later contrast changes.
    pub fn set_power_down(&mut self, power_down: bool) {
        self.power_down = power_down;
        self.command(self.function_set(BASIC));
    }

    /// `true` while the controller is powered down.
    pub fn is_powered_down(&self) -> bool {
        self.power_down
    }

    // -----------------------------------------------------------------------
    // Addressing
    // -----------------------------------------------------------------------

    /// Move to a character cell.
    ///
    /// `column` wraps modulo [`COLUMNS`], `row` modulo [`ROWS`].
    pub fn set_cursor(&mut self, column: usize, row: usize) {
        self.x = ((column % COLUMNS) * FONT_WIDTH) as u8;
        self.y = (row % ROWS) as u8;
        self.program_address();
    }

    /// Move to a pixel column and bank.
    ///
    /// `x` wraps modulo [`SCREEN_WIDTH`], `y` modulo [`BANKS`].
    pub fn set_ram_addr(&mut self, x: usize, y: usize) {
        self.x = (x % SCREEN_WIDTH) as u8;
        self.y = (y % BANKS) as u8;
        self.program_address();
    }

    /// Current `(column, bank)` of the controller's RAM pointer.
    pub fn cursor(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    /// Blank the whole panel and home the cursor.
    pub fn clear(&mut self) {
        self.set_cursor(0, 0);
        for _ in 0..BITMAP_SIZE {
            self.data(0);
        }
    }

    /// Render text, interpreting control codes.
    ///
    /// Accepts a single `char` or `u8`, or a `&str`, `&[u8]` or `&[u8; N]`
    /// (and `&heapless::String<N>` with the `task` feature).
    ///
    /// | code | action |
    /// |------|--------|
    /// | `\n` | start of the next row |
    /// | `\f` | [`clear()`](Self::clear) |
    /// | `\r` | start of the current row |
    /// | other `< 0x20`, `0x7F` | ignored |
    ///
    /// Everything else is drawn with [`write()`](Self::write). Bytes map
    /// straight to glyph codes; non-ASCII `char`s are drawn as `?`.
    pub fn print<T: Printable>(&mut self, text: T) {
        text.for_each_code(|code| self.print_code(code));
    }

    /// Draw the glyph for `code`, with no control-code handling.
    ///
    /// Sends the six glyph columns; the cursor moves six columns right,
    /// continuing on the next bank past the right edge.
    pub fn write(&mut self, code: u8) {
        for &column in glyph(code) {
            self.data(column);
        }
    }

    /// Write one column of eight pixels at the cursor. Bit 0 is the top.
    pub fn set_pixels(&mut self, pixels: u8) {
        self.data(pixels);
    }

    /// Replace the whole screen with `bitmap`.
    ///
    /// The image is in display RAM order: bank 0 columns 0..84, then bank
    /// 1, and so on. See [`Bitmap`](crate::Bitmap) for composing one.
    pub fn draw_bitmap(&mut self, bitmap: &[u8; BITMAP_SIZE]) {
        self.set_ram_addr(0, 0);
        for &pixels in bitmap {
            self.data(pixels);
        }
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn print_code(&mut self, code: u8) {
        match code {
            b'\n' => self.set_cursor(0, usize::from(self.y) + 1),
            0x0C => self.clear(),
            b'\r' => self.set_cursor(0, usize::from(self.y)),
            0x00..=0x1F | 0x7F => {}
            _ => self.write(code),
        }
    }

    fn function_set(&self, instruction_set: u8) -> u8 {
        let pd = if self.power_down { POWER_DOWN } else { 0 };
        FUNC_SET | pd | instruction_set
    }

    fn program_address(&mut self) {
        self.command(SET_X_ADDR | self.x);
        self.command(SET_Y_ADDR | self.y);
    }

    fn command(&mut self, byte: u8) {
        self.interface.send(WriteType::Command, byte);
    }

    /// Send a data byte and advance the shadow pointer the way the
    /// controller does in horizontal addressing mode.
    fn data(&mut self, byte: u8) {
        self.interface.send(WriteType::Data, byte);

        self.x += 1;
        if usize::from(self.x) == SCREEN_WIDTH {
            self.x = 0;
            self.y = (self.y + 1) % BANKS as u8;
        }
    }
}

impl<B, CS, RST, DC> Drop for Pcd8544<B, CS, RST, DC>
where
    B: SerialBus,
    CS: OutputPin<Error = Infallible>,
    RST: OutputPin<Error = Infallible>,
    DC: OutputPin<Error = Infallible>,
{
    fn drop(&mut self) {
        self.interface.disable();
    }
}

impl<B, CS, RST, DC> fmt::Write for Pcd8544<B, CS, RST, DC>
where
    B: SerialBus,
    CS: OutputPin<Error = Infallible>,
    RST: OutputPin<Error = Infallible>,
    DC: OutputPin<Error = Infallible>,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.print(c);
        Ok(())
    }
}

// ── Printable ────────────────────────────────────────────────────────────

/// Text accepted by [`Pcd8544::print()`].
pub trait Printable {
    /// Feed each character code to `f`, in order.
    fn for_each_code(self, f: impl FnMut(u8));
}

impl Printable for u8 {
    fn for_each_code(self, mut f: impl FnMut(u8)) {
        f(self)
    }
}

impl Printable for char {
    fn for_each_code(self, mut f: impl FnMut(u8)) {
        f(char_code(self))
    }
}

impl Printable for &str {
    fn for_each_code(self, f: impl FnMut(u8)) {
        self.chars().map(char_code).for_each(f)
    }
}

impl Printable for &[u8] {
    fn for_each_code(self, f: impl FnMut(u8)) {
        self.iter().copied().for_each(f)
    }
}

impl<const N: usize> Printable for &[u8; N] {
    fn for_each_code(self, f: impl FnMut(u8)) {
        self.as_slice().for_each_code(f)
    }
}

#[cfg(feature = "task")]
impl<const N: usize> Printable for &heapless::String<N> {
    fn for_each_code(self, f: impl FnMut(u8)) {
        self.as_str().for_each_code(f)
    }
}

fn char_code(c: char) -> u8 {
    if c.is_ascii() {
        c as u8
    } else {
        b'?'
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use core::fmt::Write as _;

    use super::*;
    use crate::commands::{Bias, TempCoefficient};
    use crate::font::FONT;
    use crate::mock::{self, drain, Event, Frame, Log, MockBus, MockPin};

    type Lcd = Pcd8544<MockBus, MockPin, MockPin, MockPin>;

    /// Initialised driver with an empty log.
    fn lcd() -> (Log, Lcd) {
        let (log, bus, cs, rst, dc) = mock::parts();
        let lcd = Pcd8544::new(bus, cs, rst, dc);
        log.borrow_mut().clear();
        (log, lcd)
    }

    fn addr(x: u8, y: u8) -> [Frame; 2] {
        [Frame::Command(0x80 | x), Frame::Command(0x40 | y)]
    }

    fn data_of(frames: &[Frame]) -> Vec<u8> {
        frames
            .iter()
            .map(|f| match *f {
                Frame::Data(b) => b,
                Frame::Command(c) => panic!("unexpected command {:#04x}", c),
            })
            .collect()
    }

    fn clear_frames() -> Vec<Frame> {
        let mut expected = addr(0, 0).to_vec();
        expected.extend([Frame::Data(0); BITMAP_SIZE]);
        expected
    }

    #[test]
    fn geometry() {
        assert_eq!(BANKS, 6);
        assert_eq!(COLUMNS, 14);
        assert_eq!(ROWS, 6);
        assert_eq!(BITMAP_SIZE, 504);
    }

    // ── Initialisation ───────────────────────────────────────────────

    #[test]
    fn init_pin_sequence() {
        let (log, bus, cs, rst, dc) = mock::parts();
        let _lcd = Pcd8544::new(bus, cs, rst, dc);

        let events = log.borrow();
        assert_eq!(
            events[..4],
            [Event::Enable, Event::Cs(true), Event::Rst(false), Event::Rst(true)]
        );
        // Reset is never touched again.
        assert!(!events[4..].iter().any(|e| matches!(e, Event::Rst(_))));
    }

    #[test]
    fn init_command_sequence() {
        let (log, bus, cs, rst, dc) = mock::parts();
        let lcd = Pcd8544::new(bus, cs, rst, dc);
        let frames = mock::frames(&log.borrow());

        assert_eq!(
            frames[..6],
            [
                Frame::Command(0x21),
                Frame::Command(0xC5),
                Frame::Command(0x04),
                Frame::Command(0x13),
                Frame::Command(0x20),
                Frame::Command(0x0C),
            ]
        );
        assert_eq!(frames[6..], clear_frames()[..]);
        assert_eq!(lcd.cursor(), (0, 0));
        assert_eq!(lcd.contrast(), 69);
        assert_eq!(lcd.display_mode(), DisplayMode::Normal);
    }

    #[test]
    fn init_with_config() {
        let (log, bus, cs, rst, dc) = mock::parts();
        let config = Config {
            contrast: 120,
            temperature: TempCoefficient::Tc2,
            bias: Bias::Bias1To40,
            mode: DisplayMode::Inverse,
        };
        let lcd = Pcd8544::with_config(bus, cs, rst, dc, config);
        let frames = mock::frames(&log.borrow());

        assert_eq!(
            frames[..6],
            [
                Frame::Command(0x21),
                Frame::Command(0x80 | 90),
                Frame::Command(0x06),
                Frame::Command(0x14),
                Frame::Command(0x20),
                Frame::Command(0x0D),
            ]
        );
        assert_eq!(lcd.contrast(), 90);
        assert_eq!(lcd.display_mode(), DisplayMode::Inverse);
    }

    #[test]
    fn bus_stalls_do_not_change_output() {
        let (log, bus, cs, rst, dc) = mock::parts();
        let mut lcd = Pcd8544::new(bus.with_stalls(2, 3), cs, rst, dc);
        log.borrow_mut().clear();

        lcd.print('A');
        assert_eq!(data_of(&drain(&log)), FONT[usize::from(b'A')]);
    }

    #[test]
    fn drop_disables_bus_only() {
        let (log, mut lcd) = lcd();
        lcd.print("x");
        log.borrow_mut().clear();

        drop(lcd);
        assert_eq!(*log.borrow(), [Event::Disable]);
    }

    #[test]
    fn borrowed_handles() {
        let (log, mut bus, mut cs, mut rst, mut dc) = mock::parts();
        {
            let mut lcd = Pcd8544::new(&mut bus, &mut cs, &mut rst, &mut dc);
            lcd.set_pixels(0xFF);
        }
        assert_eq!(log.borrow().last(), Some(&Event::Disable));
        // Handles are usable again once the driver is gone.
        bus.enable();
        assert_eq!(log.borrow().last(), Some(&Event::Enable));
    }

    // ── Contrast ─────────────────────────────────────────────────────

    #[test]
    fn contrast_clamps_upper_bound_only() {
        let (log, mut lcd) = lcd();
        for level in 0..=u8::MAX {
            lcd.set_contrast(level);
            let expected = level.min(90);
            assert_eq!(lcd.contrast(), expected);
            assert_eq!(
                drain(&log),
                [
                    Frame::Command(0x21),
                    Frame::Command(0x80 | expected),
                    Frame::Command(0x20),
                ]
            );
        }
    }

    #[test]
    fn contrast_keeps_cursor() {
        let (_log, mut lcd) = lcd();
        lcd.set_cursor(3, 2);
        lcd.set_contrast(50);
        assert_eq!(lcd.cursor(), (18, 2));
    }

    // ── Display mode / power-down ────────────────────────────────────

    #[test]
    fn display_modes() {
        let (log, mut lcd) = lcd();
        for (mode, byte) in [
            (DisplayMode::Blank, 0x08),
            (DisplayMode::AllOn, 0x09),
            (DisplayMode::Inverse, 0x0D),
            (DisplayMode::Normal, 0x0C),
        ] {
            lcd.set_display_mode(mode);
            assert_eq!(drain(&log), [Frame::Command(byte)]);
            assert_eq!(lcd.display_mode(), mode);
        }
    }

    #[test]
    fn power_down_bit_survives_contrast_change() {
        let (log, mut lcd) = lcd();

        lcd.set_power_down(true);
        assert!(lcd.is_powered_down());
        assert_eq!(drain(&log), [Frame::Command(0x24)]);

        lcd.set_contrast(50);
        assert_eq!(
            drain(&log),
            [
                Frame::Command(0x25),
                Frame::Command(0x80 | 50),
                Frame::Command(0x24),
            ]
        );

        lcd.set_power_down(false);
        assert_eq!(drain(&log), [Frame::Command(0x20)]);
    }

    // ── Addressing ───────────────────────────────────────────────────

    #[test]
    fn set_cursor_wraps_and_scales() {
        let (log, mut lcd) = lcd();
        for column in (0..40).chain([255, 1000, usize::MAX]) {
            for row in (0..20).chain([255, usize::MAX]) {
                lcd.set_cursor(column, row);
                let x = ((column % 14) * 6) as u8;
                let y = (row % 6) as u8;
                assert_eq!(drain(&log), addr(x, y));
                assert_eq!(lcd.cursor(), (x, y));
            }
        }
    }

    #[test]
    fn set_ram_addr_wraps() {
        let (log, mut lcd) = lcd();
        for (x, y, ex, ey) in [
            (0, 0, 0, 0),
            (83, 5, 83, 5),
            (84, 6, 0, 0),
            (100, 13, 16, 1),
            (usize::MAX, usize::MAX, (usize::MAX % 84) as u8, (usize::MAX % 6) as u8),
        ] {
            lcd.set_ram_addr(x, y);
            assert_eq!(drain(&log), addr(ex, ey));
            assert_eq!(lcd.cursor(), (ex, ey));
        }
    }

    // ── Clear ────────────────────────────────────────────────────────

    #[test]
    fn clear_blanks_full_screen() {
        let (log, mut lcd) = lcd();
        lcd.set_cursor(5, 4);
        log.borrow_mut().clear();

        lcd.clear();
        assert_eq!(drain(&log), clear_frames());
        assert_eq!(lcd.cursor(), (0, 0));
    }

    // ── write / set_pixels ───────────────────────────────────────────

    #[test]
    fn write_sends_glyph_and_advances() {
        let (log, mut lcd) = lcd();
        for code in 0..=u8::MAX {
            let before = lcd.cursor();
            lcd.write(code);
            assert_eq!(data_of(&drain(&log)), FONT[usize::from(code)]);

            let x = (before.0 + 6) % 84;
            let y = if x < before.0 { (before.1 + 1) % 6 } else { before.1 };
            assert_eq!(lcd.cursor(), (x, y));
        }
    }

    #[test]
    fn write_does_not_interpret_control_codes() {
        let (log, mut lcd) = lcd();
        lcd.write(b'\n');
        assert_eq!(data_of(&drain(&log)), FONT[0x0A]);
        assert_eq!(lcd.cursor(), (6, 0));
    }

    #[test]
    fn write_wraps_to_next_bank_and_back_to_top() {
        let (_log, mut lcd) = lcd();
        lcd.set_cursor(13, 0);
        lcd.write(b'A');
        assert_eq!(lcd.cursor(), (0, 1));

        lcd.set_cursor(13, 5);
        lcd.write(b'A');
        assert_eq!(lcd.cursor(), (0, 0));
    }

    #[test]
    fn unaligned_write_follows_controller_pointer() {
        let (_log, mut lcd) = lcd();
        lcd.set_ram_addr(80, 2);
        lcd.write(b'A');
        // Four columns on bank 2, two on bank 3.
        assert_eq!(lcd.cursor(), (2, 3));
    }

    #[test]
    fn set_pixels_advances_one_column() {
        let (log, mut lcd) = lcd();
        lcd.set_ram_addr(82, 5);
        log.borrow_mut().clear();

        lcd.set_pixels(0x81);
        assert_eq!(drain(&log), [Frame::Data(0x81)]);
        assert_eq!(lcd.cursor(), (83, 5));

        lcd.set_pixels(0x18);
        assert_eq!(lcd.cursor(), (0, 0));
    }

    // ── draw_bitmap ──────────────────────────────────────────────────

    #[test]
    fn draw_bitmap_streams_buffer_from_origin() {
        let (log, mut lcd) = lcd();
        lcd.set_cursor(7, 3);
        log.borrow_mut().clear();

        let mut bitmap = [0u8; BITMAP_SIZE];
        for (i, b) in bitmap.iter_mut().enumerate() {
            *b = (i * 7) as u8;
        }
        lcd.draw_bitmap(&bitmap);

        let frames = drain(&log);
        assert_eq!(frames[..2], addr(0, 0));
        assert_eq!(data_of(&frames[2..]), bitmap);
        assert_eq!(lcd.cursor(), (0, 0));
    }

    // ── print ────────────────────────────────────────────────────────

    #[test]
    fn print_hi() {
        let (log, bus, cs, rst, dc) = mock::parts();
        let mut lcd = Pcd8544::new(bus, cs, rst, dc);
        log.borrow_mut().clear();

        lcd.print("Hi");

        // D/C goes high before every one of the 12 transfers.
        let events = log.borrow().clone();
        let dc_high = events
            .windows(2)
            .filter(|w| *w == [Event::Dc(true), Event::Cs(false)])
            .count();
        assert_eq!(dc_high, 12);

        let data = data_of(&drain(&log));
        assert_eq!(data[..6], FONT[0x48]);
        assert_eq!(data[6..], FONT[0x69]);
        assert_eq!(lcd.cursor(), (12, 0));
    }

    #[test]
    fn newline_then_carriage_return() {
        let (log, mut lcd) = lcd();
        lcd.set_cursor(4, 2);
        log.borrow_mut().clear();

        lcd.print('\n');
        assert_eq!(drain(&log), addr(0, 3));
        lcd.print('\r');
        assert_eq!(drain(&log), addr(0, 3));
        assert_eq!(lcd.cursor(), (0, 3));
    }

    #[test]
    fn newline_on_last_row_wraps_to_top() {
        let (_log, mut lcd) = lcd();
        lcd.set_cursor(9, 5);
        lcd.print(b'\n');
        assert_eq!(lcd.cursor(), (0, 0));
    }

    #[test]
    fn carriage_return_mid_line() {
        let (_log, mut lcd) = lcd();
        lcd.set_cursor(0, 1);
        lcd.print("abc\r");
        assert_eq!(lcd.cursor(), (0, 1));
    }

    #[test]
    fn form_feed_is_clear() {
        let (log, mut lcd) = lcd();
        lcd.print("some text");
        log.borrow_mut().clear();

        lcd.print('\x0C');
        assert_eq!(drain(&log), clear_frames());
        assert_eq!(lcd.cursor(), (0, 0));
    }

    #[test]
    fn other_control_codes_are_ignored() {
        let (log, mut lcd) = lcd();
        lcd.set_cursor(2, 2);
        log.borrow_mut().clear();

        for code in (0x00..0x20u8).filter(|c| ![0x0A, 0x0C, 0x0D].contains(c)) {
            lcd.print(code);
        }
        lcd.print(0x7Fu8);
        lcd.print('\x7F');

        assert!(log.borrow().is_empty());
        assert_eq!(lcd.cursor(), (12, 2));
    }

    #[test]
    fn bytes_reach_upper_glyphs() {
        let (log, mut lcd) = lcd();
        lcd.print(&[0xDBu8, 0x80]);
        let data = data_of(&drain(&log));
        assert_eq!(data[..6], FONT[0xDB]);
        assert_eq!(data[6..], FONT[0x80]);

        lcd.print(&b"ok"[..]);
        assert_eq!(data_of(&drain(&log)).len(), 12);
    }

    #[test]
    fn non_ascii_chars_print_question_mark() {
        let (log, mut lcd) = lcd();
        lcd.print("é");
        assert_eq!(data_of(&drain(&log)), FONT[usize::from(b'?')]);
    }

    #[test]
    fn text_wraps_after_fourteen_characters() {
        let (_log, mut lcd) = lcd();
        lcd.print("0123456789abcd");
        assert_eq!(lcd.cursor(), (0, 1));
        lcd.print("e");
        assert_eq!(lcd.cursor(), (6, 1));
    }

    #[cfg(feature = "task")]
    #[test]
    fn heapless_string_prints_like_str() {
        let (log, mut lcd) = lcd();
        let line: heapless::String<8> = heapless::String::try_from("ok").unwrap();
        lcd.print(&line);
        let from_string = drain(&log);

        lcd.set_cursor(0, 0);
        log.borrow_mut().clear();
        lcd.print("ok");
        assert_eq!(from_string, drain(&log));
    }

    #[test]
    fn fmt_write_renders_formatted_text() {
        let (log, mut lcd) = lcd();
        writeln!(lcd, "{}", 42).unwrap();

        let frames = drain(&log);
        assert_eq!(data_of(&frames[..6]), FONT[usize::from(b'4')]);
        assert_eq!(data_of(&frames[6..12]), FONT[usize::from(b'2')]);
        assert_eq!(frames[12..], addr(0, 1));
    }
}
