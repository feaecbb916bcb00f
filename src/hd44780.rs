//! Bit-banged driver for an HD44780 character LCD in 8-bit mode.
//!
//! The controller latches the byte on its data bus on the falling edge of the
//! enable line. The register-select line decides, whether the byte is a
//! command or a character. There is no read-back of the busy flag, instead
//! the enable pulse is held long enough for every command to complete.
use embedded_hal::delay::DelayNs;

use crate::config;
use crate::station::Station;
use crate::watcher::Display;

/// Commands understood by the controller, as far as they are used here.
pub mod command {
    /// Clear the whole display and return the cursor home.
    pub const CLEAR: u8 = 0x01;
    /// Display on, cursor shown, no blinking.
    pub const DISPLAY_ON_CURSOR_ON: u8 = 0x0E;
    /// 8-bit interface, two lines, 5x7 dots.
    pub const FUNCTION_SET_8BIT_TWO_LINES: u8 = 0x38;
    /// Move the cursor to the first column of the first row.
    pub const CURSOR_HOME_FIRST_ROW: u8 = 0x80;
}

/// Blank cells written after every message, so that a shorter message does
/// not leave the tail of a longer one on screen.
const MESSAGE_PADDING: usize = 2;

/// The two registers of the controller addressed via register-select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register {
    Command,
    Data,
}

/// The raw pins connected to the display.
pub trait Bus {
    /// Put a byte onto the 8 data lines.
    fn write_data_lines(&mut self, byte: u8);
    /// Drive the register-select line.
    fn select(&mut self, register: Register);
    /// Drive the enable line.
    fn set_enable(&mut self, high: bool);
}

/// An HD44780 display on a [`Bus`].
pub struct Lcd<B, D> {
    bus: B,
    delay: D,
}

impl<B: Bus, D: DelayNs> Lcd<B, D> {
    /// Take ownership of the bus. The display is not touched until
    /// [`Lcd::initialize()`] is called.
    pub const fn new(bus: B, delay: D) -> Self {
        Self { bus, delay }
    }

    /// Put the controller into 8-bit/two-line mode, switch the display on,
    /// clear it and move the cursor to the top-left corner.
    pub fn initialize(&mut self) {
        self.command(command::FUNCTION_SET_8BIT_TWO_LINES);
        self.command(command::DISPLAY_ON_CURSOR_ON);
        self.command(command::CLEAR);
        self.command(command::CURSOR_HOME_FIRST_ROW);
    }

    /// Send one of the [`command`]s to the controller.
    pub fn command(&mut self, command: u8) {
        self.latch(Register::Command, command);
    }

    /// Write a single character at the cursor position.
    pub fn write_char(&mut self, character: u8) {
        self.latch(Register::Data, character);
        self.delay.delay_ms(config::LCD_CHARACTER_DELAY_MS);
    }

    /// Write the characters one after the other, starting at the cursor.
    pub fn print(&mut self, text: &[u8]) {
        for &character in text {
            self.write_char(character);
        }
    }

    fn latch(&mut self, register: Register, byte: u8) {
        self.bus.write_data_lines(byte);
        self.bus.select(register);
        self.bus.set_enable(true);
        self.delay.delay_ms(config::LCD_ENABLE_PULSE_MS);
        self.bus.set_enable(false);
    }

    #[cfg(test)]
    fn into_parts(self) -> (B, D) {
        (self.bus, self.delay)
    }
}

impl<B: Bus, D: DelayNs> Display for Lcd<B, D> {
    fn clear(&mut self) {
        self.command(command::CLEAR);
    }

    fn print_message(&mut self, station: Station) {
        self.print(station.message());
        for _ in 0..MESSAGE_PADDING {
            self.write_char(b' ');
        }
    }
}
