//! The pins the HD44780 display is connected to.
//!
//! All eight data lines `D0..D7` of the display are connected to `PORTD`, the
//! control lines to `PORTB`:
//! - `PB0`: enable strobe (`E`)
//! - `PB1`: register select (`RS`, low for commands, high for characters)
//!
//! The R/W line of the display is tied to ground, so the display is never
//! read from.

use avr_device::atmega328p::{PORTB, PORTD};
use window_bucket_post::hd44780::{Bus, Register};

pub struct ParallelBus {
    data: PORTD,
    control: PORTB,
}

impl ParallelBus {
    /// Switch all pins used by the display to outputs, with the enable line
    /// low.
    pub fn new(data: PORTD, control: PORTB) -> Self {
        // SAFETY: every bit pattern is a valid pin configuration
        data.ddrd.write(|w| unsafe { w.bits(0xFF) });
        control.portb.modify(|_, w| w.pb0().clear_bit());
        control
            .ddrb
            .modify(|_, w| w.pb0().set_bit().pb1().set_bit());
        Self { data, control }
    }
}

impl Bus for ParallelBus {
    fn write_data_lines(&mut self, byte: u8) {
        // SAFETY: every bit pattern is a valid output level
        self.data.portd.write(|w| unsafe { w.bits(byte) });
    }

    fn select(&mut self, register: Register) {
        let data = register == Register::Data;
        self.control.portb.modify(|_, w| w.pb1().bit(data));
    }

    fn set_enable(&mut self, high: bool) {
        self.control.portb.modify(|_, w| w.pb0().bit(high));
    }
}
