//! Diagnostic output on USART0 (`TXD` on PD1, 9600 baud, 8N1).
//!
//! PD1 doubles as data line `D1` of the display. While the transmitter is
//! enabled, it overrides the port register on that pin, which would corrupt
//! every byte sent to the display. Therefore the transmitter is only switched
//! on for the lifetime of a [`Session`], during which the display is never
//! written to (and would not latch anything anyway, as its enable line stays
//! low).
use core::convert::Infallible;

use avr_device::atmega328p::USART0;
use window_bucket_post::config;

/// Access to the USART0 peripheral, used transmit-only.
pub struct Trace(USART0);
impl Trace {
    pub fn new(registers: USART0) -> Self {
        registers.ubrr0.write(|w| w.bits(config::TRACE_UBRR));
        registers.ucsr0c.write(|w| {
            w.umsel0()
                .usart_async()
                .ucsz0()
                .chr8()
                .usbs0()
                .stop1()
                .upm0()
                .disabled()
        });
        registers.ucsr0b.reset();
        Self(registers)
    }

    /// Hand PD1 over to the transmitter until the returned session is dropped.
    pub fn session(&mut self) -> Session<'_> {
        self.0.ucsr0b.write(|w| w.txen0().set_bit());
        Session {
            usart: &self.0,
            sent: false,
        }
    }
}

/// The transmitter owns PD1 while this is alive.
pub struct Session<'a> {
    usart: &'a USART0,
    sent: bool,
}

impl ufmt::uWrite for Session<'_> {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            while self.usart.ucsr0a.read().udre0().bit_is_clear() {}
            // writing a one clears the transmit-complete flag
            self.usart.ucsr0a.modify(|_, w| w.txc0().set_bit());
            self.usart.udr0.write(|w| w.bits(byte));
            self.sent = true;
        }
        Ok(())
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        // the last byte has to leave the shift register before PD1 is released
        if self.sent {
            while self.usart.ucsr0a.read().txc0().bit_is_clear() {}
        }
        self.usart.ucsr0b.reset();
    }
}
