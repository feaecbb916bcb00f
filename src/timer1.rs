//! Configuration of the Timer/counter 1 as the millisecond timebase.
use avr_device::atmega328p::TC1;
use window_bucket_post::{config, Clock, MillisecondClock};

/// The uptime of the device. Only ever advanced by [`TIMER1_COMPA()`].
static UPTIME: MillisecondClock = MillisecondClock::new();

/// Access to the 16bit timer/counter 1 peripheral.
pub struct Timer1(TC1);
impl Timer1 {
    /// Create a new [`Timer1`] from a raw register block. The timer is
    /// configured for clear-timer-on-compare mode, but not yet running.
    pub fn new(registers: TC1) -> Self {
        registers.tccr1a.write(|w| w.wgm1().bits(0b00));
        registers
            .tccr1b
            .write(|w| w.wgm1().bits(0b01).cs1().no_clock());
        registers.ocr1a.write(|w| w.bits(config::TIMER1_COMPARE));
        Self(registers)
    }

    /// Start counting and enable the compare-match interrupt.
    ///
    /// The interrupt only fires once interrupts are enabled globally.
    pub fn start(&mut self) -> Uptime {
        self.0.tcnt1.reset();
        self.0.timsk1.write(|w| w.ocie1a().set_bit());
        self.0
            .tccr1b
            .write(|w| w.wgm1().bits(0b01).cs1().prescale_8());
        Uptime(())
    }
}

/// Read-only handle to the uptime counted by [`Timer1`].
#[derive(Clone, Copy)]
pub struct Uptime(());

impl Clock for Uptime {
    fn now(&self) -> u32 {
        UPTIME.now()
    }
}

#[allow(clippy::missing_const_for_fn)]
#[avr_device::interrupt(atmega328p)]
fn TIMER1_COMPA() {
    UPTIME.tick();
}
