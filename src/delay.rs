//! Blocking delays by burning CPU cycles.
//!
//! The main loop has nothing else to do while waiting, so there is no point in
//! sleeping. The millisecond timebase is not used here, as the display is
//! initialized before the timer interrupt is enabled.
use embedded_hal::delay::DelayNs;
use window_bucket_post::config;

const CYCLES_PER_MICROSECOND: u32 = config::CPU_FREQUENCY_HZ / 1_000_000;
const CYCLES_PER_MILLISECOND: u32 = config::CPU_FREQUENCY_HZ / 1_000;

/// Busy-waiting delay, accurate for the interrupt-free case. A timer interrupt
/// in between stretches the delay by its (short) execution time.
#[derive(Clone, Copy, Default)]
pub struct BusyDelay;

impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        // round up to whole microseconds, the core is too slow for more anyway
        avr_device::asm::delay_cycles(ns.div_ceil(1_000) * CYCLES_PER_MICROSECOND);
    }

    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            avr_device::asm::delay_cycles(CYCLES_PER_MILLISECOND);
        }
    }
}
