//! Interrupt-safe millisecond timebase.
//!
//! The counter is 32 bits wide, which the AVR core can only read in four
//! separate byte loads. A timer interrupt firing in between would produce a
//! torn value, therefore every access happens inside a critical section.
use core::cell::Cell;

use critical_section::Mutex;

/// Something that knows the current uptime in milliseconds.
pub trait Clock {
    /// The number of milliseconds since power-on.
    fn now(&self) -> u32;
}

/// A monotonic millisecond counter advanced by a periodic interrupt.
///
/// The intended use is a single `static` owned by the timer driver, which
/// calls [`MillisecondClock::tick()`] from its compare-match interrupt and
/// hands out [`MillisecondClock::now()`] to everyone else.
pub struct MillisecondClock {
    millis: Mutex<Cell<u32>>,
}

impl MillisecondClock {
    /// Create a clock starting at zero.
    pub const fn new() -> Self {
        Self {
            millis: Mutex::new(Cell::new(0)),
        }
    }

    /// Advance the clock by one millisecond.
    ///
    /// This is meant to be the whole body of the timer interrupt. The counter
    /// wraps after roughly 49 days.
    pub fn tick(&self) {
        critical_section::with(|cs| {
            let millis = self.millis.borrow(cs);
            millis.set(millis.get().wrapping_add(1));
        });
    }

    /// Read the counter with interrupts suppressed for the duration of the
    /// read. The previous interrupt state is restored afterwards.
    pub fn now(&self) -> u32 {
        critical_section::with(|cs| self.millis.borrow(cs).get())
    }
}

impl Default for MillisecondClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MillisecondClock {
    fn now(&self) -> u32 {
        MillisecondClock::now(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(MillisecondClock::new().now(), 0);
    }

    #[test]
    fn every_tick_counts_once() {
        let clock = MillisecondClock::new();
        for _ in 0..1234 {
            clock.tick();
        }
        assert_eq!(clock.now(), 1234);
        assert_eq!(Clock::now(&clock), 1234);
    }

    #[test]
    fn ticks_from_another_thread_are_not_lost() {
        static CLOCK: MillisecondClock = MillisecondClock::new();

        let ticker = std::thread::spawn(|| {
            for _ in 0..10_000 {
                CLOCK.tick();
            }
        });
        let mut previous = 0;
        while !ticker.is_finished() {
            let now = CLOCK.now();
            assert!(now >= previous);
            previous = now;
        }
        ticker.join().unwrap();
        assert_eq!(CLOCK.now(), 10_000);
    }

    #[test]
    fn wraps_instead_of_trapping() {
        let clock = MillisecondClock::new();
        critical_section::with(|cs| clock.millis.borrow(cs).set(u32::MAX));
        clock.tick();
        assert_eq!(clock.now(), 0);
    }
}
