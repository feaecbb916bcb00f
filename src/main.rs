//! Window bucket post detector
//!
//! Three family members share a house, each having a small bucket hanging in
//! the window. Whoever brings in the post for somebody else drops it into that
//! person's bucket. The weight pulls the bucket down onto a light-dependent
//! resistor (LDR), which then reads dark. This firmware watches the three LDRs
//! and tells on a character LCD from whom the post came.
//!
//! # Requirements
//! 1. three LDRs, one per station, read via the on-chip ADC
//! 2. a 16x2 character LCD (HD44780 compatible) driven in 8-bit mode
//! 3. a covered sensor is announced once the uptime exceeds 5s and the
//!    announcement is wiped again right away once it exceeds 10s (see
//!    [`window_bucket_post::detect`])
//! 4. no configuration at runtime: everything is fixed at compile time
//!
//! # MCU used
//! The firmware runs on an ATmega328P clocked from a 16MHz crystal (e.g. an
//! Arduino Uno). Timer/counter 1 generates a compare-match interrupt every
//! millisecond, which is the only interrupt in use.
//! ```ascii-drawing
//!                  ┌────╥────┐
//!     (~RESET) PC6 ━┥ 1   28 ┝━ PC5 (ADC5)
//! (RXD/LCD D0) PD0 ━┥ 2   27 ┝━ PC4 (ADC4)
//! (TXD/LCD D1) PD1 ━┥ 3   26 ┝━ PC3 (ADC3)
//!     (LCD D2) PD2 ━┥ 4   25 ┝━ PC2 (ADC2, LDR Annik)
//!     (LCD D3) PD3 ━┥ 5   24 ┝━ PC1 (ADC1, LDR Tobias)
//!     (LCD D4) PD4 ━┥ 6   23 ┝━ PC0 (ADC0, LDR Hedda)
//!              VCC ━┥ 7   22 ┝━ GND
//!              GND ━┥ 8   21 ┝━ AREF (100n to GND)
//!      (XTAL1) PB6 ━┥ 9   20 ┝━ AVCC
//!      (XTAL2) PB7 ━┥ 10  19 ┝━ PB5
//!     (LCD D5) PD5 ━┥ 11  18 ┝━ PB4
//!     (LCD D6) PD6 ━┥ 12  17 ┝━ PB3
//!     (LCD D7) PD7 ━┥ 13  16 ┝━ PB2
//!      (LCD E) PB0 ━┥ 14  15 ┝━ PB1 (LCD RS)
//!                  └─────────┘
//! ```
//! Each LDR forms a voltage divider with a fixed resistor, so that a covered
//! LDR pulls its ADC input towards ground.
//!
//! # Diagnostics
//! Debug builds print every change of the detected situation on the serial
//! port (9600 baud). Since `TXD` is shared with the display, the transmitter
//! is only enabled while a line is being sent (see [`usart`]).
#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

use avr_device::atmega328p::Peripherals;
use embedded_hal::delay::DelayNs;
use window_bucket_post::{config, hd44780::Lcd, Detector, PostWatcher, Thresholds, STATIONS};

mod adc;
mod delay;
mod lcd;
mod timer1;
mod usart;

#[avr_device::entry]
fn main() -> ! {
    // SAFETY: nothing else takes the peripherals. `take()` would return an
    // `Option`, whose unwrapping is a reachable panic (see `panic()`).
    let peripherals = unsafe { Peripherals::steal() };

    let mut delay = delay::BusyDelay;

    #[cfg(debug_assertions)]
    let mut trace = usart::Trace::new(peripherals.USART0);
    #[cfg(debug_assertions)]
    {
        let mut session = trace.session();
        let _ = ufmt::uwriteln!(session, "window-bucket-post {}", env!("CARGO_PKG_VERSION"));
    }

    let sensors = adc::Adc::new(peripherals.ADC);
    delay.delay_ms(config::STARTUP_DELAY_MS);

    let mut display = Lcd::new(
        lcd::ParallelBus::new(peripherals.PORTD, peripherals.PORTB),
        delay,
    );
    display.initialize();

    let mut timer = timer1::Timer1::new(peripherals.TC1);
    let uptime = timer.start();
    // SAFETY: the only interrupt handler (`TIMER1_COMPA`) accesses nothing but
    // the uptime counter, which is initialized statically.
    unsafe { avr_device::interrupt::enable() };

    let detector = Detector::new(STATIONS, Thresholds::DEFAULT);
    let mut watcher = PostWatcher::new(detector, sensors, uptime, display, delay);

    #[cfg(debug_assertions)]
    let mut tracer = window_bucket_post::trace::Tracer::new();
    loop {
        let outcome = watcher.poll();

        #[cfg(debug_assertions)]
        {
            use window_bucket_post::Clock;
            let _ = tracer.record(&mut trace.session(), uptime.now(), outcome);
        }
        #[cfg(not(debug_assertions))]
        let _ = outcome;
    }
}

/// The panic handler of the application.
///
/// The firmware must not panic at all, so instead of halting or resetting, the
/// handler calls a function that does not exist. As long as the optimizer can
/// prove every panic unreachable, the handler is dropped and the image links.
/// Otherwise linking fails with an error pointing at the offending line:
/// ```console
/// src/adc.rs:42:(.text.rust_begin_unwind+0x0): undefined reference to `a_panic_is_reachable'
/// ```
#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    extern "C" {
        fn a_panic_is_reachable() -> !;
    }
    // SAFETY: if this would be reachable, the code would not link
    unsafe { a_panic_is_reachable() };
}
