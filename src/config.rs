//! Compile-time configuration of the post detector.
//!
//! Nothing in here can be changed at runtime: the values are baked into the
//! firmware image.

/// The CPU clock of the ATmega328P (external 16MHz crystal).
pub const CPU_FREQUENCY_HZ: u32 = 16_000_000;

/// Prescaler applied to the CPU clock for timer/counter 1.
pub const TIMER1_PRESCALER: u32 = 8;

/// Value for the output compare register `OCR1A`, so that the compare-match
/// interrupt fires once per millisecond in CTC mode.
///
/// The counter runs from zero up to and including the compare value, hence
/// the `- 1`. A compare value of 2000 would give a period of 1.0005ms.
#[allow(clippy::cast_possible_truncation)] // 1999 fits easily
pub const TIMER1_COMPARE: u16 = (CPU_FREQUENCY_HZ / TIMER1_PRESCALER / 1000 - 1) as u16;

/// ADC readings below this value mean that the LDR is covered by a bucket.
///
/// The ADC has a resolution of 10 bits, so readings range from 0 (dark) to
/// 1023 (bright).
pub const DARKNESS_THRESHOLD: u16 = 100;

/// Uptime after which a covered sensor announces the post.
pub const CONFIRM_AFTER_MS: u32 = 5_000;

/// Uptime after which an announcement is cleared again right away.
pub const CLEAR_AFTER_MS: u32 = 10_000;

const _: () = assert!(CLEAR_AFTER_MS > CONFIRM_AFTER_MS);

/// Settle time after each ADC sample, before the next channel is muxed.
pub const SAMPLE_SETTLE_MS: u32 = 100;

/// Delay at the end of every iteration of the main loop.
pub const LOOP_DELAY_MS: u32 = 200;

/// Delay between the ADC and the LCD initialization at power-on.
pub const STARTUP_DELAY_MS: u32 = 100;

/// Length of the LCD enable pulse (both for commands and data).
pub const LCD_ENABLE_PULSE_MS: u32 = 10;

/// Additional delay after each character written to the LCD.
pub const LCD_CHARACTER_DELAY_MS: u32 = 10;

/// Baud rate of the diagnostic trace on USART0.
pub const TRACE_BAUD_RATE: u32 = 9600;

/// Baud rate register value for [`TRACE_BAUD_RATE`] in normal speed mode.
#[allow(clippy::cast_possible_truncation)] // 103 fits easily
pub const TRACE_UBRR: u16 = (CPU_FREQUENCY_HZ / 16 / TRACE_BAUD_RATE - 1) as u16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer1_fires_every_millisecond() {
        let cycles_per_interrupt = (u32::from(TIMER1_COMPARE) + 1) * TIMER1_PRESCALER;
        assert_eq!(cycles_per_interrupt, CPU_FREQUENCY_HZ / 1000);
    }

    #[test]
    fn trace_baud_rate_register() {
        assert_eq!(TRACE_UBRR, 103);
    }
}
