//! Diagnostic trace of the decisions taken by the main loop.
//!
//! Writing to the serial port is slow (about 1ms per character at 9600 baud),
//! so only changes of the outcome are reported, not every single iteration.
use ufmt::{uWrite, uwriteln};

use crate::detect::Outcome;

/// Remembers the last reported outcome.
#[derive(Default)]
pub struct Tracer {
    last: Option<Outcome>,
}

impl Tracer {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Write a line for `outcome`, unless it is the same as last time.
    pub fn record<W: uWrite + ?Sized>(
        &mut self,
        out: &mut W,
        uptime_ms: u32,
        outcome: Outcome,
    ) -> Result<(), W::Error> {
        if self.last == Some(outcome) {
            return Ok(());
        }
        self.last = Some(outcome);
        uwriteln!(out, "[{} ms] {:?}", uptime_ms, outcome)
    }
}

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::station::Station;

    #[derive(Default)]
    struct Buffer(String);

    impl uWrite for Buffer {
        type Error = Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    #[test]
    fn reports_only_changes() {
        let mut tracer = Tracer::new();
        let mut out = Buffer::default();
        for (uptime, outcome) in [
            (500, Outcome::NoPost),
            (1000, Outcome::NoPost),
            (1500, Outcome::Pending(Station::Annik)),
            (6000, Outcome::Announce(Station::Annik)),
            (6500, Outcome::Announce(Station::Annik)),
            (7000, Outcome::NoPost),
        ] {
            tracer.record(&mut out, uptime, outcome).unwrap();
        }
        assert_eq!(
            out.0,
            "[500 ms] NoPost\n\
             [1500 ms] Pending(Annik)\n\
             [6000 ms] Announce(Annik)\n\
             [7000 ms] NoPost\n"
        );
    }
}
