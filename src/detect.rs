//! Deciding which station (if any) received post.
//!
//! The decision is a pure function of the sensor readings and the clock, so
//! it can be made (and tested) independently of the hardware.
use ufmt::derive::uDebug;

use crate::clock::Clock;
use crate::config;
use crate::station::{Binding, Station};

/// The fixed limits the readings and the uptime are compared against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Thresholds {
    /// Readings strictly below this value count as dark.
    pub darkness: u16,
    /// Uptime which has to be exceeded before post is announced.
    pub confirm_ms: u32,
    /// Uptime which, once exceeded, clears the announcement right after
    /// printing it.
    pub clear_ms: u32,
}

impl Thresholds {
    /// The limits from [`config`].
    pub const DEFAULT: Self = Self {
        darkness: config::DARKNESS_THRESHOLD,
        confirm_ms: config::CONFIRM_AFTER_MS,
        clear_ms: config::CLEAR_AFTER_MS,
    };

    /// Whether a reading means the sensor is covered.
    pub const fn is_dark(&self, reading: u16) -> bool {
        reading < self.darkness
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What a single iteration of the main loop decided to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum Outcome {
    /// No sensor is covered: the display gets cleared.
    NoPost,
    /// A sensor is covered, but the confirm time has not passed yet. Nothing
    /// is shown and nothing is cleared.
    Pending(Station),
    /// The message of the station is printed.
    Announce(Station),
    /// The message of the station is printed and the display is cleared
    /// immediately afterwards.
    AnnounceAndClear(Station),
}

/// First-match-wins evaluation of a fixed table of stations.
pub struct Detector<const N: usize> {
    bindings: [Binding; N],
    thresholds: Thresholds,
}

impl<const N: usize> Detector<N> {
    /// Create a detector for the given stations, listed in priority order.
    pub const fn new(bindings: [Binding; N], thresholds: Thresholds) -> Self {
        Self {
            bindings,
            thresholds,
        }
    }

    /// The stations in priority order, e.g. to know which channels to sample.
    pub const fn bindings(&self) -> &[Binding; N] {
        &self.bindings
    }

    /// Decide on the outcome for one set of readings.
    ///
    /// `readings[i]` belongs to `bindings[i]`. The clock is only consulted if
    /// some sensor is dark, and the value read is the absolute uptime at this
    /// moment. No start-of-darkness timestamp is kept between calls, so the
    /// thresholds effectively compare against the time since power-on.
    pub fn evaluate(&self, readings: &[u16; N], clock: &impl Clock) -> Outcome {
        let Some(binding) = self
            .bindings
            .iter()
            .zip(readings)
            .find_map(|(binding, &reading)| self.thresholds.is_dark(reading).then_some(binding))
        else {
            return Outcome::NoPost;
        };

        // clearing is only ever considered for an announced station
        let time_dark = clock.now();
        if time_dark <= self.thresholds.confirm_ms {
            Outcome::Pending(binding.station)
        } else if time_dark > self.thresholds.clear_ms {
            Outcome::AnnounceAndClear(binding.station)
        } else {
            Outcome::Announce(binding.station)
        }
    }
}
