//! Hardware-independent part of the window bucket post detector.
//!
//! Three window buckets (one per family member) each sit on top of a
//! light-dependent resistor. Dropping post into a bucket pulls it down onto
//! the sensor, which then reads dark. The firmware polls the sensors, decides
//! whose bucket got post and prints the sender on a 16x2 character LCD.
//!
//! Everything in here is independent of the actual micro-controller: the
//! firmware binary plugs the ATmega328P peripherals into the traits defined
//! by these modules, while the unit tests plug in fakes.
//!
//! ```text
//!   LDR1 ── ADC0 ─┐
//!   LDR2 ── ADC1 ─┼─▶ SensorBank ─▶ PostWatcher ─▶ Lcd ─▶ PORTD, PB0 (E), PB1 (RS)
//!   LDR3 ── ADC2 ─┘                     ▲
//!                                       │ now()
//!   TIMER1_COMPA ─▶ tick() ─▶ MillisecondClock
//! ```
#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod config;
pub mod detect;
pub mod hd44780;
pub mod station;
pub mod trace;
pub mod watcher;

pub use clock::{Clock, MillisecondClock};
pub use detect::{Detector, Outcome, Thresholds};
pub use station::{Binding, Station, STATIONS, STATION_COUNT};
pub use watcher::{Display, PostWatcher, SensorBank};
