//! The polling cadence of the main loop.
//!
//! One call of [`PostWatcher::poll()`] is one iteration of the firmware's
//! superloop: sample every sensor, decide, act on the display and wait.
use embedded_hal::delay::DelayNs;

use crate::clock::Clock;
use crate::config;
use crate::detect::{Detector, Outcome};
use crate::station::Station;

/// The analog inputs the LDRs are connected to.
pub trait SensorBank {
    /// Perform a single conversion on the given channel, blocking until it
    /// completed.
    fn read(&mut self, channel: u8) -> u16;
}

/// Where the announcements end up.
pub trait Display {
    fn clear(&mut self);
    fn print_message(&mut self, station: Station);
}

pub struct PostWatcher<S, C, P, D, const N: usize> {
    detector: Detector<N>,
    sensors: S,
    clock: C,
    display: P,
    delay: D,
}

impl<S, C, P, D, const N: usize> PostWatcher<S, C, P, D, N>
where
    S: SensorBank,
    C: Clock,
    P: Display,
    D: DelayNs,
{
    pub const fn new(detector: Detector<N>, sensors: S, clock: C, display: P, delay: D) -> Self {
        Self {
            detector,
            sensors,
            clock,
            display,
            delay,
        }
    }

    /// Run one iteration and report what was decided.
    pub fn poll(&mut self) -> Outcome {
        let readings = self.sample();
        let outcome = self.detector.evaluate(&readings, &self.clock);
        self.act(outcome);
        self.delay.delay_ms(config::LOOP_DELAY_MS);
        outcome
    }

    /// Read all sensors one after the other in priority order. The single ADC
    /// gets some time to settle after every conversion.
    fn sample(&mut self) -> [u16; N] {
        let bindings = self.detector.bindings();
        let sensors = &mut self.sensors;
        let delay = &mut self.delay;
        core::array::from_fn(|i| {
            let reading = sensors.read(bindings[i].channel);
            delay.delay_ms(config::SAMPLE_SETTLE_MS);
            reading
        })
    }

    fn act(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::NoPost => self.display.clear(),
            Outcome::Pending(_) => {}
            Outcome::Announce(station) => self.display.print_message(station),
            Outcome::AnnounceAndClear(station) => {
                self.display.print_message(station);
                self.display.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::detect::Thresholds;
    use crate::station::STATIONS;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    enum Event {
        Read(u8),
        Delay(u32),
        Clear,
        Print(Station),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct Sensors {
        readings: [u16; 3],
        log: Log,
    }

    impl SensorBank for Sensors {
        fn read(&mut self, channel: u8) -> u16 {
            self.log.borrow_mut().push(Event::Read(channel));
            self.readings[usize::from(channel)]
        }
    }

    struct Uptime(Rc<Cell<u32>>);

    impl Clock for Uptime {
        fn now(&self) -> u32 {
            self.0.get()
        }
    }

    struct Screen(Log);

    impl Display for Screen {
        fn clear(&mut self) {
            self.0.borrow_mut().push(Event::Clear);
        }

        fn print_message(&mut self, station: Station) {
            self.0.borrow_mut().push(Event::Print(station));
        }
    }

    struct Delay(Log);

    impl DelayNs for Delay {
        fn delay_ns(&mut self, _ns: u32) {
            unreachable!("only whole milliseconds are waited for");
        }

        fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().push(Event::Delay(ms));
        }
    }

    struct Harness {
        watcher: PostWatcher<Sensors, Uptime, Screen, Delay, 3>,
        log: Log,
        now: Rc<Cell<u32>>,
    }

    impl Harness {
        fn new(readings: [u16; 3], now: u32) -> Self {
            let log = Log::default();
            let now = Rc::new(Cell::new(now));
            let watcher = PostWatcher::new(
                Detector::new(STATIONS, Thresholds::DEFAULT),
                Sensors {
                    readings,
                    log: log.clone(),
                },
                Uptime(now.clone()),
                Screen(log.clone()),
                Delay(log.clone()),
            );
            Self { watcher, log, now }
        }

        /// The display actions of the last iteration, without the sampling.
        fn poll(&mut self) -> (Outcome, Vec<Event>) {
            self.log.borrow_mut().clear();
            let outcome = self.watcher.poll();
            let actions = self
                .log
                .borrow()
                .iter()
                .copied()
                .filter(|event| matches!(event, Event::Clear | Event::Print(_)))
                .collect();
            (outcome, actions)
        }
    }

    #[test]
    fn samples_sequentially_then_waits() {
        let mut harness = Harness::new([500, 500, 500], 0);
        harness.watcher.poll();
        assert_eq!(
            *harness.log.borrow(),
            [
                Event::Read(0),
                Event::Delay(100),
                Event::Read(1),
                Event::Delay(100),
                Event::Read(2),
                Event::Delay(100),
                Event::Clear,
                Event::Delay(200),
            ]
        );
    }

    #[test]
    fn covered_first_sensor_prints_its_station() {
        let mut harness = Harness::new([50, 500, 500], 6000);
        assert_eq!(
            harness.poll(),
            (
                Outcome::Announce(Station::Hedda),
                vec![Event::Print(Station::Hedda)]
            )
        );
    }

    #[test]
    fn no_post_clears_the_display() {
        for now in [0, 5001, 123_456] {
            let mut harness = Harness::new([500, 500, 500], now);
            assert_eq!(harness.poll(), (Outcome::NoPost, vec![Event::Clear]));
        }
    }

    #[test]
    fn nothing_happens_before_the_confirm_time() {
        let mut harness = Harness::new([500, 500, 20], 5000);
        assert_eq!(harness.poll(), (Outcome::Pending(Station::Annik), vec![]));

        harness.now.set(5001);
        assert_eq!(
            harness.poll(),
            (
                Outcome::Announce(Station::Annik),
                vec![Event::Print(Station::Annik)]
            )
        );
    }

    #[test]
    fn clear_follows_the_message_after_the_clear_time() {
        let mut harness = Harness::new([10, 10, 10], 10_001);
        assert_eq!(
            harness.poll(),
            (
                Outcome::AnnounceAndClear(Station::Hedda),
                vec![Event::Print(Station::Hedda), Event::Clear]
            )
        );
    }

    #[test]
    fn repeated_iterations_repeat_the_action() {
        let mut harness = Harness::new([500, 42, 500], 8000);
        let first = harness.poll();
        let second = harness.poll();
        assert_eq!(first, second);
        assert_eq!(first.1, [Event::Print(Station::Tobias)]);
    }
}
