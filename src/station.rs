//! The post stations and the sensors watching them.
use ufmt::derive::uDebug;

/// One of the window buckets a post can be dropped into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum Station {
    Hedda,
    Tobias,
    Annik,
}

impl Station {
    /// The text shown on the LCD when post arrived at this station.
    pub const fn message(self) -> &'static [u8] {
        match self {
            Self::Hedda => b"POST FRA HEDDA!",
            Self::Tobias => b"POST FRA TOBIAS!",
            Self::Annik => b"POST FRA ANNIK!",
        }
    }
}

/// A station together with the ADC channel of the LDR below its bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub station: Station,
    pub channel: u8,
}

/// Number of stations wired to the board.
pub const STATION_COUNT: usize = 3;

/// All stations in priority order: if several sensors are dark at once, the
/// first one in this table wins.
pub const STATIONS: [Binding; STATION_COUNT] = [
    Binding {
        station: Station::Hedda,
        channel: 0,
    },
    Binding {
        station: Station::Tobias,
        channel: 1,
    },
    Binding {
        station: Station::Annik,
        channel: 2,
    },
];
