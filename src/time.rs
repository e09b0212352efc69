use chrono::{Local, Timelike};
use std::time::Duration;

const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_HALF_DAY: u64 = 12 * 60 * MILLIS_PER_MINUTE;

/// Wall-clock reading used for one render pass.
///
/// `hour` is on a 12 hour dial. The fractional fields exist so the startup
/// animation can sweep through them; live samples hold whole values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSample {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
    pub millis_of_minute: u32,
}

impl TimeSample {
    pub const MIDNIGHT: TimeSample = TimeSample {
        hour: 0.0,
        minute: 0.0,
        second: 0.0,
        millis_of_minute: 0,
    };

    pub fn from_hms_milli(hour: u32, minute: u32, second: u32, milli: u32) -> Self {
        let second = second.min(59);
        Self {
            hour: (hour % 12) as f64,
            minute: minute.min(59) as f64,
            second: second as f64,
            millis_of_minute: second * 1000 + milli.min(999),
        }
    }

    pub fn from_time<T: Timelike>(time: &T) -> Self {
        // Leap seconds show up as nanosecond values past one second.
        Self::from_hms_milli(
            time.hour(),
            time.minute(),
            time.second(),
            time.nanosecond() / 1_000_000,
        )
    }

    /// Milliseconds since the top of the 12 hour dial, ignoring any
    /// fractional part of hour and minute.
    pub fn millis_of_half_day(&self) -> u64 {
        let hours = self.hour.trunc() as u64 % 12;
        let minutes = self.minute.trunc() as u64 % 60;
        (hours * 60 + minutes) * MILLIS_PER_MINUTE + self.millis_of_minute as u64 % MILLIS_PER_MINUTE
    }

    pub fn from_millis_of_half_day(millis: u64) -> Self {
        let millis = millis % MILLIS_PER_HALF_DAY;
        let minutes = millis / MILLIS_PER_MINUTE;
        let millis_of_minute = (millis % MILLIS_PER_MINUTE) as u32;
        Self {
            hour: (minutes / 60) as f64,
            minute: (minutes % 60) as f64,
            second: (millis_of_minute / 1000) as f64,
            millis_of_minute,
        }
    }

    /// The reading `by` later, carried across seconds, minutes and hours.
    pub fn advanced(&self, by: Duration) -> Self {
        Self::from_millis_of_half_day(self.millis_of_half_day() + by.as_millis() as u64)
    }
}

/// Source of wall-clock readings.
pub trait ClockSource {
    fn sample(&self) -> TimeSample;
}

/// Local time of the host system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn sample(&self) -> TimeSample {
        TimeSample::from_time(&Local::now())
    }
}

/// A clock frozen at one reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub TimeSample);

impl ClockSource for FixedClock {
    fn sample(&self) -> TimeSample {
        self.0
    }
}
