//! Hand angles in screen radians: 0 points at 3 o'clock and angles grow
//! clockwise because y grows downward.

use crate::time::TimeSample;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn from_sample(sample: &TimeSample) -> Self {
        Self {
            hour: hour_angle(sample.hour, sample.minute, sample.second),
            minute: minute_angle(sample.minute, sample.second),
            second: second_angle(sample.millis_of_minute),
        }
    }
}

/// The hour hand creeps with every minute and second.
pub fn hour_angle(hour: f64, minute: f64, second: f64) -> f64 {
    (hour - 3.0) * PI / 6.0 + minute * PI / 360.0 + second * PI / 21600.0
}

pub fn minute_angle(minute: f64, second: f64) -> f64 {
    (minute - 15.0) * PI / 30.0 + second * PI / 1800.0
}

/// Sweeps continuously with the millisecond count rather than ticking.
pub fn second_angle(millis_of_minute: u32) -> f64 {
    (millis_of_minute as f64 - 15000.0) * PI / 30000.0
}

/// Point at `radius` along `angle`, relative to the face center.
pub fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}
