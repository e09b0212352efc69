//! Opening sweep of the hands from 12 o'clock to the current time.

use crate::time::TimeSample;
use std::f64::consts::PI;
use std::time::{Duration, Instant};

pub const START_DELAY: Duration = Duration::from_millis(500);
pub const DURATION: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, Copy)]
pub struct StartupAnimation {
    started: Instant,
    target: TimeSample,
}

impl StartupAnimation {
    /// Starts at `started`, aiming at where the live clock will be once the
    /// sweep ends.
    pub fn new(started: Instant, live: TimeSample) -> Self {
        Self {
            started,
            target: live.advanced(START_DELAY + DURATION),
        }
    }

    pub fn target(&self) -> TimeSample {
        self.target
    }

    /// Linear progress in `[0, 1]`; zero during the start delay.
    pub fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        let running = elapsed.saturating_sub(START_DELAY);
        (running.as_secs_f64() / DURATION.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// The reading to draw at `now`, or `None` once the live clock takes
    /// over.
    pub fn sample_at(&self, now: Instant) -> Option<TimeSample> {
        if self.is_finished(now) {
            return None;
        }
        let eased = accelerate_decelerate(self.progress(now));
        let t = self.target;
        Some(TimeSample {
            hour: t.hour * eased,
            minute: t.minute * eased,
            second: t.second * eased,
            millis_of_minute: (t.millis_of_minute as f64 * eased) as u32,
        })
    }
}

/// Slow start, fast middle, slow finish.
fn accelerate_decelerate(t: f64) -> f64 {
    ((t + 1.0) * PI).cos() / 2.0 + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animation() -> (Instant, StartupAnimation) {
        let start = Instant::now();
        (start, StartupAnimation::new(start, TimeSample::from_hms_milli(4, 20, 10, 0)))
    }

    #[test]
    fn holds_at_zero_during_delay() {
        let (start, anim) = animation();
        let sample = anim.sample_at(start + START_DELAY / 2).unwrap();
        assert_eq!(sample, TimeSample::MIDNIGHT);
    }

    #[test]
    fn target_lands_on_live_time_after_sweep() {
        let (_, anim) = animation();
        assert_eq!(anim.target(), TimeSample::from_hms_milli(4, 20, 11, 700));
    }

    #[test]
    fn moves_monotonically_then_hands_over() {
        let (start, anim) = animation();
        let mut last = -1;
        for step in 0..=10 {
            let now = start + START_DELAY + DURATION * step / 11;
            let sample = anim.sample_at(now).unwrap();
            assert!(sample.millis_of_minute as i64 >= last);
            last = sample.millis_of_minute as i64;
        }
        assert!(anim.sample_at(start + START_DELAY + DURATION).is_none());
        assert!(anim.is_finished(start + Duration::from_secs(5)));
    }

    #[test]
    fn easing_endpoints() {
        assert!(accelerate_decelerate(0.0).abs() < 1e-12);
        assert!((accelerate_decelerate(0.5) - 0.5).abs() < 1e-12);
        assert!((accelerate_decelerate(1.0) - 1.0).abs() < 1e-12);
    }
}
