use crate::config::{Color, StyleConfig};
use crate::dirty::{DirtyRegion, Rect};
use crate::face::FacePainter;
use crate::layout::{measure, min_size_px, LayoutGeometry, MeasureSpec};
use crate::scene::{DrawCommand, Scene};
use crate::startup::StartupAnimation;
use crate::text::TextMeasure;
use crate::time::{ClockSource, TimeSample};
use log::{debug, trace};
use std::time::Instant;

/// Output of one render pass.
#[derive(Debug)]
pub struct Frame {
    pub scene: Scene,
    /// Area the scene must be rasterized into, `None` for the whole frame.
    pub clip: Option<Rect>,
    /// Area the next pass has to repaint.
    pub damage: Rect,
    pub sample: TimeSample,
}

/// Render state of one clock, independent of any windowing system.
pub struct ClockFace<C> {
    style: StyleConfig,
    clock: C,
    background: Color,
    startup: Option<StartupAnimation>,
    geometry: LayoutGeometry,
    density: f32,
    dirty: DirtyRegion,
    /// Area covered by the hand strokes of the previous pass.
    last_hands: Option<Rect>,
}

impl<C: ClockSource> ClockFace<C> {
    pub fn new(style: StyleConfig, clock: C) -> Self {
        let min = min_size_px(1.0);
        Self {
            style,
            clock,
            background: Color::WHITE,
            startup: None,
            geometry: measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified, min),
            density: 1.0,
            dirty: DirtyRegion::default(),
            last_hands: None,
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Plays the opening sweep starting at `now`.
    pub fn with_startup_animation(mut self, now: Instant) -> Self {
        let startup = StartupAnimation::new(now, self.clock.sample());
        debug!("startup sweep towards {:?}", startup.target());
        self.startup = Some(startup);
        self
    }

    /// Recomputes the layout square. The next pass repaints everything.
    pub fn measure(&mut self, width: MeasureSpec, height: MeasureSpec, density: f32) -> LayoutGeometry {
        self.density = density;
        self.geometry = measure(width, height, min_size_px(density));
        self.invalidate();
        debug!("measured clock face: {:?}", self.geometry);
        self.geometry
    }

    /// Forces the next pass to repaint the whole frame.
    pub fn invalidate(&mut self) {
        self.last_hands = None;
    }

    fn sample(&mut self, now: Instant) -> TimeSample {
        if let Some(startup) = self.startup {
            match startup.sample_at(now) {
                Some(sample) => return sample,
                None => {
                    debug!("startup animation finished");
                    self.startup = None;
                }
            }
        }
        self.clock.sample()
    }

    /// How far past its centre line the widest hand stroke reaches,
    /// including the anti-aliased fringe.
    fn stroke_reach(&self) -> i32 {
        let style = &self.style;
        let widest = [
            style.hourly_hand_width,
            style.minute_hand_width,
            style.seconds_hand_width,
        ]
        .iter()
        .map(|w| w.to_px(self.density))
        .fold(0.0f32, f32::max);
        (widest / 2.0).ceil() as i32 + 1
    }

    /// Builds the scene for the pass at `now`. The clip covers both the
    /// previous and the current hands so stale pixels get overwritten.
    pub fn frame(&mut self, now: Instant, text: &dyn TextMeasure, numerals: bool) -> Frame {
        let sample = self.sample(now);
        let metrics = text.metrics(self.style.number_text_size.to_px(self.density));
        let painter = FacePainter::new(&self.style, &self.geometry, self.density, metrics);

        let mut scene = Scene::new();
        scene.add_command(DrawCommand::Clear(self.background));
        painter.paint_face(&mut scene);
        if numerals {
            painter.paint_numbers(&mut scene);
        }
        painter.paint_hands(&mut scene, &sample, &mut self.dirty);

        let dirty = self.dirty.take();
        let (cx, cy) = (self.geometry.cx, self.geometry.cy);
        let margin = self.style.hourly_marks_width.to_px(self.density) as i32;
        let damage = dirty.to_damage(cx, cy, margin);
        let hands = dirty.to_damage(cx, cy, margin.max(self.stroke_reach()));
        let clip = self.last_hands.map(|previous| previous.union(hands));
        self.last_hands = Some(hands);
        trace!("pass at {sample:?}: clip {clip:?}, next damage {damage:?}");

        Frame {
            scene,
            clip,
            damage,
            sample,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::ApproximateMetrics;
    use crate::time::FixedClock;
    use std::cell::Cell;
    use std::time::Duration;

    struct SteppingClock {
        millis: Cell<u64>,
    }

    impl ClockSource for SteppingClock {
        fn sample(&self) -> TimeSample {
            let now = self.millis.get();
            self.millis.set(now + 15_000);
            TimeSample::from_millis_of_half_day(now)
        }
    }

    fn face<C: ClockSource>(clock: C) -> ClockFace<C> {
        let mut face = ClockFace::new(StyleConfig::default(), clock);
        face.measure(MeasureSpec::Exactly(200), MeasureSpec::Exactly(200), 1.0);
        face
    }

    #[test]
    fn first_pass_and_resize_repaint_everything() {
        let mut face = face(FixedClock(TimeSample::from_hms_milli(3, 0, 0, 0)));
        let now = Instant::now();
        assert!(face.frame(now, &ApproximateMetrics, false).clip.is_none());
        assert!(face.frame(now, &ApproximateMetrics, false).clip.is_some());
        face.measure(MeasureSpec::Exactly(300), MeasureSpec::Exactly(300), 1.0);
        assert!(face.frame(now, &ApproximateMetrics, false).clip.is_none());
    }

    #[test]
    fn damage_covers_hands_with_margin() {
        let mut face = face(FixedClock(TimeSample::from_hms_milli(3, 0, 0, 0)));
        let frame = face.frame(Instant::now(), &ApproximateMetrics, false);
        // Hour hand points right, minute and second hands point up.
        assert_eq!(frame.damage.left, 100 - 3);
        assert_eq!(frame.damage.top, 0 - 3);
        assert!(frame.damage.right > 100);
        assert_eq!(frame.damage.bottom, 100 + 3);
    }

    #[test]
    fn clip_unions_previous_and_current_damage() {
        let mut face = face(SteppingClock { millis: Cell::new(0) });
        let now = Instant::now();
        let first = face.frame(now, &ApproximateMetrics, false);
        let second = face.frame(now, &ApproximateMetrics, false);
        let both = first.damage.union(second.damage);
        let clip = second.clip.unwrap();
        assert!(clip.contains(both.left, both.top));
        assert!(clip.contains(both.right, both.bottom));
    }

    #[test]
    fn clip_reaches_past_thick_hand_strokes() {
        let style = StyleConfig::builder()
            .hourly_hand_width(crate::config::Length::Px(14.0))
            .build();
        let mut face = ClockFace::new(style, FixedClock(TimeSample::from_hms_milli(3, 0, 0, 0)));
        face.measure(MeasureSpec::Exactly(200), MeasureSpec::Exactly(200), 1.0);
        let now = Instant::now();
        face.frame(now, &ApproximateMetrics, false);
        let frame = face.frame(now, &ApproximateMetrics, false);

        // Damage keeps the mark-width margin; the clip covers the 7px half stroke.
        assert_eq!(frame.damage.bottom, 100 + 3);
        let clip = frame.clip.unwrap();
        assert_eq!(clip.bottom, 100 + 8);
        assert_eq!(clip.left, 100 - 8);
    }

    #[test]
    fn startup_animation_yields_to_live_clock() {
        let live = TimeSample::from_hms_milli(9, 15, 30, 0);
        let start = Instant::now();
        let mut face = face(FixedClock(live)).with_startup_animation(start);

        let early = face.frame(start, &ApproximateMetrics, false);
        assert_eq!(early.sample, TimeSample::MIDNIGHT);

        let late = face.frame(start + Duration::from_secs(3), &ApproximateMetrics, false);
        assert_eq!(late.sample, live);
    }

    #[test]
    fn numerals_are_optional() {
        let mut face = face(FixedClock(TimeSample::MIDNIGHT));
        let count_text = |frame: &Frame| {
            frame
                .scene
                .commands()
                .iter()
                .filter(|c| matches!(c, DrawCommand::Text { .. }))
                .count()
        };
        let now = Instant::now();
        assert_eq!(count_text(&face.frame(now, &ApproximateMetrics, false)), 0);
        assert_eq!(count_text(&face.frame(now, &ApproximateMetrics, true)), 12);
    }
}
