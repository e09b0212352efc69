use crate::angles::{hour_angle, polar, HandAngles};
use crate::config::{Length, StyleConfig};
use crate::dirty::DirtyRegion;
use crate::layout::LayoutGeometry;
use crate::scene::{DrawCommand, Hand, Mark, Scene};
use crate::text::TextMetrics;
use crate::time::TimeSample;

/// Lengths of the three hands in pixels, measured from the face center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandLengths {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

/// Emits the draw commands for one clock face inside a layout square.
pub struct FacePainter<'a> {
    style: &'a StyleConfig,
    cx: i32,
    cy: i32,
    r: i32,
    density: f32,
    metrics: TextMetrics,
}

impl<'a> FacePainter<'a> {
    pub fn new(
        style: &'a StyleConfig,
        geometry: &LayoutGeometry,
        density: f32,
        metrics: TextMetrics,
    ) -> Self {
        Self {
            style,
            cx: geometry.cx,
            cy: geometry.cy,
            r: geometry.radius(),
            density,
            metrics,
        }
    }

    fn px(&self, length: Length) -> f32 {
        length.to_px(self.density)
    }

    /// Point `radius` pixels out from the center along `angle`, in frame
    /// coordinates.
    fn at(&self, radius: f64, angle: f64) -> (f32, f32) {
        let (x, y) = polar(radius, angle);
        ((self.cx as f64 + x) as f32, (self.cy as f64 + y) as f32)
    }

    pub fn hand_lengths(&self) -> HandLengths {
        let r = self.r as f32;
        let style = self.style;
        let hour = r
            - self.px(style.hourly_marks_length)
            - self.metrics.height()
            - self.metrics.bottom
            - self.px(style.hand_clearance);
        let minute = r - self.px(style.minute_marks_length) - self.px(style.hand_clearance);
        HandLengths {
            hour: (hour as i32).max(0),
            minute: (minute as i32).max(0),
            second: self.r,
        }
    }

    /// Outer disc, minute ring and whichever tick marks are enabled.
    pub fn paint_face(&self, scene: &mut Scene) {
        let style = self.style;
        scene.add_command(DrawCommand::Disc {
            cx: self.cx as f32,
            cy: self.cy as f32,
            radius: self.r as f32,
            color: style.clock_circle_color,
        });
        scene.add_command(DrawCommand::Ring {
            cx: self.cx as f32,
            cy: self.cy as f32,
            radius: (self.r as f32 - self.px(style.minute_marks_length)).max(0.0),
            thickness: self.px(style.minute_circle_width),
            color: style.minute_circle_color,
        });
        if style.show_hourly_marks {
            self.paint_hourly_marks(scene);
        }
        if style.show_minute_marks {
            self.paint_minute_marks(scene);
        }
    }

    fn paint_hourly_marks(&self, scene: &mut Scene) {
        let length = self.px(self.style.hourly_marks_length);
        for degree in (0..360).step_by(30) {
            self.add_tick(scene, Mark::Hourly, degree, length);
        }
    }

    fn paint_minute_marks(&self, scene: &mut Scene) {
        let length = self.px(self.style.minute_marks_length);
        for degree in (0..360).step_by(6).filter(|d| d % 30 != 0) {
            self.add_tick(scene, Mark::Minute, degree, length);
        }
    }

    fn add_tick(&self, scene: &mut Scene, mark: Mark, degree: u32, length: f32) {
        let (thickness, color) = match mark {
            Mark::Hourly => (self.px(self.style.hourly_marks_width), self.style.hourly_marks_color),
            Mark::Minute => (self.px(self.style.minute_marks_width), self.style.minute_marks_color),
        };
        let radian = (degree as f64).to_radians();
        let (x0, y0) = self.at(self.r as f64, radian);
        let (x1, y1) = self.at(self.r as f64 - length as f64, radian);
        scene.add_command(DrawCommand::Tick {
            mark,
            degree,
            x0,
            y0,
            x1,
            y1,
            thickness,
            color,
        });
    }

    /// Numerals 1 to 12 on the ring between the hourly marks and the hour
    /// hand tip.
    pub fn paint_numbers(&self, scene: &mut Scene) {
        let font_size = self.px(self.style.number_text_size);
        let radius = self.r as f64
            - self.px(self.style.hourly_marks_length) as f64
            - (self.metrics.height() + self.metrics.bottom) as f64 / 2.0;
        for hour in 1..=12 {
            let (x, y) = self.at(radius, hour_angle(hour as f64, 0.0, 0.0));
            scene.add_command(DrawCommand::Text {
                x: x.round() as i32,
                y: y.round() as i32,
                text: hour.to_string(),
                font_size,
                color: self.style.number_text_color,
            });
        }
    }

    /// Hands for `sample` plus the pivot dot. Every hand tip is folded into
    /// `dirty`.
    pub fn paint_hands(&self, scene: &mut Scene, sample: &TimeSample, dirty: &mut DirtyRegion) {
        let style = self.style;
        let angles = HandAngles::from_sample(sample);
        let lengths = self.hand_lengths();

        self.add_hand(
            scene,
            dirty,
            Hand::Hour,
            lengths.hour,
            angles.hour,
            style.hourly_hand_width,
        );
        self.add_hand(
            scene,
            dirty,
            Hand::Minute,
            lengths.minute,
            angles.minute,
            style.minute_hand_width,
        );
        if style.show_seconds_hand {
            self.add_hand(
                scene,
                dirty,
                Hand::Second,
                lengths.second,
                angles.second,
                style.seconds_hand_width,
            );
        }

        scene.add_command(DrawCommand::Disc {
            cx: self.cx as f32,
            cy: self.cy as f32,
            radius: self.px(style.center_circle_radius),
            color: style.center_circle_color,
        });
    }

    fn add_hand(
        &self,
        scene: &mut Scene,
        dirty: &mut DirtyRegion,
        hand: Hand,
        length: i32,
        angle: f64,
        width: Length,
    ) {
        let color = match hand {
            Hand::Hour => self.style.hourly_hand_color,
            Hand::Minute => self.style.minute_hand_color,
            Hand::Second => self.style.seconds_hand_color,
        };
        let (x, y) = polar(length as f64, angle);
        let (stop_x, stop_y) = (x as i32, y as i32);
        scene.add_command(DrawCommand::HandLine {
            hand,
            x0: self.cx,
            y0: self.cy,
            x1: self.cx + stop_x,
            y1: self.cy + stop_y,
            thickness: self.px(width),
            color,
        });
        dirty.include(stop_x, stop_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{measure, MeasureSpec};
    use crate::text::{ApproximateMetrics, TextMeasure};

    fn painter<'a>(style: &'a StyleConfig, side: u32) -> FacePainter<'a> {
        let geometry = measure(MeasureSpec::Exactly(side), MeasureSpec::Exactly(side), 50);
        let metrics = ApproximateMetrics.metrics(style.number_text_size.to_px(1.0));
        FacePainter::new(style, &geometry, 1.0, metrics)
    }

    fn ticks(scene: &Scene, kind: Mark) -> Vec<u32> {
        scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Tick { mark, degree, .. } if *mark == kind => Some(*degree),
                _ => None,
            })
            .collect()
    }

    fn hands(scene: &Scene) -> Vec<(Hand, i32, i32)> {
        scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::HandLine { hand, x1, y1, .. } => Some((*hand, *x1, *y1)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn emits_twelve_hourly_and_forty_eight_minute_marks() {
        let style = StyleConfig::default();
        let mut scene = Scene::new();
        painter(&style, 300).paint_face(&mut scene);

        let hourly = ticks(&scene, Mark::Hourly);
        assert_eq!(hourly.len(), 12);
        assert!(hourly.iter().all(|d| d % 30 == 0));

        let minute = ticks(&scene, Mark::Minute);
        assert_eq!(minute.len(), 48);
        assert!(minute.iter().all(|d| d % 30 != 0 && d % 6 == 0));
    }

    #[test]
    fn hidden_marks_are_not_emitted() {
        let style = StyleConfig::builder()
            .show_hourly_marks(false)
            .show_minute_marks(false)
            .build();
        let mut scene = Scene::new();
        painter(&style, 300).paint_face(&mut scene);
        assert!(ticks(&scene, Mark::Hourly).is_empty());
        assert!(ticks(&scene, Mark::Minute).is_empty());
        assert_eq!(scene.commands().len(), 2);
    }

    #[test]
    fn hands_are_ordered_by_length() {
        let style = StyleConfig::default();
        let lengths = painter(&style, 300).hand_lengths();
        assert!(lengths.hour < lengths.minute);
        assert!(lengths.minute < lengths.second);
        assert_eq!(lengths.second, 150);
        assert_eq!(lengths.minute, 150 - 10 - 5);
    }

    #[test]
    fn tiny_face_never_yields_negative_hands() {
        let style = StyleConfig::default();
        let lengths = painter(&style, 20).hand_lengths();
        assert_eq!(lengths.hour, 0);
        assert_eq!(lengths.minute, 0);
    }

    #[test]
    fn dirty_region_contains_every_hand_tip() {
        let style = StyleConfig::default();
        let painter = painter(&style, 300);
        for (h, m, s, ms) in [(3, 0, 0, 0), (6, 30, 0, 0), (10, 10, 42, 317), (11, 59, 59, 999)] {
            let mut scene = Scene::new();
            let mut dirty = DirtyRegion::default();
            painter.paint_hands(&mut scene, &TimeSample::from_hms_milli(h, m, s, ms), &mut dirty);
            let tips = hands(&scene);
            assert_eq!(tips.len(), 3);
            for (_, x, y) in tips {
                assert!(dirty.contains(x - 150, y - 150));
            }
        }
    }

    #[test]
    fn seconds_hand_can_be_hidden() {
        let style = StyleConfig::builder().show_seconds_hand(false).build();
        let mut scene = Scene::new();
        let mut dirty = DirtyRegion::default();
        painter(&style, 300).paint_hands(&mut scene, &TimeSample::MIDNIGHT, &mut dirty);
        let tips = hands(&scene);
        assert_eq!(tips.len(), 2);
        assert!(tips.iter().all(|(hand, _, _)| *hand != Hand::Second));
        assert!(matches!(scene.commands().last(), Some(DrawCommand::Disc { .. })));
    }

    #[test]
    fn three_oclock_hands_point_right_and_up() {
        let style = StyleConfig::default();
        let painter = painter(&style, 300);
        let lengths = painter.hand_lengths();
        let mut scene = Scene::new();
        let mut dirty = DirtyRegion::default();
        painter.paint_hands(&mut scene, &TimeSample::from_hms_milli(3, 0, 0, 0), &mut dirty);
        let tips = hands(&scene);
        assert_eq!(tips[0], (Hand::Hour, 150 + lengths.hour, 150));
        assert_eq!(tips[1], (Hand::Minute, 150, 150 - lengths.minute));
        assert_eq!(tips[2], (Hand::Second, 150, 150 - lengths.second));
    }

    #[test]
    fn numerals_sit_outside_the_hour_hand() {
        let style = StyleConfig::default();
        let painter = painter(&style, 300);
        let mut scene = Scene::new();
        painter.paint_numbers(&mut scene);
        let texts: Vec<_> = scene
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { x, y, text, .. } => Some((*x, *y, text.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 12);
        let (x, y, text) = &texts[11];
        assert_eq!(text, "12");
        assert_eq!(*x, 150);
        assert!(150 - y > painter.hand_lengths().hour);
    }
}
