use bon::Builder;
use log::warn;
use std::collections::BTreeMap;

/// Color representation for clock elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);
    pub const LIGHT_GRAY: Color = Color::new(0xa9, 0xad, 0xb0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Parses `#RRGGBB`, `#AARRGGBB` (alpha is dropped) or a small set of
    /// color names.
    pub fn parse(value: &str) -> Option<Color> {
        let value = value.trim();
        if let Some(hex) = value.strip_prefix('#') {
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let rgb = match hex.len() {
                6 => hex,
                8 => &hex[2..],
                _ => return None,
            };
            let raw = u32::from_str_radix(rgb, 16).ok()?;
            return Some(Color::new((raw >> 16) as u8, (raw >> 8) as u8, raw as u8));
        }
        let color = match value.to_ascii_lowercase().as_str() {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "gray" | "grey" => Color::new(0x88, 0x88, 0x88),
            "lightgray" | "lightgrey" => Color::new(0xcc, 0xcc, 0xcc),
            "darkgray" | "darkgrey" => Color::new(0x44, 0x44, 0x44),
            "red" => Color::new(0xff, 0x00, 0x00),
            "green" => Color::new(0x00, 0xff, 0x00),
            "blue" => Color::new(0x00, 0x00, 0xff),
            "yellow" => Color::new(0xff, 0xff, 0x00),
            "cyan" => Color::new(0x00, 0xff, 0xff),
            "magenta" => Color::new(0xff, 0x00, 0xff),
            _ => return None,
        };
        Some(color)
    }
}

/// A length either in density-independent units or in raw pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Dp(f32),
    Px(f32),
}

impl Length {
    /// Resolves to pixels for the given display density. Negative lengths
    /// resolve to zero.
    pub fn to_px(self, density: f32) -> f32 {
        let px = match self {
            Length::Dp(dp) => dp * density,
            Length::Px(px) => px,
        };
        px.max(0.0)
    }

    /// Parses `12dp`, `12px` or a bare number (taken as dp).
    pub fn parse(value: &str) -> Option<Length> {
        let value = value.trim();
        let (number, make): (&str, fn(f32) -> Length) = if let Some(n) = value.strip_suffix("dp") {
            (n, Length::Dp)
        } else if let Some(n) = value.strip_suffix("px") {
            (n, Length::Px)
        } else {
            (value, Length::Dp)
        };
        let number: f32 = number.trim().parse().ok()?;
        if !number.is_finite() || number < 0.0 {
            return None;
        }
        Some(make(number))
    }
}

/// Smallest side the clock is measured at when the host leaves a dimension
/// open, in density-independent units.
pub const MIN_SIZE_DP: f32 = 50.0;

/// Attribute names understood by [`StyleConfig::from_attributes`].
pub mod attr {
    pub const CLOCK_CIRCLE_COLOR: &str = "clockCircleColor";
    pub const MINUTE_CIRCLE_COLOR: &str = "minuteCircleColor";
    pub const HOURLY_MARKS_COLOR: &str = "hourlyMarksColor";
    pub const MINUTE_MARKS_COLOR: &str = "minuteMarksColor";
    pub const NUMBER_TEXT_COLOR: &str = "numberTextColor";
    pub const HOURLY_HAND_COLOR: &str = "hourlyHandColor";
    pub const MINUTE_HAND_COLOR: &str = "minuteHandColor";
    pub const SECONDS_HAND_COLOR: &str = "secondsHandColor";
    pub const CENTER_CIRCLE_COLOR: &str = "centerCircleColor";
    pub const CENTER_CIRCLE_RADIUS: &str = "centerCircleRadius";
    pub const SHOW_HOURLY_MARKS: &str = "showHourlyMarks";
    pub const SHOW_MINUTE_MARKS: &str = "showMinuteMarks";
    pub const SHOW_SECONDS_HAND: &str = "showSecondsHand";
    pub const MINUTE_CIRCLE_WIDTH: &str = "minuteCircleWidth";
    pub const HOURLY_MARKS_WIDTH: &str = "hourlyMarksWidth";
    pub const MINUTE_MARKS_WIDTH: &str = "minuteMarksWidth";
    pub const HOURLY_HAND_WIDTH: &str = "hourlyHandWidth";
    pub const MINUTE_HAND_WIDTH: &str = "minuteHandWidth";
    pub const SECONDS_HAND_WIDTH: &str = "secondsHandWidth";
    pub const NUMBER_TEXT_SIZE: &str = "numberTextSize";
}

/// Named attribute values as supplied by the host, e.g. from the command line.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    fn color(&self, name: &str, default: Color) -> Color {
        self.parsed(name, default, Color::parse)
    }

    fn length(&self, name: &str, default: Length) -> Length {
        self.parsed(name, default, Length::parse)
    }

    fn boolean(&self, name: &str, default: bool) -> bool {
        self.parsed(name, default, |v| v.trim().parse().ok())
    }

    fn parsed<T>(&self, name: &str, default: T, parse: impl Fn(&str) -> Option<T>) -> T {
        match self.get(name) {
            None => default,
            Some(raw) => parse(raw).unwrap_or_else(|| {
                warn!("ignoring invalid value {raw:?} for attribute {name}");
                default
            }),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Attributes::new();
        for (name, value) in iter {
            attributes.set(name, value);
        }
        attributes
    }
}

/// Styling of the clock face. Built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct StyleConfig {
    // Colors
    #[builder(default = Color::LIGHT_GRAY)]
    pub clock_circle_color: Color,
    #[builder(default = Color::BLACK)]
    pub minute_circle_color: Color,
    #[builder(default = Color::BLACK)]
    pub hourly_marks_color: Color,
    #[builder(default = Color::BLACK)]
    pub minute_marks_color: Color,
    #[builder(default = Color::BLACK)]
    pub number_text_color: Color,
    #[builder(default = Color::BLACK)]
    pub hourly_hand_color: Color,
    #[builder(default = Color::BLACK)]
    pub minute_hand_color: Color,
    #[builder(default = Color::BLACK)]
    pub seconds_hand_color: Color,
    #[builder(default = Color::BLACK)]
    pub center_circle_color: Color,

    // Stroke widths
    #[builder(default = Length::Px(2.0))]
    pub minute_circle_width: Length,
    #[builder(default = Length::Px(3.0))]
    pub hourly_marks_width: Length,
    #[builder(default = Length::Px(1.0))]
    pub minute_marks_width: Length,
    #[builder(default = Length::Px(5.0))]
    pub hourly_hand_width: Length,
    #[builder(default = Length::Px(3.0))]
    pub minute_hand_width: Length,
    #[builder(default = Length::Px(1.0))]
    pub seconds_hand_width: Length,

    // Sizes
    #[builder(default = Length::Dp(5.0))]
    pub center_circle_radius: Length,
    #[builder(default = Length::Px(18.0))]
    pub number_text_size: Length,
    #[builder(default = Length::Dp(20.0))]
    pub hourly_marks_length: Length,
    #[builder(default = Length::Dp(10.0))]
    pub minute_marks_length: Length,
    /// Gap kept between the hour/minute hand tips and the ring they must not
    /// reach.
    #[builder(default = Length::Dp(5.0))]
    pub hand_clearance: Length,

    // Visibility
    #[builder(default = true)]
    pub show_hourly_marks: bool,
    #[builder(default = true)]
    pub show_minute_marks: bool,
    #[builder(default = true)]
    pub show_seconds_hand: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl StyleConfig {
    /// Builds a style from named attributes. Missing or malformed entries
    /// keep their defaults.
    pub fn from_attributes(attrs: &Attributes) -> Self {
        let d = Self::default();
        Self {
            clock_circle_color: attrs.color(attr::CLOCK_CIRCLE_COLOR, d.clock_circle_color),
            minute_circle_color: attrs.color(attr::MINUTE_CIRCLE_COLOR, d.minute_circle_color),
            hourly_marks_color: attrs.color(attr::HOURLY_MARKS_COLOR, d.hourly_marks_color),
            minute_marks_color: attrs.color(attr::MINUTE_MARKS_COLOR, d.minute_marks_color),
            number_text_color: attrs.color(attr::NUMBER_TEXT_COLOR, d.number_text_color),
            hourly_hand_color: attrs.color(attr::HOURLY_HAND_COLOR, d.hourly_hand_color),
            minute_hand_color: attrs.color(attr::MINUTE_HAND_COLOR, d.minute_hand_color),
            seconds_hand_color: attrs.color(attr::SECONDS_HAND_COLOR, d.seconds_hand_color),
            center_circle_color: attrs.color(attr::CENTER_CIRCLE_COLOR, d.center_circle_color),

            minute_circle_width: attrs.length(attr::MINUTE_CIRCLE_WIDTH, d.minute_circle_width),
            hourly_marks_width: attrs.length(attr::HOURLY_MARKS_WIDTH, d.hourly_marks_width),
            minute_marks_width: attrs.length(attr::MINUTE_MARKS_WIDTH, d.minute_marks_width),
            hourly_hand_width: attrs.length(attr::HOURLY_HAND_WIDTH, d.hourly_hand_width),
            minute_hand_width: attrs.length(attr::MINUTE_HAND_WIDTH, d.minute_hand_width),
            seconds_hand_width: attrs.length(attr::SECONDS_HAND_WIDTH, d.seconds_hand_width),

            center_circle_radius: attrs.length(attr::CENTER_CIRCLE_RADIUS, d.center_circle_radius),
            number_text_size: attrs.length(attr::NUMBER_TEXT_SIZE, d.number_text_size),
            hourly_marks_length: d.hourly_marks_length,
            minute_marks_length: d.minute_marks_length,
            hand_clearance: d.hand_clearance,

            show_hourly_marks: attrs.boolean(attr::SHOW_HOURLY_MARKS, d.show_hourly_marks),
            show_minute_marks: attrs.boolean(attr::SHOW_MINUTE_MARKS, d.show_minute_marks),
            show_seconds_hand: attrs.boolean(attr::SHOW_SECONDS_HAND, d.show_seconds_hand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!(Color::parse("#A9ADB0"), Some(Color::LIGHT_GRAY));
        assert_eq!(Color::parse("#80ff0000"), Some(Color::new(0xff, 0, 0)));
        assert_eq!(Color::parse("Black"), Some(Color::BLACK));
        assert_eq!(Color::parse("#12345"), None);
        assert_eq!(Color::parse("mauve"), None);
    }

    #[test]
    fn parses_lengths() {
        assert_eq!(Length::parse("5dp"), Some(Length::Dp(5.0)));
        assert_eq!(Length::parse("3px"), Some(Length::Px(3.0)));
        assert_eq!(Length::parse("7"), Some(Length::Dp(7.0)));
        assert_eq!(Length::parse("-1dp"), None);
        assert_eq!(Length::parse("NaN"), None);
        assert_eq!(Length::Dp(5.0).to_px(2.0), 10.0);
        assert_eq!(Length::Px(-4.0).to_px(2.0), 0.0);
    }

    #[test]
    fn empty_attributes_give_defaults() {
        assert_eq!(StyleConfig::from_attributes(&Attributes::new()), StyleConfig::default());
    }

    #[test]
    fn attributes_override_defaults() {
        let attrs: Attributes = [
            (attr::SECONDS_HAND_COLOR, "#ff0000"),
            (attr::SHOW_MINUTE_MARKS, "false"),
            (attr::CENTER_CIRCLE_RADIUS, "8dp"),
        ]
        .into_iter()
        .collect();
        let style = StyleConfig::from_attributes(&attrs);
        assert_eq!(style.seconds_hand_color, Color::new(0xff, 0, 0));
        assert!(!style.show_minute_marks);
        assert!(style.show_hourly_marks);
        assert_eq!(style.center_circle_radius, Length::Dp(8.0));
    }

    #[test]
    fn malformed_attributes_fall_back() {
        let attrs: Attributes = [
            (attr::CLOCK_CIRCLE_COLOR, "not-a-color"),
            (attr::SHOW_SECONDS_HAND, "maybe"),
            (attr::HOURLY_HAND_WIDTH, "-3px"),
        ]
        .into_iter()
        .collect();
        let style = StyleConfig::from_attributes(&attrs);
        let defaults = StyleConfig::default();
        assert_eq!(style.clock_circle_color, defaults.clock_circle_color);
        assert_eq!(style.show_seconds_hand, defaults.show_seconds_hand);
        assert_eq!(style.hourly_hand_width, defaults.hourly_hand_width);
    }
}
