use crate::error::ClockError;
use rusttype::{Font, Scale};
use std::path::Path;

/// Vertical metrics of the numeral font at one size, in pixels. All values
/// are distances from the baseline and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub ascent: f32,
    pub descent: f32,
    /// Lowest extent of any glyph below the baseline.
    pub bottom: f32,
}

impl TextMetrics {
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

pub trait TextMeasure {
    fn metrics(&self, size: f32) -> TextMetrics;
}

impl TextMeasure for Font<'_> {
    fn metrics(&self, size: f32) -> TextMetrics {
        let v = self.v_metrics(Scale::uniform(size));
        let descent = (-v.descent).max(0.0);
        TextMetrics {
            ascent: v.ascent.max(0.0),
            descent,
            bottom: descent,
        }
    }
}

/// Metrics of a typical sans-serif face, used when no font is loaded so the
/// hour hand keeps the same clearance.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateMetrics;

impl TextMeasure for ApproximateMetrics {
    fn metrics(&self, size: f32) -> TextMetrics {
        TextMetrics {
            ascent: 0.928 * size,
            descent: 0.244 * size,
            bottom: 0.271 * size,
        }
    }
}

pub fn load_font_file(path: &Path) -> Result<Vec<u8>, ClockError> {
    std::fs::read(path).map_err(|source| ClockError::FontRead {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_font(data: Vec<u8>) -> Result<Font<'static>, ClockError> {
    Font::try_from_vec(data).ok_or(ClockError::FontParse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approximate_metrics_scale_with_size() {
        let small = ApproximateMetrics.metrics(10.0);
        let large = ApproximateMetrics.metrics(20.0);
        assert!((large.height() - 2.0 * small.height()).abs() < 1e-4);
        assert!(small.bottom >= small.descent);
    }

    #[test]
    fn garbage_is_not_a_font() {
        assert!(matches!(parse_font(vec![0, 1, 2, 3]), Err(ClockError::FontParse)));
    }

    #[test]
    fn missing_font_file_reports_path() {
        let err = load_font_file(Path::new("/nonexistent/clock-font.ttf")).unwrap_err();
        assert!(err.to_string().contains("clock-font.ttf"));
    }
}
