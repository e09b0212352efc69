// ============================================================================
// SOFTWARE RASTERIZER
// ============================================================================

use crate::config::Color;
use crate::dirty::Rect;
use rusttype::{point, Font, PositionedGlyph, Scale};

/// RGBA8 frame buffer with an optional clip rectangle. Pixels outside the
/// clip are never touched.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
    clip: Rect,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        let clip = Self::bounds(width, height);
        Self {
            frame,
            width,
            height,
            clip,
        }
    }

    fn bounds(width: usize, height: usize) -> Rect {
        Rect::new(0, 0, width as i32 - 1, height as i32 - 1)
    }

    /// Restricts drawing to `clip`, or to the whole frame for `None`.
    pub fn set_clip(&mut self, clip: Option<Rect>) {
        let bounds = Self::bounds(self.width, self.height);
        self.clip = match clip {
            Some(clip) => Rect::new(
                clip.left.max(bounds.left),
                clip.top.max(bounds.top),
                clip.right.min(bounds.right),
                clip.bottom.min(bounds.bottom),
            ),
            None => bounds,
        };
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 4;
        self.frame
            .get(idx..idx + 3)
            .map(|p| (p[0], p[1], p[2]))
    }

    pub fn clear(&mut self, color: Color) {
        let clip = self.clip;
        for y in clip.top..=clip.bottom {
            for x in clip.left..=clip.right {
                self.put(x, y, color, 1.0);
            }
        }
    }

    /// Alpha-blends `color` over the pixel at (x, y).
    fn put(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if !self.clip.contains(x, y) {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let Some(dst) = self.frame.get_mut(idx..idx + 4) else {
            return;
        };
        let a = alpha.clamp(0.0, 1.0);
        let (r, g, b) = color.as_tuple();
        let blend = |src: u8, dst: u8| (src as f32 * a + dst as f32 * (1.0 - a)).round() as u8;
        let out = [blend(r, dst[0]), blend(g, dst[1]), blend(b, dst[2]), 0xff];
        dst.copy_from_slice(&out);
    }

    /// Bounding box clipped to the current clip, or `None` when disjoint.
    fn clipped(&self, left: i32, top: i32, right: i32, bottom: i32) -> Option<Rect> {
        let r = Rect::new(
            left.max(self.clip.left),
            top.max(self.clip.top),
            right.min(self.clip.right),
            bottom.min(self.clip.bottom),
        );
        (r.left <= r.right && r.top <= r.bottom).then_some(r)
    }

    pub fn line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, thickness: f32, color: Color) {
        let pad = thickness.ceil() as i32 + 1;
        let Some(area) = self.clipped(
            x0.min(x1).floor() as i32 - pad,
            y0.min(y1).floor() as i32 - pad,
            x0.max(x1).ceil() as i32 + pad,
            y0.max(y1).ceil() as i32 + pad,
        ) else {
            return;
        };
        let dx = x1 - x0;
        let dy = y1 - y0;
        let len_sq = dx * dx + dy * dy;
        for y in area.top..=area.bottom {
            for x in area.left..=area.right {
                let px = x as f32 - x0;
                let py = y as f32 - y0;
                let t = if len_sq > 0.0 {
                    ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let lx = x0 + t * dx;
                let ly = y0 + t * dy;
                let dist = ((lx - x as f32).powi(2) + (ly - y as f32).powi(2)).sqrt();
                let aa = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
                if aa > 0.01 {
                    self.put(x, y, color, aa);
                }
            }
        }
    }

    /// Filled circle with an anti-aliased rim.
    pub fn disc(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let reach = radius.ceil() as i32 + 1;
        let Some(area) = self.clipped(
            cx.floor() as i32 - reach,
            cy.floor() as i32 - reach,
            cx.ceil() as i32 + reach,
            cy.ceil() as i32 + reach,
        ) else {
            return;
        };
        for y in area.top..=area.bottom {
            for x in area.left..=area.right {
                let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
                let aa = (radius + 0.5 - dist).clamp(0.0, 1.0);
                if aa > 0.0 {
                    self.put(x, y, color, aa);
                }
            }
        }
    }

    /// Circle outline centered on `radius`, `thickness` wide.
    pub fn ring(&mut self, cx: f32, cy: f32, radius: f32, thickness: f32, color: Color) {
        let half = thickness / 2.0;
        let reach = (radius + half).ceil() as i32 + 1;
        let Some(area) = self.clipped(
            cx.floor() as i32 - reach,
            cy.floor() as i32 - reach,
            cx.ceil() as i32 + reach,
            cy.ceil() as i32 + reach,
        ) else {
            return;
        };
        for y in area.top..=area.bottom {
            for x in area.left..=area.right {
                let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
                let aa = (half + 0.5 - (dist - radius).abs()).clamp(0.0, 1.0);
                if aa > 0.0 {
                    self.put(x, y, color, aa);
                }
            }
        }
    }

    /// Draws `text` centered on (x, y).
    pub fn text(&mut self, x: i32, y: i32, text: &str, font: &Font, size: f32, color: Color) {
        let scale = Scale::uniform(size);
        let v_metrics = font.v_metrics(scale);
        let glyphs: Vec<PositionedGlyph> = font
            .layout(text, scale, point(0.0, v_metrics.ascent))
            .collect();
        let (min_x, max_x, min_y, max_y) = glyphs.iter().filter_map(|g| g.pixel_bounding_box()).fold(
            (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
            |(min_x, max_x, min_y, max_y), bb| {
                (
                    min_x.min(bb.min.x),
                    max_x.max(bb.max.x),
                    min_y.min(bb.min.y),
                    max_y.max(bb.max.y),
                )
            },
        );
        if min_x > max_x {
            return;
        }
        let offset_x = x - (max_x - min_x) / 2;
        let offset_y = y - (max_y - min_y) / 2;
        for glyph in glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    let px = offset_x + gx as i32 + bb.min.x - min_x;
                    let py = offset_y + gy as i32 + bb.min.y - min_y;
                    self.put(px, py, color, v);
                });
            }
        }
    }
}
