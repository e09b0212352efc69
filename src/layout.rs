use crate::config::MIN_SIZE_DP;

/// How the host constrains one dimension of the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureSpec {
    Exactly(u32),
    AtMost(u32),
    Unspecified,
}

/// The area the clock was measured at and the centered square it draws in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutGeometry {
    pub width: u32,
    pub height: u32,
    pub cx: i32,
    pub cy: i32,
    /// Side of the drawing square, always even.
    pub side: u32,
}

impl LayoutGeometry {
    pub fn radius(&self) -> i32 {
        self.side as i32 / 2
    }
}

/// Minimum side in pixels for the given display density.
pub fn min_size_px(density: f32) -> u32 {
    (MIN_SIZE_DP * density) as u32
}

/// Computes the largest centered square for the given constraints. Any
/// dimension that is not pinned exactly falls back to `min_size`.
///
/// The side is the smaller dimension rounded down to even, so an odd
/// `101 x 251` area yields a 100 px square.
pub fn measure(width: MeasureSpec, height: MeasureSpec, min_size: u32) -> LayoutGeometry {
    let resolve = |spec: MeasureSpec| match spec {
        MeasureSpec::Exactly(size) => size,
        MeasureSpec::AtMost(_) | MeasureSpec::Unspecified => min_size,
    };
    let (width, height) = (resolve(width), resolve(height));
    let half = width.min(height) / 2;
    LayoutGeometry {
        width,
        height,
        cx: (width / 2) as i32,
        cy: (height / 2) as i32,
        side: half * 2,
    }
}
