/// Inclusive pixel rectangle in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn union(self, other: Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Bounding box of the hand endpoints drawn in one pass, relative to the
/// face center. The origin is always inside, since every hand starts there.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRegion {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl DirtyRegion {
    pub fn include(&mut self, x: i32, y: i32) {
        self.left = self.left.min(x);
        self.top = self.top.min(y);
        self.right = self.right.max(x);
        self.bottom = self.bottom.max(y);
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Hands back the accumulated bounds and resets to empty.
    pub fn take(&mut self) -> DirtyRegion {
        std::mem::take(self)
    }

    /// Frame rectangle to repaint: the bounds moved to the face center and
    /// grown by `margin` on every side.
    pub fn to_damage(&self, cx: i32, cy: i32, margin: i32) -> Rect {
        Rect {
            left: self.left + cx - margin,
            top: self.top + cy - margin,
            right: self.right + cx + margin,
            bottom: self.bottom + cy + margin,
        }
    }
}
