// File: crates/strata-core/src/geometry.rs
// Summary: Lightweight geometry helpers for draw-surface math.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    /// Rect spanning two y coordinates in either order, centred on `cx`.
    pub fn column(cx: f64, half_width: f64, y0: f64, y1: f64) -> Self {
        Self::from_ltrb(cx - half_width, y0.min(y1), cx + half_width, y0.max(y1))
    }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Grow the height to at least `min` pixels, keeping the top edge.
    pub fn with_min_height(mut self, min: f64) -> Self {
        if self.height() < min {
            self.bottom = self.top + min;
        }
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Self { x, y } }
}
