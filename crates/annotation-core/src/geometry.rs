// File: crates/annotation-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use skia_safe as skia;

/// Axis-aligned rectangle in pixel space. Not required to be normalized;
/// callers that need `left <= right` / `top <= bottom` normalize explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF64 {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl RectF64 {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Inclusive point containment.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(
            self.left as f32,
            self.top as f32,
            self.right as f32,
            self.bottom as f32,
        )
    }
}

/// Pixel-space point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Normalized pixel-space interval reported per axis id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRange {
    pub min: f64,
    pub max: f64,
}

impl PixelRange {
    /// Build a range from two raw endpoints, ordering them.
    pub fn ordered(a: f64, b: f64) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }
}
