//! Pixel-space geometry for pointer interactions.
//!
//! Centralizes the rectangle normalization used by drawing and by the final
//! selection so both always agree on the same bounds.

use serde::{Deserialize, Serialize};

/// A position on the rendering surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PixelPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned rectangle with non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl PixelRect {
    /// Rectangle spanned by two opposite corners, in any order.
    ///
    /// When the drag went leftward or upward the origin is flipped so the
    /// width and height come out non-negative.
    pub fn from_corners(a: PixelPoint, b: PixelPoint) -> Self {
        let (mut x, mut y) = (a.x, a.y);
        let (mut w, mut h) = (b.x - a.x, b.y - a.y);

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Self { x, y, w, h }
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.w
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.h
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: PixelPoint) -> bool {
        p.x >= self.x && p.x <= self.max_x() && p.y >= self.y && p.y <= self.max_y()
    }

    /// Corners ordered (min-x,min-y), (max-x,min-y), (max-x,max-y), (min-x,max-y).
    pub fn corners(&self) -> [PixelPoint; 4] {
        [
            PixelPoint::new(self.min_x(), self.min_y()),
            PixelPoint::new(self.max_x(), self.min_y()),
            PixelPoint::new(self.max_x(), self.max_y()),
            PixelPoint::new(self.min_x(), self.max_y()),
        ]
    }
}
