// File: crates/linechart-core/src/types.rs
// Summary: Shared value types (drawing frame, view-space point) and defaults.

use crate::error::{ChartError, ChartResult};

/// Default horizontal space reserved left of the plot for legend labels.
pub const LEGEND_GUTTER: f64 = 30.0;
/// Default number of legend increments.
pub const LEGEND_INCREMENTS: i64 = 4;

/// Drawing surface size supplied by the presentation layer on each layout pass.
/// Contract: finite and non-negative; [`Frame::new`] does not check it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Validating constructor for callers at the input boundary.
    pub fn try_new(width: f64, height: f64) -> ChartResult<Self> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if ok(width) && ok(height) {
            Ok(Self { width, height })
        } else {
            Err(ChartError::InvalidFrame { width, height })
        }
    }

    /// Frame with `amount` removed from the left edge, never narrower than zero.
    pub fn inset_left(&self, amount: f64) -> Self {
        Self { width: (self.width - amount).max(0.0), height: self.height }
    }
}

/// Point in view space: origin bottom-left, x right, y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn lerp(self, to: Point, t: f64) -> Point {
        Point::new(self.x + (to.x - self.x) * t, self.y + (to.y - self.y) * t)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
