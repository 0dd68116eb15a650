// File: crates/linechart-core/src/geometry.rs
// Summary: Path primitives (move/line/cubic/close) and cubic Bezier evaluation in view space.

use crate::types::Point;

/// One drawing command of a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
    /// Straight line back to the last `MoveTo`.
    Close,
}

impl PathSegment {
    /// End point of the segment; `None` for `Close`.
    pub fn end(&self) -> Option<Point> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::CubicTo { to, .. } => Some(to),
            PathSegment::Close => None,
        }
    }
}

/// Immutable, ordered sequence of segments forming one drawable curve.
/// A path holding a single `MoveTo` is a zero-length point marker and is valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Close))
    }

    /// On-curve vertices (segment end points), in drawing order.
    pub fn vertices(&self) -> Vec<Point> {
        self.segments.iter().filter_map(PathSegment::end).collect()
    }

    /// Conservative bounds including control points, as (min, max).
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        let mut include = |p: Point| {
            min = Point::new(min.x.min(p.x), min.y.min(p.y));
            max = Point::new(max.x.max(p.x), max.y.max(p.y));
        };
        for seg in &self.segments {
            match *seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => include(p),
                PathSegment::CubicTo { control1, control2, to } => {
                    include(control1);
                    include(control2);
                    include(to);
                }
                PathSegment::Close => {}
            }
        }
        if min.x.is_finite() && min.y.is_finite() && max.x.is_finite() && max.y.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub from: Point,
    pub control1: Point,
    pub control2: Point,
    pub to: Point,
}

impl CubicBezier {
    pub fn new(from: Point, control1: Point, control2: Point, to: Point) -> Self {
        Self { from, control1, control2, to }
    }

    /// Point at parameter `t` in `[0, 1]`. `eval(0.0)` and `eval(1.0)` return
    /// the end points exactly.
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * self.from.x + b * self.control1.x + c * self.control2.x + d * self.to.x,
            a * self.from.y + b * self.control1.y + c * self.control2.y + d * self.to.y,
        )
    }
}
