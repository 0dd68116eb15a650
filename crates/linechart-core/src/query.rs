// File: crates/linechart-core/src/query.rs
// Summary: PathQuery: nearest on-path point for a horizontal coordinate, and sample readout.

use crate::geometry::{CubicBezier, Path, PathSegment};
use crate::scale::ValueMapping;
use crate::series::SeriesModel;
use crate::types::Point;

/// Candidates sampled along each cubic segment.
pub const CURVE_RESOLUTION: usize = 48;

/// Inverse lookup on a built path. Works on any hand-made [`Path`].
#[derive(Clone, Copy, Debug)]
pub struct PathQuery<'a> {
    path: &'a Path,
    resolution: usize,
}

impl<'a> PathQuery<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path, resolution: CURVE_RESOLUTION }
    }

    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution.max(1);
        self
    }

    /// Horizontal extent `[min_x, max_x]` of the on-path vertices.
    pub fn domain(&self) -> Option<(f64, f64)> {
        let mut vertices = self.path.vertices().into_iter();
        let first = vertices.next()?;
        Some(vertices.fold((first.x, first.x), |(lo, hi), p| (lo.min(p.x), hi.max(p.x))))
    }

    /// Point on the path whose x is closest to `qx`. `None` when the path is
    /// empty or `qx` lies outside [`domain`](Self::domain). Ties go to the
    /// first candidate in drawing order.
    pub fn nearest(&self, qx: f64) -> Option<Point> {
        let (lo, hi) = self.domain()?;
        if !(lo..=hi).contains(&qx) {
            tracing::trace!(qx, lo, hi, "query outside path domain");
            return None;
        }

        let mut best: Option<(f64, Point)> = None;
        let mut consider = |p: Point| {
            let d = (p.x - qx).abs();
            if best.map_or(true, |(bd, _)| d < bd) {
                best = Some((d, p));
            }
        };

        let mut current = Point::default();
        let mut subpath_start = Point::default();
        for seg in self.path.segments() {
            match *seg {
                PathSegment::MoveTo(p) => {
                    consider(p);
                    current = p;
                    subpath_start = p;
                }
                PathSegment::LineTo(p) => {
                    consider(nearest_on_line(current, p, qx));
                    current = p;
                }
                PathSegment::CubicTo { control1, control2, to } => {
                    let curve = CubicBezier::new(current, control1, control2, to);
                    for i in 1..=self.resolution {
                        consider(curve.eval(i as f64 / self.resolution as f64));
                    }
                    current = to;
                }
                PathSegment::Close => {
                    consider(nearest_on_line(current, subpath_start, qx));
                    current = subpath_start;
                }
            }
        }
        best.map(|(_, p)| p)
    }
}

/// Point of segment `a..b` with x closest to `qx`; exact when `qx` falls inside.
fn nearest_on_line(a: Point, b: Point, qx: f64) -> Point {
    let (lo, hi) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
    if qx < lo || qx > hi {
        return if (a.x - qx).abs() <= (b.x - qx).abs() { a } else { b };
    }
    let dx = b.x - a.x;
    if dx == 0.0 {
        return a;
    }
    a.lerp(b, (qx - a.x) / dx)
}

/// Value readout for an indicator placed on the curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Readout {
    pub point: Point,
    pub index: usize,
    pub value: f64,
    pub label: Option<String>,
}

impl Readout {
    /// Map a point found on the path back to its originating sample by
    /// rounding `x / step_width` to the nearest index.
    pub fn resolve(model: &SeriesModel, mapping: &ValueMapping, point: Point) -> Option<Self> {
        let Some(index) = mapping.nearest_index(point.x, model.len()) else {
            tracing::warn!(x = point.x, count = model.len(), "readout index out of range");
            return None;
        };
        let sample = model.sample(index)?;
        Some(Self {
            point,
            index,
            value: sample.value(),
            label: sample.label().map(str::to_owned),
        })
    }

    pub fn formatted_value(&self, precision: usize) -> String {
        format!("{:.*}", precision, self.value)
    }
}
