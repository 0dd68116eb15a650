// File: crates/linechart-core/src/builder.rs
// Summary: PathBuilder: open (stroke) and closed (fill) paths through scaled samples.

use crate::geometry::{Path, PathSegment};
use crate::scale::{ScaleStep, ValueMapping};
use crate::series::SeriesModel;
use crate::types::Point;

/// How consecutive samples are joined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    Linear,
    /// Cubic segments with both control points at the horizontal midpoint of
    /// the pair: the first at the previous sample's height, the second at the
    /// current sample's height. Passes through every sample without overshoot.
    #[default]
    Smoothed,
}

/// View y of the baseline closed paths drop to.
pub const BASELINE_Y: f64 = 0.0;

pub struct PathBuilder<'a> {
    model: &'a SeriesModel,
    mapping: ValueMapping,
    interpolation: Interpolation,
}

impl<'a> PathBuilder<'a> {
    pub fn new(model: &'a SeriesModel, step: ScaleStep) -> Self {
        Self {
            model,
            mapping: step.mapping(model.scale_min()),
            interpolation: Interpolation::default(),
        }
    }

    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Samples mapped into view space, in index order.
    pub fn scaled_points(&self) -> Vec<Point> {
        self.model
            .samples()
            .iter()
            .enumerate()
            .map(|(i, s)| self.mapping.point(i, s.value()))
            .collect()
    }

    /// Stroke path. Empty for no samples, a lone `MoveTo` for one sample.
    pub fn build_open(&self) -> Path {
        let points = self.scaled_points();
        let path = Path::from_segments(self.trace(&points));
        tracing::trace!(points = points.len(), segments = path.len(), "open path built");
        path
    }

    /// Fill path: the open path, then down to the baseline under the last
    /// sample, back along the baseline under the first, and closed.
    /// Fewer than two samples enclose no area and yield the open path.
    pub fn build_closed(&self) -> Path {
        let points = self.scaled_points();
        let mut segments = self.trace(&points);
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if points.len() >= 2 {
                segments.push(PathSegment::LineTo(Point::new(last.x, BASELINE_Y)));
                segments.push(PathSegment::LineTo(Point::new(first.x, BASELINE_Y)));
                segments.push(PathSegment::Close);
            }
        }
        tracing::trace!(points = points.len(), segments = segments.len(), "closed path built");
        Path::from_segments(segments)
    }

    fn trace(&self, points: &[Point]) -> Vec<PathSegment> {
        let Some(&first) = points.first() else {
            return Vec::new();
        };
        let mut segments = Vec::with_capacity(points.len());
        segments.push(PathSegment::MoveTo(first));
        for pair in points.windows(2) {
            let (prev, cur) = (pair[0], pair[1]);
            let segment = match self.interpolation {
                Interpolation::Linear => PathSegment::LineTo(cur),
                Interpolation::Smoothed => {
                    let mid_x = (prev.x + cur.x) / 2.0;
                    PathSegment::CubicTo {
                        control1: Point::new(mid_x, prev.y),
                        control2: Point::new(mid_x, cur.y),
                        to: cur,
                    }
                }
            };
            segments.push(segment);
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Frame;

    fn builder(model: &SeriesModel, frame: Frame) -> PathBuilder<'_> {
        PathBuilder::new(model, ScaleStep::compute(frame, model))
    }

    #[test]
    fn smoothed_controls_sit_at_midpoint() {
        let m = SeriesModel::from_values([0.0, 10.0]);
        let path = builder(&m, Frame::new(100.0, 50.0)).build_open();
        assert_eq!(
            path.segments(),
            &[
                PathSegment::MoveTo(Point::new(0.0, 0.0)),
                PathSegment::CubicTo {
                    control1: Point::new(50.0, 0.0),
                    control2: Point::new(50.0, 50.0),
                    to: Point::new(100.0, 50.0),
                },
            ]
        );
    }

    #[test]
    fn single_sample_is_a_point_marker() {
        let m = SeriesModel::from_values([3.0]);
        let b = builder(&m, Frame::new(100.0, 50.0));
        let open = b.build_open();
        assert_eq!(open.segments(), &[PathSegment::MoveTo(Point::new(0.0, 0.0))]);
        assert_eq!(b.build_closed(), open);
    }

    #[test]
    fn empty_series_emits_nothing() {
        let m = SeriesModel::from_values(Vec::new());
        let b = builder(&m, Frame::new(100.0, 50.0));
        assert!(b.build_open().is_empty());
        assert!(b.build_closed().is_empty());
    }
}
