// File: crates/linechart-core/src/scale.rs
// Summary: Scaler: per-index and per-value steps for a frame, and the value <-> view mapping.

use crate::series::SeriesModel;
use crate::types::{Frame, Point};

/// Scale transform between series space (index, value) and view space.
pub trait ScaleTransform {
    fn to_view_x(&self, index: f64) -> f64;
    fn to_view_y(&self, value: f64) -> f64;
    /// Fractional index for a view x coordinate.
    fn from_view_x(&self, x: f64) -> f64;
}

/// Horizontal distance between adjacent samples and vertical units per data unit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleStep {
    pub step_width: f64,
    pub step_height: f64,
}

impl ScaleStep {
    /// Steps for `model` drawn into `frame`.
    ///
    /// Fewer than two samples give `step_width == 0`, a zero-width scale gives
    /// `step_height == 0`. An inverted scale yields a negative `step_height`,
    /// which mirrors the curve inside the frame.
    pub fn compute(frame: Frame, model: &SeriesModel) -> Self {
        let step_width = if model.len() < 2 {
            0.0
        } else {
            frame.width / (model.len() - 1) as f64
        };

        let magnitude = model.range().abs();
        let step_height = if magnitude == 0.0 {
            0.0
        } else {
            let divisor = if model.is_inverted() { -magnitude } else { magnitude };
            frame.height / divisor
        };

        Self { step_width, step_height }
    }

    /// Mapping anchored at `offset` (the scale minimum).
    pub fn mapping(self, offset: f64) -> ValueMapping {
        ValueMapping { step: self, offset }
    }
}

/// `(i, v) -> (i * step_width, (v - offset) * step_height)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueMapping {
    pub step: ScaleStep,
    pub offset: f64,
}

impl ValueMapping {
    pub fn for_model(frame: Frame, model: &SeriesModel) -> Self {
        ScaleStep::compute(frame, model).mapping(model.scale_min())
    }

    #[inline]
    pub fn point(&self, index: usize, value: f64) -> Point {
        Point::new(self.to_view_x(index as f64), self.to_view_y(value))
    }

    /// Nearest sample index for a view x, or `None` outside `0..count`.
    pub fn nearest_index(&self, x: f64, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let fractional = self.from_view_x(x).round();
        if fractional < 0.0 || fractional >= count as f64 {
            return None;
        }
        Some(fractional as usize)
    }
}

impl ScaleTransform for ValueMapping {
    #[inline]
    fn to_view_x(&self, index: f64) -> f64 {
        index * self.step.step_width
    }

    #[inline]
    fn to_view_y(&self, value: f64) -> f64 {
        (value - self.offset) * self.step.step_height
    }

    fn from_view_x(&self, x: f64) -> f64 {
        if self.step.step_width == 0.0 {
            return 0.0;
        }
        x / self.step.step_width
    }
}
