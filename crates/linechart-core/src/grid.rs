// File: crates/linechart-core/src/grid.rs
// Summary: LegendGrid: evenly spaced horizontal reference lines spanning the scale.

use crate::error::{ChartError, ChartResult};
use crate::scale::{ScaleStep, ScaleTransform};
use crate::series::SeriesModel;

/// One horizontal reference line.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendLine {
    /// 0 for the scale minimum, `increments` for the maximum.
    pub level: usize,
    pub value: f64,
    pub y_position: f64,
    pub label: String,
}

impl LegendLine {
    pub fn is_baseline(&self) -> bool { self.level == 0 }

    /// Non-baseline lines are hidden while a value indicator is shown.
    pub fn visible(&self, indicator_active: bool) -> bool {
        self.is_baseline() || !indicator_active
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendGrid {
    scale_min: f64,
    scale_max: f64,
    increments: i64,
    precision: usize,
}

impl LegendGrid {
    pub fn new(scale_min: f64, scale_max: f64, increments: i64) -> Self {
        Self { scale_min, scale_max, increments, precision: 1 }
    }

    pub fn for_model(model: &SeriesModel, increments: i64) -> Self {
        Self::new(model.scale_min(), model.scale_max(), increments)
    }

    /// Decimals used for line labels.
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Value distance between adjacent lines.
    pub fn step(&self) -> ChartResult<f64> {
        let n = self.checked_increments()?;
        Ok((self.scale_max - self.scale_min) / n as f64)
    }

    /// `increments + 1` values from `scale_min` to `scale_max`.
    pub fn values(&self) -> ChartResult<Vec<f64>> {
        let n = self.checked_increments()?;
        let step = (self.scale_max - self.scale_min) / n as f64;
        Ok((0..=n).map(|i| self.scale_min + step * i as f64).collect())
    }

    /// Lines positioned with the same mapping the path builder uses, so grid
    /// and curve agree under flat and inverted scales.
    pub fn lines(&self, step: ScaleStep) -> ChartResult<Vec<LegendLine>> {
        let mapping = step.mapping(self.scale_min);
        let lines = self
            .values()?
            .into_iter()
            .enumerate()
            .map(|(level, value)| LegendLine {
                level,
                value,
                y_position: mapping.to_view_y(value),
                label: format!("{:.*}", self.precision, value),
            })
            .collect::<Vec<_>>();
        tracing::trace!(count = lines.len(), "legend lines computed");
        Ok(lines)
    }

    fn checked_increments(&self) -> ChartResult<usize> {
        if self.increments < 1 {
            return Err(ChartError::InvalidConfiguration { increments: self.increments });
        }
        usize::try_from(self.increments)
            .map_err(|_| ChartError::InvalidConfiguration { increments: self.increments })
    }
}
