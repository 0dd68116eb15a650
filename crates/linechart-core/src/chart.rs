// File: crates/linechart-core/src/chart.rs
// Summary: LineChart: runs scaler, path builder and legend grid for one frame; answers pointer readouts.

use crate::builder::{Interpolation, PathBuilder};
use crate::error::ChartResult;
use crate::geometry::Path;
use crate::grid::{LegendGrid, LegendLine};
use crate::query::{PathQuery, Readout};
use crate::scale::ScaleStep;
use crate::series::SeriesModel;
use crate::types::{Frame, LEGEND_GUTTER, LEGEND_INCREMENTS};

/// Per-chart parameters, all in memory.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub interpolation: Interpolation,
    /// Legend increments; must be >= 1 when geometry is produced.
    pub increments: i64,
    /// Decimals for legend labels and readout values.
    pub value_precision: usize,
    /// Space left of the plot reserved for legend labels.
    pub legend_gutter: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            interpolation: Interpolation::Smoothed,
            increments: LEGEND_INCREMENTS,
            value_precision: 1,
            legend_gutter: LEGEND_GUTTER,
        }
    }
}

impl ChartOptions {
    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn increments(mut self, increments: i64) -> Self {
        self.increments = increments;
        self
    }

    pub fn value_precision(mut self, precision: usize) -> Self {
        self.value_precision = precision;
        self
    }

    pub fn legend_gutter(mut self, gutter: f64) -> Self {
        self.legend_gutter = gutter;
        self
    }
}

/// Everything a renderer needs for one frame, in plot view space.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub plot_frame: Frame,
    pub step: ScaleStep,
    pub path: Path,
    pub closed_path: Path,
    pub legend: Vec<LegendLine>,
}

/// Stateless pipeline over an immutable series snapshot. Call
/// [`geometry`](Self::geometry) again whenever the frame or the model changes.
#[derive(Clone, Debug)]
pub struct LineChart {
    model: SeriesModel,
    options: ChartOptions,
}

impl LineChart {
    pub fn new(model: SeriesModel) -> Self {
        Self::with_options(model, ChartOptions::default())
    }

    pub fn with_options(model: SeriesModel, options: ChartOptions) -> Self {
        Self { model, options }
    }

    pub fn model(&self) -> &SeriesModel { &self.model }

    pub fn options(&self) -> &ChartOptions { &self.options }

    /// Plot area: `frame` minus the legend gutter.
    pub fn plot_frame(&self, frame: Frame) -> Frame {
        frame.inset_left(self.options.legend_gutter)
    }

    pub fn geometry(&self, frame: Frame) -> ChartResult<ChartGeometry> {
        let plot_frame = self.plot_frame(frame);
        let step = ScaleStep::compute(plot_frame, &self.model);

        // Validate before building paths so a bad config yields no partial output.
        let legend = LegendGrid::for_model(&self.model, self.options.increments)
            .precision(self.options.value_precision)
            .lines(step)?;

        let builder = PathBuilder::new(&self.model, step).interpolation(self.options.interpolation);
        let path = builder.build_open();
        let closed_path = builder.build_closed();

        tracing::debug!(
            samples = self.model.len(),
            step_width = step.step_width,
            step_height = step.step_height,
            segments = path.len(),
            legend = legend.len(),
            "chart geometry computed"
        );
        Ok(ChartGeometry { plot_frame, step, path, closed_path, legend })
    }

    /// Readout for a plot-space x. `None` outside the curve's domain.
    pub fn readout(&self, geometry: &ChartGeometry, x: f64) -> Option<Readout> {
        let point = PathQuery::new(&geometry.path).nearest(x)?;
        let mapping = geometry.step.mapping(self.model.scale_min());
        let readout = Readout::resolve(&self.model, &mapping, point)?;
        tracing::trace!(x, index = readout.index, value = readout.value, "readout");
        Some(readout)
    }

    /// Readout for a pointer x measured from the left edge of the full frame.
    pub fn readout_at_pointer(&self, geometry: &ChartGeometry, pointer_x: f64) -> Option<Readout> {
        self.readout(geometry, pointer_x - self.options.legend_gutter)
    }
}
