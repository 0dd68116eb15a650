// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; pure geometry for line charts.
//
// Data flow: SeriesModel + Frame -> ScaleStep -> PathBuilder -> Path -> PathQuery.
// LegendGrid depends only on the scale. Nothing here draws; renderers consume
// the returned geometry (view space, origin bottom-left, y up).

pub mod builder;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod query;
pub mod scale;
pub mod series;
pub mod types;

pub use builder::{Interpolation, PathBuilder, BASELINE_Y};
pub use chart::{ChartGeometry, ChartOptions, LineChart};
pub use error::{ChartError, ChartResult};
pub use geometry::{CubicBezier, Path, PathSegment};
pub use grid::{LegendGrid, LegendLine};
pub use query::{PathQuery, Readout};
pub use scale::{ScaleStep, ScaleTransform, ValueMapping};
pub use series::{Sample, SeriesModel};
pub use types::{Frame, Point};
