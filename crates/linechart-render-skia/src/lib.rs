// File: crates/linechart-render-skia/src/lib.rs
// Summary: Skia raster renderer for linechart-core geometry; owns the flip to top-left pixel space.

pub mod error;
pub mod options;
pub mod renderer;
pub mod text;

pub use error::{RenderError, RenderResult};
pub use options::{Insets, RenderOptions};
pub use renderer::{Rendered, RgbaFrame, SkiaRenderer};
pub use text::TextShaper;
