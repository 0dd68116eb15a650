// File: crates/linechart-render-skia/src/error.rs
// Summary: Renderer error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("PNG encoding failed")]
    Encode(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Chart(#[from] linechart_core::ChartError),
}

pub type RenderResult<T> = Result<T, RenderError>;
