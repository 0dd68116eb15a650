// File: crates/linechart-render-skia/src/options.rs
// Summary: Surface size, margins and paint settings for the raster renderer.

use linechart_core::{ChartResult, Frame};
use skia_safe as skia;

/// Default surface width in pixels.
pub const WIDTH: i32 = 640;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 300;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(12, 16, 16, 16)
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub background: skia::Color,
    pub legend_line: skia::Color,
    pub legend_text: skia::Color,
    pub line_stroke: skia::Color,
    pub area_fill: skia::Color,
    pub indicator: skia::Color,
    pub line_width: f32,
    /// Fill the closed path under the curve.
    pub fill_area: bool,
    /// Legend labels need system fonts; turn off for pixel-stable output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            background: skia::Color::from_argb(255, 255, 255, 255),
            legend_line: skia::Color::from_argb(255, 224, 224, 224),
            legend_text: skia::Color::from_argb(255, 140, 140, 150),
            line_stroke: skia::Color::from_argb(255, 120, 80, 230),
            area_fill: skia::Color::from_argb(72, 120, 80, 230),
            indicator: skia::Color::from_argb(255, 255, 255, 255),
            line_width: 1.5,
            fill_area: false,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Drawable area inside the insets, in pixels. Fails when the insets
    /// exceed the surface.
    pub fn content_frame(&self) -> ChartResult<Frame> {
        let w = self.width as f64 - self.insets.hsum() as f64;
        let h = self.height as f64 - self.insets.vsum() as f64;
        Frame::try_new(w, h)
    }
}
