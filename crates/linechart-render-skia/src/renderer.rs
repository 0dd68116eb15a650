// File: crates/linechart-render-skia/src/renderer.rs
// Summary: Paints chart geometry (legend grid, area, curve, indicator) onto a CPU raster surface.

use skia_safe as skia;

use linechart_core::{ChartGeometry, LineChart, Path, PathSegment, Point, Readout};

use crate::error::{RenderError, RenderResult};
use crate::options::RenderOptions;
use crate::text::TextShaper;

const LEGEND_DASH: [f32; 2] = [5.0, 10.0];
const LEGEND_FONT_SIZE: f32 = 11.0;
const INDICATOR_RADIUS: f32 = 6.0;

/// Tightly packed RGBA8 pixels (unpremultiplied).
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

/// Result of one render pass.
pub struct Rendered {
    pub frame: RgbaFrame,
    pub readout: Option<Readout>,
}

/// Converts bottom-left view space to top-left pixel space.
#[derive(Clone, Copy, Debug)]
struct ViewToPixel {
    left: f32,
    bottom: f32,
}

impl ViewToPixel {
    #[inline]
    fn map(&self, p: Point) -> skia::Point {
        skia::Point::new(self.left + p.x as f32, self.bottom - p.y as f32)
    }
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Render `chart` into an RGBA buffer. With `pointer_x` (pixels from the
    /// left edge of the content area) the value indicator is drawn and the
    /// matching readout returned.
    pub fn render_rgba8(
        &self,
        chart: &LineChart,
        opts: &RenderOptions,
        pointer_x: Option<f64>,
    ) -> RenderResult<Rendered> {
        let geometry = chart.geometry(opts.content_frame()?)?;
        let readout = pointer_x.and_then(|x| chart.readout_at_pointer(&geometry, x));

        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        {
            let canvas = surface.canvas();
            canvas.clear(opts.background);

            let left = opts.insets.left as f32;
            let bottom = (opts.height - opts.insets.bottom as i32) as f32;
            let px = ViewToPixel { left: left + chart.options().legend_gutter as f32, bottom };

            self.draw_legend(canvas, &geometry, px, left, readout.is_some(), opts);
            if opts.fill_area {
                draw_area(canvas, &geometry.closed_path, px, opts);
            }
            draw_curve(canvas, &geometry.path, px, opts);
            if let Some(r) = &readout {
                draw_indicator(canvas, px.map(r.point), opts);
            }
        }

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        tracing::debug!(width = opts.width, height = opts.height, indicator = readout.is_some(), "chart rendered");

        Ok(Rendered {
            frame: RgbaFrame { pixels, width: opts.width as u32, height: opts.height as u32, stride },
            readout,
        })
    }

    pub fn render_png_bytes(
        &self,
        chart: &LineChart,
        opts: &RenderOptions,
        pointer_x: Option<f64>,
    ) -> RenderResult<Vec<u8>> {
        let rendered = self.render_rgba8(chart, opts, pointer_x)?;
        encode_png(rendered.frame)
    }

    /// Render to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        chart: &LineChart,
        opts: &RenderOptions,
        pointer_x: Option<f64>,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> RenderResult<Option<Readout>> {
        let rendered = self.render_rgba8(chart, opts, pointer_x)?;
        let readout = rendered.readout;
        let bytes = encode_png(rendered.frame)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(readout)
    }

    fn draw_legend(
        &self,
        canvas: &skia::Canvas,
        geometry: &ChartGeometry,
        px: ViewToPixel,
        label_x: f32,
        indicator_active: bool,
        opts: &RenderOptions,
    ) {
        let right = px.left + geometry.plot_frame.width as f32;
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.5);
        paint.set_stroke_cap(skia::paint::Cap::Round);
        paint.set_color(opts.legend_line);

        for line in &geometry.legend {
            let y = px.map(Point::new(0.0, line.y_position)).y;
            if line.visible(indicator_active) {
                let effect = if line.is_baseline() {
                    None
                } else {
                    skia::PathEffect::dash(&LEGEND_DASH, 0.0)
                };
                paint.set_path_effect(effect);
                canvas.draw_line((px.left, y), (right, y), &paint);
            }
            if opts.draw_labels {
                self.shaper.draw_centered_left(canvas, &line.label, label_x, y, LEGEND_FONT_SIZE, opts.legend_text);
            }
        }
    }
}

fn to_skia_path(path: &Path, px: ViewToPixel) -> skia::Path {
    let mut out = skia::Path::new();
    for seg in path.segments() {
        match *seg {
            PathSegment::MoveTo(p) => {
                out.move_to(px.map(p));
            }
            PathSegment::LineTo(p) => {
                out.line_to(px.map(p));
            }
            PathSegment::CubicTo { control1, control2, to } => {
                out.cubic_to(px.map(control1), px.map(control2), px.map(to));
            }
            PathSegment::Close => {
                out.close();
            }
        }
    }
    out
}

fn draw_area(canvas: &skia::Canvas, closed: &Path, px: ViewToPixel, opts: &RenderOptions) {
    if closed.is_empty() {
        return;
    }
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(opts.area_fill);
    canvas.draw_path(&to_skia_path(closed, px), &fill);
}

fn draw_curve(canvas: &skia::Canvas, path: &Path, px: ViewToPixel, opts: &RenderOptions) {
    if path.is_empty() {
        return;
    }
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(opts.line_width);
    stroke.set_stroke_join(skia::paint::Join::Round);
    // Round caps make a single-sample path show up as a dot.
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_color(opts.line_stroke);
    canvas.draw_path(&to_skia_path(path, px), &stroke);
}

fn draw_indicator(canvas: &skia::Canvas, center: skia::Point, opts: &RenderOptions) {
    let mut knob = skia::Paint::default();
    knob.set_anti_alias(true);
    knob.set_style(skia::paint::Style::Fill);
    knob.set_color(opts.indicator);
    canvas.draw_circle(center, INDICATOR_RADIUS, &knob);

    knob.set_style(skia::paint::Style::Stroke);
    knob.set_stroke_width(2.0);
    knob.set_color(opts.line_stroke);
    canvas.draw_circle(center, INDICATOR_RADIUS, &knob);
}

fn encode_png(frame: RgbaFrame) -> RenderResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.pixels)
        .ok_or(RenderError::ReadPixels)?;
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)?;
    Ok(out.into_inner())
}
