// File: crates/linechart-render-skia/tests/smoke.rs
// Purpose: Render passes succeed for regular and degenerate series and report readouts.

use linechart_core::{ChartError, ChartOptions, Interpolation, LineChart, SeriesModel};
use linechart_render_skia::{Insets, RenderError, RenderOptions, RgbaFrame, SkiaRenderer};
use skia_safe as skia;

fn quiet_opts() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() }
}

#[test]
fn render_png_bytes_has_header() {
    let chart = LineChart::new(SeriesModel::from_values([8.0, 23.0, 54.0, 32.0, 12.0, 37.0, 7.0]));
    let bytes = SkiaRenderer::new()
        .render_png_bytes(&chart, &quiet_opts(), None)
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn rgba_buffer_shape() {
    let chart = LineChart::new(SeriesModel::from_values([0.0, 1.0]));
    let opts = quiet_opts();
    let rendered = SkiaRenderer::new().render_rgba8(&chart, &opts, None).expect("rgba render");
    let f = rendered.frame;
    assert_eq!(f.width as usize * f.height as usize * 4, f.pixels.len());
    assert_eq!(f.stride, f.width as usize * 4);
    // Opaque background in the top-left pixel.
    assert_eq!(f.pixels[3], 255);
}

#[test]
fn degenerate_series_render() {
    let renderer = SkiaRenderer::new();
    let opts = RenderOptions { fill_area: true, ..quiet_opts() };
    for values in [vec![], vec![5.0], vec![2.0, 2.0, 2.0]] {
        let chart = LineChart::new(SeriesModel::from_values(values));
        renderer.render_rgba8(&chart, &opts, Some(100.0)).expect("render degenerate");
    }
}

#[test]
fn pointer_readout_matches_sample() {
    let model = SeriesModel::from_labeled([("jan", 1.0), ("feb", 3.0), ("mar", 2.0)]);
    let chart = LineChart::with_options(
        model,
        ChartOptions::default().interpolation(Interpolation::Linear).legend_gutter(40.0),
    );
    let opts = quiet_opts();
    let plot_w = opts.content_frame().expect("content frame").width - 40.0;

    let rendered = SkiaRenderer::new()
        .render_rgba8(&chart, &opts, Some(40.0 + plot_w / 2.0))
        .expect("render");
    let r = rendered.readout.expect("readout");
    assert_eq!(r.index, 1);
    assert_eq!(r.label.as_deref(), Some("feb"));
    assert_eq!(r.formatted_value(1), "3.0");

    let rendered = SkiaRenderer::new().render_rgba8(&chart, &opts, Some(5.0)).expect("render");
    assert!(rendered.readout.is_none());
}

#[test]
fn invalid_increments_surface_as_error() {
    let chart = LineChart::with_options(
        SeriesModel::from_values([1.0, 2.0]),
        ChartOptions::default().increments(0),
    );
    let err = SkiaRenderer::new().render_rgba8(&chart, &quiet_opts(), None).err().expect("error");
    assert!(matches!(err, RenderError::Chart(ChartError::InvalidConfiguration { increments: 0 })));
}

#[test]
fn insets_wider_than_surface_fail() {
    let chart = LineChart::new(SeriesModel::from_values([1.0, 2.0]));
    let opts = RenderOptions { width: 40, insets: Insets::new(30, 30, 0, 0), ..quiet_opts() };
    let err = SkiaRenderer::new().render_rgba8(&chart, &opts, None).err().expect("error");
    assert!(matches!(err, RenderError::Chart(ChartError::InvalidFrame { .. })));
}

// 200x100 plot with no insets or gutter: view (x, y) lands on pixel (x, 100 - y).
// Legend lines share the background colour so only the series is visible.
fn pixel_opts() -> RenderOptions {
    RenderOptions {
        width: 200,
        height: 100,
        insets: Insets::new(0, 0, 0, 0),
        background: skia::Color::WHITE,
        legend_line: skia::Color::WHITE,
        line_stroke: skia::Color::from_argb(255, 0, 0, 255),
        area_fill: skia::Color::from_argb(255, 0, 200, 0),
        indicator: skia::Color::from_argb(255, 255, 0, 0),
        line_width: 6.0,
        ..quiet_opts()
    }
}

// Flat series at value 2 on a 0..10 scale: view y = 20, pixel row 80.
fn flat_chart() -> LineChart {
    LineChart::with_options(
        SeriesModel::from_values([2.0, 2.0, 2.0]).with_scale(0.0, 10.0),
        ChartOptions::default().interpolation(Interpolation::Linear).legend_gutter(0.0),
    )
}

fn rgb_at(frame: &RgbaFrame, x: usize, y: usize) -> (u8, u8, u8) {
    let i = y * frame.stride + x * 4;
    (frame.pixels[i], frame.pixels[i + 1], frame.pixels[i + 2])
}

fn assert_close(got: (u8, u8, u8), want: skia::Color, what: &str) {
    let want = (want.r(), want.g(), want.b());
    let near = |a: u8, b: u8| (a as i16 - b as i16).abs() <= 2;
    assert!(near(got.0, want.0) && near(got.1, want.1) && near(got.2, want.2), "{what}: got {got:?}, want {want:?}");
}

#[test]
fn curve_is_drawn_upright() {
    let opts = pixel_opts();
    let f = SkiaRenderer::new().render_rgba8(&flat_chart(), &opts, None).expect("render").frame;
    assert_close(rgb_at(&f, 100, 80), opts.line_stroke, "curve row");
    assert_close(rgb_at(&f, 100, 20), opts.background, "mirrored row stays empty");
    assert_close(rgb_at(&f, 100, 92), opts.background, "no fill when disabled");
}

#[test]
fn area_fill_sits_below_curve() {
    let opts = RenderOptions { fill_area: true, ..pixel_opts() };
    let f = SkiaRenderer::new().render_rgba8(&flat_chart(), &opts, None).expect("render").frame;
    assert_close(rgb_at(&f, 100, 92), opts.area_fill, "under the curve");
    assert_close(rgb_at(&f, 100, 40), opts.background, "above the curve");
    assert_close(rgb_at(&f, 100, 80), opts.line_stroke, "stroke over fill");
}

#[test]
fn indicator_marks_readout_point() {
    let opts = pixel_opts();
    let rendered = SkiaRenderer::new().render_rgba8(&flat_chart(), &opts, Some(100.0)).expect("render");
    let r = rendered.readout.expect("readout");
    assert_eq!((r.point.x, r.point.y), (100.0, 20.0));
    assert_eq!(r.index, 1);
    assert_close(rgb_at(&rendered.frame, 100, 80), opts.indicator, "indicator centre");
    assert_close(rgb_at(&rendered.frame, 40, 80), opts.line_stroke, "curve away from indicator");
}
