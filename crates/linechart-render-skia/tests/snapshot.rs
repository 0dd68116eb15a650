// File: crates/linechart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if the snapshot exists, compares decoded pixels for an exact match.
// - Else, logs a note and returns without failing.

use linechart_core::{ChartOptions, Interpolation, LineChart, SeriesModel};
use linechart_render_skia::{RenderOptions, SkiaRenderer};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(mode: Interpolation, pointer_x: Option<f64>) -> Vec<u8> {
    let model = SeriesModel::from_values([275.0, 282.5, 284.5, 283.5, 285.0, 288.7, 286.4, 300.0])
        .with_scale(250.0, 300.0);
    let chart = LineChart::with_options(model, ChartOptions::default().interpolation(mode).increments(5));
    let opts = RenderOptions { draw_labels: false, fill_area: true, ..RenderOptions::default() };
    SkiaRenderer::new().render_png_bytes(&chart, &opts, pointer_x).expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_smoothed() {
    write_or_compare(&snapshot_path("smoothed.png"), &render(Interpolation::Smoothed, None));
}

#[test]
fn golden_linear_with_indicator() {
    write_or_compare(&snapshot_path("linear_indicator.png"), &render(Interpolation::Linear, Some(300.0)));
}
