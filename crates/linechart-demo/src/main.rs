// File: crates/linechart-demo/src/main.rs
// Summary: Demo loads a (label, value) CSV and renders smoothed and linear charts to PNG,
// optionally reporting the readout under a pointer x.
//
// Usage: linechart-demo [CSV] [--pointer X] [--linear] [--increments N] [--scale MIN:MAX]

use anyhow::{Context, Result};
use clap::Parser;
use linechart_core::types::LEGEND_INCREMENTS;
use linechart_core::{ChartOptions, Interpolation, LineChart, Sample, SeriesModel};
use linechart_render_skia::{RenderOptions, SkiaRenderer};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "crates/linechart-demo/data/prices.csv";

#[derive(Debug, Parser)]
#[command(name = "linechart-demo")]
#[command(about = "Render a (label, value) CSV series as smoothed and linear line chart PNGs")]
struct Args {
    /// CSV with a `value` column and an optional `label` column
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
    /// Pointer x in pixels from the left edge of the content area; draws the value indicator
    #[arg(long = "pointer", allow_negative_numbers = true)]
    pointer_x: Option<f64>,
    /// Render only the linear variant
    #[arg(long = "linear")]
    linear_only: bool,
    /// Legend increments (must be >= 1)
    #[arg(long, default_value_t = LEGEND_INCREMENTS, allow_negative_numbers = true)]
    increments: i64,
    /// Explicit scale as MIN:MAX; MIN > MAX inverts the chart
    #[arg(long, value_parser = parse_scale, allow_hyphen_values = true)]
    scale: Option<(f64, f64)>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    info!(input = %args.input.display(), "using input file");

    let samples = load_samples_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    if samples.is_empty() {
        warn!("no rows loaded; rendering an empty chart");
    }
    info!(count = samples.len(), "loaded samples");

    let mut model = SeriesModel::new(samples);
    if let Some((min, max)) = args.scale {
        model = model.with_scale(min, max);
    }
    info!(scale_min = model.scale_min(), scale_max = model.scale_max(), "scale");

    let renderer = SkiaRenderer::new();
    let opts = RenderOptions { fill_area: true, ..RenderOptions::default() };

    let modes: &[Interpolation] = if args.linear_only {
        &[Interpolation::Linear]
    } else {
        &[Interpolation::Smoothed, Interpolation::Linear]
    };
    for &mode in modes {
        let options = ChartOptions::default().interpolation(mode).increments(args.increments);
        let chart = LineChart::with_options(model.clone(), options);
        let out = out_name_with(&args.input, &format!("{mode:?}").to_lowercase());
        let readout = renderer
            .render_to_png(&chart, &opts, args.pointer_x, &out)
            .with_context(|| format!("rendering {}", out.display()))?;
        println!("Wrote {}", out.display());

        match (args.pointer_x, readout) {
            (Some(x), Some(r)) => println!(
                "  pointer {x:.1}: #{} {} = {}",
                r.index,
                r.label.as_deref().unwrap_or("-"),
                r.formatted_value(chart.options().value_precision)
            ),
            (Some(x), None) => println!("  pointer {x:.1}: no point"),
            _ => {}
        }
    }
    Ok(())
}

fn parse_scale(s: &str) -> Result<(f64, f64), String> {
    let (lo, hi) = s.split_once(':').ok_or_else(|| format!("expected MIN:MAX, got '{s}'"))?;
    let lo = lo.trim().parse::<f64>().map_err(|e| format!("bad scale min '{lo}': {e}"))?;
    let hi = hi.trim().parse::<f64>().map_err(|e| format!("bad scale max '{hi}': {e}"))?;
    Ok((lo, hi))
}

/// Load rows with a `value` column and an optional `label` column. A file
/// with a single column is read as bare values.
fn load_samples_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let find = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_value = find(&["value", "close", "y"]).unwrap_or(headers.len().saturating_sub(1));
    let i_label = find(&["label", "name", "date", "x"]);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(value) = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()) else {
            warn!(row, "skipping row without a numeric value");
            continue;
        };
        if !value.is_finite() {
            warn!(row, value, "skipping non-finite value");
            continue;
        }
        let sample = match i_label.and_then(|i| rec.get(i)) {
            Some(label) if !label.trim().is_empty() => Sample::labeled(value, label.trim()),
            _ => Sample::new(value),
        };
        out.push(sample);
    }
    Ok(out)
}

/// Produce output file name like target/out/linechart_<stem>_<suffix>.png
fn out_name_with(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("linechart_{stem}_{suffix}.png"))
}
