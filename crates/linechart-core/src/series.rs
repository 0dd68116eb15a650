// File: crates/linechart-core/src/series.rs
// Summary: Series model: ordered samples (value + optional label) and the display scale.
// Notes:
// - The model is read-only once built. Callers replace it wholesale when data changes.
// - Index position is the x axis; insertion order is preserved.

/// One data value at a fixed index position.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    value: f64,
    label: Option<String>,
}

impl Sample {
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    pub fn labeled(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: Some(label.into()) }
    }

    pub fn value(&self) -> f64 { self.value }

    pub fn label(&self) -> Option<&str> { self.label.as_deref() }
}

impl From<f64> for Sample {
    fn from(value: f64) -> Self { Self::new(value) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesModel {
    samples: Vec<Sample>,
    scale_min: f64,
    scale_max: f64,
}

impl SeriesModel {
    /// Build a model whose scale is derived from the sample values
    /// (`0..0` for an empty series).
    pub fn new(samples: Vec<Sample>) -> Self {
        let (scale_min, scale_max) = value_bounds(&samples);
        tracing::debug!(count = samples.len(), scale_min, scale_max, "series model built");
        Self { samples, scale_min, scale_max }
    }

    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(values.into_iter().map(Sample::new).collect())
    }

    pub fn from_labeled<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(label, value)| Sample::labeled(value, label)).collect())
    }

    /// Replace the derived scale with an explicit one. `min > max` is an
    /// inverted scale and is kept as given.
    pub fn with_scale(mut self, min: f64, max: f64) -> Self {
        self.scale_min = min;
        self.scale_max = max;
        self
    }

    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub fn samples(&self) -> &[Sample] { &self.samples }

    pub fn sample(&self, index: usize) -> Option<&Sample> { self.samples.get(index) }

    /// Values stripped of their labels, in index order.
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(Sample::value).collect()
    }

    pub fn scale_min(&self) -> f64 { self.scale_min }

    pub fn scale_max(&self) -> f64 { self.scale_max }

    /// Signed scale range (`max - min`); negative for an inverted scale.
    pub fn range(&self) -> f64 { self.scale_max - self.scale_min }

    pub fn is_inverted(&self) -> bool { self.scale_min > self.scale_max }
}

fn value_bounds(samples: &[Sample]) -> (f64, f64) {
    if samples.is_empty() {
        return (0.0, 0.0);
    }
    samples.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
        (lo.min(s.value), hi.max(s.value))
    })
}
