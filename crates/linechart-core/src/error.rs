// File: crates/linechart-core/src/error.rs
// Summary: Error taxonomy for the geometry engine.

use thiserror::Error;

/// Errors raised by the core. Degenerate inputs (empty series, flat or
/// inverted scales) are not errors; they produce minimal geometry instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Legend grid requested with fewer than one increment.
    #[error("invalid configuration: legend increments must be >= 1, got {increments}")]
    InvalidConfiguration { increments: i64 },
    /// Frame rejected by [`Frame::try_new`](crate::Frame::try_new).
    #[error("invalid frame {width}x{height}: dimensions must be finite and non-negative")]
    InvalidFrame { width: f64, height: f64 },
}

pub type ChartResult<T> = Result<T, ChartError>;
