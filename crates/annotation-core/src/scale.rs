// File: crates/annotation-core/src/scale.rs
// Summary: Axis scale trait plus linear/log10/temporal pixel mappings.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Data-space value along an axis (quantity, index, or epoch milliseconds).
pub type Value = f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
    /// Timestamp domain. Temporal scales cannot honor point-style pixel
    /// fallback, so range derivation skips axes of this kind.
    Temporal,
}

/// Value <-> pixel mapping exposed by the host chart for one axis.
pub trait AxisScale {
    fn kind(&self) -> ScaleKind;
    fn pixel_for_value(&self, value: Value) -> f64;
    fn value_for_pixel(&self, px: f64) -> Value;
}

#[derive(Debug, Error)]
pub enum ScaleError {
    #[error("temporal scale domain is empty: {start} >= {end}")]
    EmptyDomain { start: DateTime<Utc>, end: DateTime<Utc> },
}

/// Linear (or log10) scale mapping a value domain to a pixel interval.
/// `px_start`/`px_end` may run in either direction; a screen-space y axis
/// typically maps `v_min` to the bottom pixel and `v_max` to the top.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f64,
    pub px_end: f64,
    pub v_min: Value,
    pub v_max: Value,
    log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl LinearScale {
    pub fn new(px_start: f64, px_end: f64, v_min: Value, v_max: Value) -> Self {
        let mut s = Self { px_start, px_end, v_min, v_max, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.v_max - s.v_min).abs() < 1e-12 { s.v_max = s.v_min + 1.0; }
        s
    }

    pub fn new_log10(px_start: f64, px_end: f64, mut v_min: Value, mut v_max: Value) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        v_min = if v_min <= eps { eps } else { v_min };
        v_max = if v_max <= v_min { v_min * 10.0 } else { v_max };
        let log_min = v_min.log10();
        let log_max = v_max.log10();
        Self { px_start, px_end, v_min, v_max, log: true, log_min, log_max }
    }

    #[inline]
    fn fraction_of(&self, v: Value) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-12).log10() - self.log_min) / span
        } else {
            let span = (self.v_max - self.v_min).max(1e-12);
            (v - self.v_min) / span
        }
    }
}

impl AxisScale for LinearScale {
    fn kind(&self) -> ScaleKind {
        if self.log { ScaleKind::Log10 } else { ScaleKind::Linear }
    }

    #[inline]
    fn pixel_for_value(&self, value: Value) -> f64 {
        self.px_start + self.fraction_of(value) * (self.px_end - self.px_start)
    }

    #[inline]
    fn value_for_pixel(&self, px: f64) -> Value {
        let px_span = self.px_end - self.px_start;
        let frac = if px_span.abs() < 1e-12 { 0.0 } else { (px - self.px_start) / px_span };
        if self.log {
            10f64.powf(self.log_min + frac * (self.log_max - self.log_min))
        } else {
            self.v_min + frac * (self.v_max - self.v_min)
        }
    }
}

/// Temporal scale over a UTC timestamp domain; values are epoch milliseconds.
#[derive(Clone, Copy, Debug)]
pub struct TemporalScale {
    pub px_start: f64,
    pub px_end: f64,
    start_ms: f64,
    end_ms: f64,
}

impl TemporalScale {
    pub fn new(
        px_start: f64,
        px_end: f64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, ScaleError> {
        if start >= end {
            return Err(ScaleError::EmptyDomain { start, end });
        }
        Ok(Self {
            px_start,
            px_end,
            start_ms: start.timestamp_millis() as f64,
            end_ms: end.timestamp_millis() as f64,
        })
    }
}

impl AxisScale for TemporalScale {
    fn kind(&self) -> ScaleKind { ScaleKind::Temporal }

    #[inline]
    fn pixel_for_value(&self, value: Value) -> f64 {
        let span = (self.end_ms - self.start_ms).max(1e-12);
        self.px_start + (value - self.start_ms) / span * (self.px_end - self.px_start)
    }

    #[inline]
    fn value_for_pixel(&self, px: f64) -> Value {
        let px_span = self.px_end - self.px_start;
        let frac = if px_span.abs() < 1e-12 { 0.0 } else { (px - self.px_start) / px_span };
        self.start_ms + frac * (self.end_ms - self.start_ms)
    }
}
