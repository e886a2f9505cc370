//! Baseline time-series generation.
//!
//! A series is a contiguous run of points `baseline + drift * i + noise`,
//! where the noise term is gaussian (Box-Muller over two uniform draws).

use crate::rng::SeededRng;
use alloc::vec::Vec;
use core::f64::consts::PI;
use libm::{cos, log, sqrt};

/// One point of a time series.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeSeriesPoint {
    /// Position in the series, contiguous from 0.
    pub index: usize,
    /// Observed value.
    pub value: f64,
}

/// Options for `generate_time_series`.
#[derive(Clone, Copy, Debug)]
pub struct SeriesOptions {
    /// Number of points.
    pub length: usize,
    /// Constant level the series oscillates around.
    pub baseline: f64,
    /// Gaussian noise amplitude. Zero yields an exact deterministic ramp.
    pub noise: f64,
    /// Linear trend added per step.
    pub drift: f64,
}

impl SeriesOptions {
    /// Creates options with the standard baseline (100), noise (2) and
    /// no drift.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            baseline: 100.0,
            noise: 2.0,
            drift: 0.0,
        }
    }

    /// Sets the baseline level.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the noise amplitude.
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    /// Sets the per-step drift.
    pub fn with_drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }
}

/// Generates a time series from the options and a seeded stream.
///
/// A zero length yields an empty series.
pub fn generate_time_series(options: &SeriesOptions, rng: &mut SeededRng) -> Vec<TimeSeriesPoint> {
    let mut series = Vec::with_capacity(options.length);
    for index in 0..options.length {
        let trend = options.drift * index as f64;
        let value = options.baseline + trend + gaussian_noise(options.noise, rng);
        series.push(TimeSeriesPoint { index, value });
    }
    series
}

/// One gaussian draw via the Box-Muller transform.
///
/// Both uniforms are guarded away from exactly 0 to keep the logarithm
/// finite.
fn gaussian_noise(amplitude: f64, rng: &mut SeededRng) -> f64 {
    let u = guard_zero(rng.next_uniform());
    let v = guard_zero(rng.next_uniform());
    let z = sqrt(-2.0 * log(u)) * cos(2.0 * PI * v);
    z * amplitude
}

fn guard_zero(u: f64) -> f64 {
    if u > 0.0 {
        u
    } else {
        1e-12
    }
}
