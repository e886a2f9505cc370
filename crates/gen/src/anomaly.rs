//! Anomaly injection and the naive threshold detector.

use crate::series::TimeSeriesPoint;
use alloc::vec::Vec;
use libm::fabs;

/// Options for `inject_anomaly`.
#[derive(Clone, Copy, Debug)]
pub struct AnomalyOptions {
    /// Center of the spike.
    pub index: usize,
    /// Peak height added at the center.
    pub magnitude: f64,
    /// Number of neighbors on each side that receive a partial spike.
    pub spread: usize,
}

impl AnomalyOptions {
    /// Creates options with the standard spread of 1.
    pub fn new(index: usize, magnitude: f64) -> Self {
        Self {
            index,
            magnitude,
            spread: 1,
        }
    }

    /// Sets the spread.
    pub fn with_spread(mut self, spread: usize) -> Self {
        self.spread = spread;
        self
    }
}

/// Adds a triangular-weighted spike around `options.index`.
///
/// Offsets `-spread..=spread` receive `magnitude * (1 - |offset| / (spread + 1))`;
/// offsets falling outside the series are clipped. Returns a new series of
/// the same length, leaving the input unmodified.
pub fn inject_anomaly(series: &[TimeSeriesPoint], options: &AnomalyOptions) -> Vec<TimeSeriesPoint> {
    let mut output: Vec<TimeSeriesPoint> = series.to_vec();
    let spread = options.spread as isize;

    for offset in -spread..=spread {
        let target = options.index as isize + offset;
        if target < 0 || target as usize >= output.len() {
            continue;
        }
        let weight = 1.0 - offset.unsigned_abs() as f64 / (options.spread + 1) as f64;
        output[target as usize].value += options.magnitude * weight;
    }

    output
}

/// Labels each point 1 when it deviates from the baseline by more than
/// `threshold`, 0 otherwise.
///
/// This is the placeholder detector the game ships while players have not
/// authored a model of their own; it doubles as a realistic source of
/// predicted labels in tests.
pub fn threshold_labels(series: &[TimeSeriesPoint], baseline: f64, threshold: f64) -> Vec<u8> {
    series
        .iter()
        .map(|p| u8::from(fabs(p.value - baseline) > threshold))
        .collect()
}
