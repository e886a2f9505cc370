//! Dataduel Gen - Deterministic generators for Dataduel rounds.
//!
//! This crate produces every synthetic input a round needs:
//!
//! - `rng`: seeded pseudo-random stream and challenge-key seed derivation
//! - `dataset`: the fixed-size incident table and expected-answer derivation
//! - `series`: baseline time series with gaussian noise and drift
//! - `anomaly`: localized spike injection and the naive threshold detector
//!
//! Everything here is a pure function of its seed/options: the same inputs
//! produce byte-identical output on every platform.

#![no_std]

extern crate alloc;

mod anomaly;
mod dataset;
mod rng;
mod series;

pub use anomaly::{inject_anomaly, threshold_labels, AnomalyOptions};
pub use dataset::{derive_expected, generate_dataset, DATASET_SIZE};
pub use rng::{derive_seed, SeededRng};
pub use series::{generate_time_series, SeriesOptions, TimeSeriesPoint};
