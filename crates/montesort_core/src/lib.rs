//! Numerical experiments library
//!
//! This crate provides the core of two independent, offline experiments:
//! - Monte Carlo estimation of the area shared by three circles, sampled
//!   from a wide and from a tight bounding rectangle
//! - A sorting benchmark comparing top-down merge sort with a hybrid that
//!   switches to insertion sort below a length threshold
//!
//! Both experiments are deterministic for a given seed: every random draw
//! comes from an explicitly passed, explicitly seeded generator.
//!
//! ```ignore
//! use montesort_core::{MonteCarloConfig, MonteCarloExperiment, MemorySink};
//!
//! let experiment = MonteCarloExperiment::new(MonteCarloConfig::default())?;
//! let mut rows = MemorySink::new();
//! experiment.run(&mut rows)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod arrays;
pub mod error;
pub mod estimator;
pub mod experiments;
pub mod geometry;
pub mod rng;
pub mod sink;
pub mod sorting;
pub mod timing;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use arrays::{ArrayGenerator, InputKind};
pub use config::{MonteCarloConfig, SortBenchConfig, Sweep};
pub use error::{ExperimentError, Result};
pub use experiments::{
    AreaRow, MonteCarloExperiment, SortBenchmark, SortCase, TimingRow, run_sweep,
};
pub use geometry::{Circle, Point, Rect};
pub use sink::{CsvSink, MemorySink, ResultSink, Row};
pub use sorting::SortAlgorithm;
