//! Experiment configuration
//!
//! Both experiments run a fixed sweep. The `Default` impls below are those
//! sweeps; the types exist so that tests can run the same drivers over
//! smaller, contrived parameter sets.

use serde::{Deserialize, Serialize};

use crate::arrays::InputKind;
use crate::error::{ExperimentError, Result};
use crate::geometry::{Circle, Rect};
use crate::rng::DEFAULT_SEED;

/// Inclusive arithmetic progression `start, start + step, ..` up to `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sweep {
    pub start: usize,
    pub step: usize,
    pub end: usize,
}

impl Sweep {
    pub const fn new(start: usize, step: usize, end: usize) -> Self {
        Self { start, step, end }
    }

    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(ExperimentError::invalid("sweep", "step must be positive"));
        }
        if self.start > self.end {
            return Err(ExperimentError::invalid(
                "sweep",
                format!("start {} is past end {}", self.start, self.end),
            ));
        }
        if self.is_empty() {
            return Err(ExperimentError::invalid(
                "sweep",
                "number of values does not fit in usize",
            ));
        }
        Ok(())
    }

    /// Values of the progression; empty if the sweep is invalid
    pub fn iter(&self) -> impl Iterator<Item = usize> + use<> {
        let Sweep { start, step, .. } = *self;
        (0..self.len()).map(move |i| start + i * step)
    }

    /// Number of values; 0 if the sweep is invalid
    pub fn len(&self) -> usize {
        if self.step == 0 || self.start > self.end {
            return 0;
        }
        ((self.end - self.start) / self.step)
            .checked_add(1)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Exact area of the default triple intersection, `π/4 + 1.25·asin(0.8) - 1`
pub fn default_exact_area() -> f64 {
    0.25 * std::f64::consts::PI + 1.25 * 0.8_f64.asin() - 1.0
}

/// Monte Carlo area experiment parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloConfig {
    pub circles: [Circle; 3],
    /// Exact area of the intersection, the reference for relative errors
    pub exact_area: f64,
    /// Loose sampling domain; the tight one is derived from the circles
    pub wide: Rect,
    /// Sample counts
    pub samples: Sweep,
    /// Every estimate draws from a fresh generator seeded with this value
    pub seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        let r = 5.0_f64.sqrt() / 2.0;
        Self {
            circles: [
                Circle {
                    x: 1.0,
                    y: 1.0,
                    r: 1.0,
                },
                Circle { x: 1.5, y: 2.0, r },
                Circle { x: 2.0, y: 1.5, r },
            ],
            exact_area: default_exact_area(),
            wide: Rect {
                min_x: 0.0,
                max_x: 3.0,
                min_y: 0.0,
                max_y: 3.0,
            },
            samples: Sweep::new(100, 500, 100_000),
            seed: DEFAULT_SEED,
        }
    }
}

impl MonteCarloConfig {
    pub fn validate(&self) -> Result<()> {
        for circle in &self.circles {
            circle.validate()?;
        }
        self.wide.validate()?;
        self.samples.validate()?;
        if self.samples.start == 0 {
            return Err(ExperimentError::invalid(
                "sample count",
                "the sweep must start at one sample or more",
            ));
        }
        if !(self.exact_area.is_finite() && self.exact_area > 0.0) {
            return Err(ExperimentError::invalid(
                "exact area",
                format!("{} must be positive", self.exact_area),
            ));
        }
        Ok(())
    }
}

/// Sorting benchmark parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortBenchConfig {
    /// Array sizes; `sizes.end` is also the length of the base sequences
    pub sizes: Sweep,
    /// Timed runs averaged per case
    pub runs: usize,
    /// Elements are drawn from `0..=max_value`
    pub max_value: i32,
    /// Insertion-sort cutoffs for the hybrid variant
    pub thresholds: Vec<usize>,
    pub kinds: Vec<InputKind>,
    pub seed: u64,
}

impl Default for SortBenchConfig {
    fn default() -> Self {
        Self {
            sizes: Sweep::new(500, 100, 100_000),
            runs: 5,
            max_value: 6000,
            thresholds: vec![5, 10, 15, 20, 30, 50],
            kinds: InputKind::ALL.to_vec(),
            seed: DEFAULT_SEED,
        }
    }
}

impl SortBenchConfig {
    pub fn validate(&self) -> Result<()> {
        self.sizes.validate()?;
        if self.runs == 0 {
            return Err(ExperimentError::invalid(
                "run count",
                "at least one timed run is required",
            ));
        }
        if self.max_value < 0 {
            return Err(ExperimentError::invalid(
                "max value",
                format!("{} is negative", self.max_value),
            ));
        }
        Ok(())
    }

    /// Number of rows a full run produces
    pub fn case_count(&self) -> usize {
        self.kinds.len() * self.sizes.len() * (1 + self.thresholds.len())
    }
}
