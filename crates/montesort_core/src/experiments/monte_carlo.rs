use serde::Serialize;

use crate::config::MonteCarloConfig;
use crate::error::Result;
use crate::estimator::{estimate_area, relative_error};
use crate::geometry::Rect;
use crate::rng::seeded_rng;
use crate::sink::{ResultSink, Row};

use super::run_sweep;

/// Wide and narrow estimates for one sample count
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaRow {
    pub n: usize,
    pub area_wide: f64,
    pub relerr_wide: f64,
    pub area_narrow: f64,
    pub relerr_narrow: f64,
}

impl Row for AreaRow {
    const HEADER: &'static [&'static str] =
        &["N", "area_wide", "relerr_wide", "area_narrow", "relerr_narrow"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.n.to_string(),
            self.area_wide.to_string(),
            self.relerr_wide.to_string(),
            self.area_narrow.to_string(),
            self.relerr_narrow.to_string(),
        ]
    }
}

/// Convergence of the area estimate under a wide and a tight sampling
/// rectangle
#[derive(Debug, Clone)]
pub struct MonteCarloExperiment {
    config: MonteCarloConfig,
    narrow: Rect,
}

impl MonteCarloExperiment {
    pub fn new(config: MonteCarloConfig) -> Result<Self> {
        config.validate()?;
        let narrow = Rect::enclosing_intersection(&config.circles)?;
        Ok(Self { config, narrow })
    }

    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    pub fn wide(&self) -> Rect {
        self.config.wide
    }

    /// Overlap of the circles' bounding boxes
    pub fn narrow(&self) -> Rect {
        self.narrow
    }

    pub fn exact_area(&self) -> f64 {
        self.config.exact_area
    }

    /// Estimate the area within `rect` from `n` samples.
    ///
    /// Each call starts from a freshly seeded generator, so the estimate for
    /// a given `n` does not depend on which estimates ran before it.
    pub fn estimate(&self, rect: &Rect, n: usize) -> Result<f64> {
        let mut rng = seeded_rng(self.config.seed);
        estimate_area(&self.config.circles, rect, n, &mut rng)
    }

    /// Both estimates and their relative errors for `n` samples
    pub fn measure(&self, n: usize) -> Result<AreaRow> {
        let exact = self.exact_area();
        let area_wide = self.estimate(&self.config.wide, n)?;
        let area_narrow = self.estimate(&self.narrow, n)?;
        Ok(AreaRow {
            n,
            area_wide,
            relerr_wide: relative_error(area_wide, exact)?,
            area_narrow,
            relerr_narrow: relative_error(area_narrow, exact)?,
        })
    }

    /// Run the configured sample-count sweep into `sink`
    pub fn run<S: ResultSink<AreaRow>>(&self, sink: S) -> Result<usize> {
        tracing::debug!(
            points = self.config.samples.len(),
            exact = self.exact_area(),
            narrow = ?self.narrow,
            "starting Monte Carlo sweep"
        );
        run_sweep(self.config.samples.iter(), |&n| self.measure(n), sink)
    }
}
