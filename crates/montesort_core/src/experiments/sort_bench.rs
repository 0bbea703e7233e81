use serde::Serialize;

use crate::arrays::{ArrayGenerator, InputKind};
use crate::config::SortBenchConfig;
use crate::error::Result;
use crate::sink::{ResultSink, Row};
use crate::sorting::SortAlgorithm;
use crate::timing::time_average;

use super::run_sweep;

/// One benchmarked combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCase {
    pub kind: InputKind,
    pub n: usize,
    pub algorithm: SortAlgorithm,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingRow {
    pub kind: InputKind,
    pub n: usize,
    pub algorithm: SortAlgorithm,
    /// Mean wall-clock time in microseconds
    pub time: f64,
}

impl Row for TimingRow {
    const HEADER: &'static [&'static str] = &["type", "n", "algo", "threshold", "time"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.kind.label().to_string(),
            self.n.to_string(),
            self.algorithm.label().to_string(),
            self.algorithm.threshold().to_string(),
            self.time.to_string(),
        ]
    }
}

/// Standard versus hybrid merge sort over input kinds, sizes and thresholds
#[derive(Debug, Clone)]
pub struct SortBenchmark {
    config: SortBenchConfig,
    arrays: ArrayGenerator,
}

impl SortBenchmark {
    /// Validate `config` and generate the base sequences once, at the
    /// largest swept size
    pub fn new(config: SortBenchConfig) -> Result<Self> {
        config.validate()?;
        let arrays = ArrayGenerator::new(config.sizes.end, config.max_value, config.seed)?;
        Ok(Self { config, arrays })
    }

    pub fn config(&self) -> &SortBenchConfig {
        &self.config
    }

    pub fn arrays(&self) -> &ArrayGenerator {
        &self.arrays
    }

    /// Standard merge sort first, then the hybrid at each threshold
    pub fn algorithms(&self) -> impl Iterator<Item = SortAlgorithm> + '_ {
        std::iter::once(SortAlgorithm::Standard).chain(
            self.config
                .thresholds
                .iter()
                .map(|&threshold| SortAlgorithm::Hybrid { threshold }),
        )
    }

    /// All cases in nested order: kind, then size, then algorithm
    pub fn cases(&self) -> impl Iterator<Item = SortCase> + '_ {
        self.config.kinds.iter().flat_map(move |&kind| {
            self.config.sizes.iter().flat_map(move |n| {
                self.algorithms()
                    .map(move |algorithm| SortCase { kind, n, algorithm })
            })
        })
    }

    pub fn measure(&self, case: &SortCase) -> Result<TimingRow> {
        let data = self.arrays.prefix_slice(case.kind, case.n)?;
        let time = time_average(data, |v| case.algorithm.sort(v), self.config.runs)?;
        Ok(TimingRow {
            kind: case.kind,
            n: case.n,
            algorithm: case.algorithm,
            time,
        })
    }

    /// Time every case and write the rows into `sink`
    pub fn run<S: ResultSink<TimingRow>>(&self, sink: S) -> Result<usize> {
        tracing::debug!(
            cases = self.config.case_count(),
            runs = self.config.runs,
            "starting sort benchmark"
        );
        run_sweep(self.cases(), |case| self.measure(case), sink)
    }
}
