//! Experiment drivers
//!
//! Each experiment is a list of cases (sample counts, or kind × size ×
//! algorithm) fed through [`run_sweep`], which measures one case at a time
//! and appends its row to a sink.

pub mod monte_carlo;
pub mod sort_bench;

pub use monte_carlo::{AreaRow, MonteCarloExperiment};
pub use sort_bench::{SortBenchmark, SortCase, TimingRow};

use crate::error::Result;
use crate::sink::{ResultSink, Row};

/// Run every case in order and write one row per case.
///
/// Stops at the first failing case or sink write. The sink is finished
/// only after all rows were written. Returns the number of rows written.
pub fn run_sweep<C, R, S, F>(
    cases: impl IntoIterator<Item = C>,
    mut run_case: F,
    mut sink: S,
) -> Result<usize>
where
    R: Row,
    S: ResultSink<R>,
    F: FnMut(&C) -> Result<R>,
{
    let mut rows = 0;
    for case in cases {
        let row = run_case(&case)?;
        sink.write_row(&row)?;
        rows += 1;
    }
    sink.finish()?;
    tracing::debug!(rows, "sweep finished");
    Ok(rows)
}
