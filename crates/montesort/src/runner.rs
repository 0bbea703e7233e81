//! Output file handling around the two experiments.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use color_eyre::eyre::WrapErr;
use montesort_core::{
    AreaRow, CsvSink, MonteCarloConfig, MonteCarloExperiment, Row, SortBenchConfig,
    SortBenchmark, TimingRow,
};

use crate::progress::ProgressSink;

pub const MONTE_CARLO_FILE: &str = "results_monte_carlo.csv";
pub const SORT_BENCH_FILE: &str = "results.csv";

/// Which sweep to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Experiment {
    /// Three-circle intersection area, wide vs narrow sampling rectangle
    MonteCarlo,
    /// Standard vs hybrid merge sort timings
    SortBench,
    /// Both, Monte Carlo first
    All,
}

/// Run the selected experiment(s) with their fixed sweeps, writing CSV files
/// into `out_dir`. Returns the files written.
pub fn run(experiment: Experiment, out_dir: &Path) -> color_eyre::Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    if matches!(experiment, Experiment::MonteCarlo | Experiment::All) {
        written.push(run_monte_carlo(MonteCarloConfig::default(), out_dir)?);
    }
    if matches!(experiment, Experiment::SortBench | Experiment::All) {
        written.push(run_sort_bench(SortBenchConfig::default(), out_dir)?);
    }
    Ok(written)
}

pub fn run_monte_carlo(config: MonteCarloConfig, out_dir: &Path) -> color_eyre::Result<PathBuf> {
    let experiment = MonteCarloExperiment::new(config)?;
    let path = out_dir.join(MONTE_CARLO_FILE);
    let sink = open_csv::<AreaRow>(&path)?;

    tracing::info!(
        path = %path.display(),
        exact = experiment.exact_area(),
        "running Monte Carlo sweep"
    );
    let rows = experiment
        .run(ProgressSink::new(sink))
        .wrap_err_with(|| format!("Monte Carlo sweep into {} failed", path.display()))?;
    tracing::info!(rows, path = %path.display(), "Monte Carlo sweep complete");

    Ok(path)
}

pub fn run_sort_bench(config: SortBenchConfig, out_dir: &Path) -> color_eyre::Result<PathBuf> {
    let bench = SortBenchmark::new(config)?;
    let path = out_dir.join(SORT_BENCH_FILE);
    let sink = open_csv::<TimingRow>(&path)?;

    tracing::info!(
        path = %path.display(),
        cases = bench.config().case_count(),
        "running sort benchmark"
    );
    let rows = bench
        .run(ProgressSink::new(sink))
        .wrap_err_with(|| format!("sort benchmark into {} failed", path.display()))?;
    tracing::info!(rows, path = %path.display(), "sort benchmark complete");

    Ok(path)
}

/// Create `path` and write the CSV header for `R`
fn open_csv<R: Row>(path: &Path) -> color_eyre::Result<CsvSink<BufWriter<File>, R>> {
    let file = File::create(path)
        .wrap_err_with(|| format!("cannot open {} for writing", path.display()))?;
    CsvSink::new(BufWriter::new(file))
        .wrap_err_with(|| format!("cannot write header to {}", path.display()))
}
