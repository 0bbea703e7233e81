//! Wall-clock timing of sort runs.

use std::time::{Duration, Instant};

use crate::error::{ExperimentError, Result};

/// Time one run of `sort` on a private copy of `data`.
///
/// The clock covers only the call itself; copying the input happens before
/// the start timestamp.
pub fn time_once<T, F>(data: &[T], sort: &mut F) -> Duration
where
    T: Clone,
    F: FnMut(&mut [T]),
{
    let mut copy = data.to_vec();
    let start = Instant::now();
    sort(&mut copy);
    start.elapsed()
}

/// Mean of `runs` [`time_once`] measurements, in microseconds.
///
/// Every run sorts a fresh copy of the same input. All runs count: there is
/// no warm-up pass and no outlier trimming.
pub fn time_average<T, F>(data: &[T], mut sort: F, runs: usize) -> Result<f64>
where
    T: Clone,
    F: FnMut(&mut [T]),
{
    if runs == 0 {
        return Err(ExperimentError::invalid(
            "run count",
            "at least one timed run is required",
        ));
    }

    let total: Duration = (0..runs).map(|_| time_once(data, &mut sort)).sum();
    Ok(total.as_secs_f64() * 1e6 / runs as f64)
}
