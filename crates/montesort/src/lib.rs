//! Command-line runner for the montesort experiments
//!
//! Opens the CSV result files, wires console progress into the row stream
//! and runs the fixed sweeps from `montesort_core`.

pub mod logging;
pub mod progress;
pub mod runner;

pub use logging::init_logging;
pub use runner::{Experiment, run};
