use std::path::PathBuf;

use clap::Parser;
use montesort::{Experiment, init_logging, run};

#[derive(Parser, Debug)]
#[command(name = "montesort")]
#[command(about = "Monte Carlo area estimation and merge sort benchmark sweeps")]
struct Args {
    /// Experiment to run
    #[arg(value_enum, default_value_t = Experiment::All)]
    experiment: Experiment,

    /// Directory the CSV results are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level)?;

    let written = run(args.experiment, &args.out_dir)?;
    for path in &written {
        tracing::info!(path = %path.display(), "results written");
    }

    Ok(())
}
