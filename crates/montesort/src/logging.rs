use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use color_eyre::eyre::WrapErr;

/// Initialize logging to stderr.
///
/// The level applies to this binary; the core library stays at `warn`
/// unless `RUST_LOG` says otherwise, in which case `RUST_LOG` wins entirely.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter = format!("montesort={level},montesort_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()
        .wrap_err("failed to install the tracing subscriber")?;

    tracing::debug!(level, "logging initialized");
    Ok(())
}
