use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub mod commands;

/// Default filter directive for a given `-v` count.
pub fn default_log_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "embedgen=warn,embedgen_core=warn",
        1 => "embedgen=info,embedgen_core=info",
        _ => "embedgen=debug,embedgen_core=debug",
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
pub fn init_logging(verbosity: u8) -> Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid {} filter", EnvFilter::DEFAULT_ENV))?,
        _ => EnvFilter::new(default_log_directive(verbosity)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install log subscriber: {err}"))
}
