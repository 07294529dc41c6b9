//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over `logging.level` when set.

use tracing_subscriber::EnvFilter;

use pv_shared::{LogFormat, LoggingConfig};

pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level),
    }
}

/// Install the global subscriber described by `config`
pub fn init_tracing(config: &LoggingConfig) -> anyhow::Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}
