use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Installs the global subscriber. Logs go to stderr so command output on
/// stdout stays machine-readable.
///
/// # Errors
/// Fails if `level` is not a valid filter directive.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid logging.level '{}'", config.level))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_target(false).try_init(),
    };
    if let Err(e) = installed {
        eprintln!("logging already initialized: {e}");
    }
    Ok(())
}
