use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use crate::infrastructure::config::{AppConfig, LogFormat};

/// Installs the global subscriber. A valid `RUST_LOG` takes precedence over
/// the configured filter. Calling it twice keeps the first subscriber.
pub fn init_logging(config: &AppConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_filter)
            .with_context(|| format!("invalid log filter: {:?}", config.log_filter))?,
    };

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = match config.log_format {
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.finish()),
    };
    Ok(())
}
