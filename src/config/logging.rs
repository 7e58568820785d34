use tracing_subscriber::EnvFilter;

use crate::config::app_config::{AppConfig, LogFormat};

/// Installs the global subscriber. Filtering follows `RUST_LOG`, defaulting to `info`.
///
/// Subsequent calls are no-ops.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let _ = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
}
