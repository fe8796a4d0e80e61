use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{LogFormat, SttConfig};

/// Installs the global subscriber. `RUST_LOG` wins over `logging.level`.
pub fn setup_logging(config: &SttConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match config.logging.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Text => registry.with(fmt::layer().with_target(true)).try_init(),
    };

    if let Err(err) = result {
        tracing::warn!(error = %err, "logging already initialized");
    }

    tracing::info!(
        level = %config.logging.level,
        format = ?config.logging.format,
        "logging initialized"
    );
}
