use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::EngineConfig;

/// Installs the global tracing subscriber for an application embedding the engine.
///
/// `RUST_LOG` wins when set; otherwise the engine's own target logs at `config.rust_log`.
/// Returns an error instead of panicking if a subscriber is already installed.
pub fn init_tracing(config: &EngineConfig) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("ATS engine v{} logging initialised", env!("CARGO_PKG_VERSION"));
    Ok(())
}
