use anyhow::{Context, Result};
use tracing::subscriber::set_global_default;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Install a stderr subscriber filtered by `RUST_LOG`
pub fn setup_tracing() -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let sub = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(fmt_layer);
    set_global_default(sub).context("Failed to set tracing subscriber")
}
