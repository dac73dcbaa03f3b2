//! Logging setup.
//!
//! `tracing` events go to stderr; stdout carries only command output.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LEVEL_ENV: &str = "VI_META_LOG";
const ALT_LEVEL_ENV: &str = "RUST_LOG";
const DEFAULT_LEVEL: &str = "warn";

static LOGGER: OnceLock<Result<(), String>> = OnceLock::new();

pub fn init() -> anyhow::Result<()> {
    match LOGGER.get_or_init(configure_logger) {
        Ok(()) => Ok(()),
        Err(err) => anyhow::bail!("logging init failed: {}", err),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LEVEL_ENV)
        .or_else(|_| EnvFilter::try_from_env(ALT_LEVEL_ENV))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

fn configure_logger() -> Result<(), String> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(stderr_layer)
        .try_init()
        .map_err(|e| e.to_string())
}
