use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use trade_area_dashboard::config::AppConfig;
use tracing_subscriber::EnvFilter;

/// Sends tracing output to the configured log file. Nothing is installed when
/// no file is configured, so the alternate screen is never written over.
pub fn init(config: &AppConfig) -> Result<()> {
    let Some(path) = config.log_target() else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;

    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
