use crate::catalog::{Catalog, CatalogError};
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Default log file, used when debug logging is on without `LOG_FILE`
pub const DEFAULT_LOG_FILE: &str = "trade-area.log";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog resource on disk; the built-in catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl AppConfig {
    /// Where logs go, if anywhere
    pub fn log_target(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| self.debug.then(|| PathBuf::from(DEFAULT_LOG_FILE)))
    }
}

/// Initializes the application configuration from `.env` and the environment
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_dir = env::current_dir()?;

    let catalog_path = non_empty_var("CATALOG_PATH").map(|path| base_dir.join(path));
    let log_file = non_empty_var("LOG_FILE").map(|path| base_dir.join(path));
    let debug = non_empty_var("DEBUG").is_some_and(|value| is_truthy(&value));

    Ok(AppConfig {
        catalog_path,
        log_file,
        debug,
    })
}

/// Loads the configured catalog, falling back to the built-in one
pub fn load_catalog(config: &AppConfig) -> Result<Catalog, CatalogError> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };

    tracing::info!(
        market = catalog.market(),
        locations = catalog.len(),
        source = ?config.catalog_path,
        "catalog loaded"
    );

    Ok(catalog)
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
