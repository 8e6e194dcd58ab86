//! Startup configuration types.

use std::path::PathBuf;

use crate::cli::CliArgs;
use crate::error::CatalogError;
use crate::models::Catalog;
use crate::state::FilterCriteria;

/// Environment variable naming a default catalog file.
pub const ENV_CATALOG: &str = "SHELF_CATALOG";
/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "SHELF_LOG";
/// Environment variable overriding the log file path.
pub const ENV_LOG_FILE: &str = "SHELF_LOG_FILE";

/// Configuration for one run of the application.
///
/// Built from the environment, then overridden by command-line options.
///
/// ```ignore
/// let config = StartupConfig::from_env().with_cli_args(&args);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupConfig {
    /// Catalog file; the built-in sample is used when None
    pub catalog_path: Option<PathBuf>,
    /// Initial search text
    pub initial_filter: String,
    /// Initial in-stock-only flag
    pub in_stock_only: bool,
    /// Emit JSON in print mode
    pub json_output: bool,
    /// Log filter directive; logging is off when None
    pub log_filter: Option<String>,
    /// Log file for the interactive UI
    pub log_file: Option<PathBuf>,
}

impl StartupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `SHELF_CATALOG`, `SHELF_LOG`, and `SHELF_LOG_FILE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value: &String| !value.is_empty());
        Self {
            catalog_path: non_empty(ENV_CATALOG).map(PathBuf::from),
            log_filter: non_empty(ENV_LOG),
            log_file: non_empty(ENV_LOG_FILE).map(PathBuf::from),
            ..Self::default()
        }
    }

    /// Apply command-line options on top of this config.
    pub fn with_cli_args(mut self, args: &CliArgs) -> Self {
        if let Some(path) = &args.catalog {
            self.catalog_path = Some(path.clone());
        }
        if let Some(filter) = &args.filter {
            self.initial_filter = filter.clone();
        }
        self.in_stock_only |= args.in_stock;
        self.json_output |= args.json;
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn with_initial_filter(mut self, text: impl Into<String>) -> Self {
        self.initial_filter = text.into();
        self
    }

    pub fn with_in_stock_only(mut self, flag: bool) -> Self {
        self.in_stock_only = flag;
        self
    }

    /// The criteria the first frame is built with.
    pub fn initial_criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.initial_filter.clone(), self.in_stock_only)
    }

    /// Load the configured catalog, or the sample when none is set.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::sample()),
        }
    }

    /// Log file path: `SHELF_LOG_FILE`, else `<cache dir>/shelf/shelf.log`.
    pub fn resolved_log_file(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("shelf").join("shelf.log")))
    }
}
