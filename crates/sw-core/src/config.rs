//! Configuration types and loading
//!
//! Sources, lowest precedence first: built-in defaults, an optional config file,
//! then `SITEWORKS_*` environment variables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::SwError;
use crate::types::{today_local, ProgressPolicy};

/// Environment variable prefix (`SITEWORKS_DATA_PATH`, `SITEWORKS_TODAY`, ...)
pub const ENV_PREFIX: &str = "SITEWORKS";

/// Default tracing filter directive
pub const DEFAULT_LOG_FILTER: &str = "info,siteworks=debug";

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Dataset file (JSON) loaded by the command line tool
    pub data_path: Option<PathBuf>,

    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Emit log lines as JSON
    pub log_json: bool,

    /// Reference date for the Overdue predicate; the local date when unset
    pub today: Option<NaiveDate>,

    /// Treatment of derived percentages above 100
    pub progress_policy: ProgressPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_json: false,
            today: None,
            progress_policy: ProgressPolicy::Clamp,
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional file plus the environment
    pub fn load(file: Option<&Path>) -> Result<Self, SwError> {
        let mut builder = config::Config::builder();

        if let Some(path) = file {
            if !path.exists() {
                return Err(SwError::Config(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// The date Overdue is measured against
    pub fn effective_today(&self) -> NaiveDate {
        self.today.unwrap_or_else(today_local)
    }
}
