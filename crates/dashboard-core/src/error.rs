//! Dashboard errors.

use dashboard_config::ConfigError;
use dashboard_protocols::WidgetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Cannot find dashboard config: {0}")]
    ConfigurationNotFound(String),

    #[error("Widget with {0} id is not specified in dashboard config")]
    WidgetNotFound(String),

    #[error(transparent)]
    Config(ConfigError),

    #[error(transparent)]
    Build(#[from] WidgetError),
}

impl From<ConfigError> for DashboardError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound(name) => DashboardError::ConfigurationNotFound(name),
            other => DashboardError::Config(other),
        }
    }
}
