//! Named configuration sources.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::loader::ConfigLoader;
use crate::schema::DashboardConfig;
use crate::validator::ConfigValidator;

/// Resolves a dashboard configuration by name.
pub trait ConfigSource: Send + Sync {
    /// Load the named configuration.
    ///
    /// Returns [`ConfigError::NotFound`] when no configuration exists for `name`.
    fn load(&self, name: &str) -> Result<DashboardConfig, ConfigError>;
}

/// Reads `<root>/<name>.toml`.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    root: PathBuf,
}

impl FileConfigSource {
    /// Create a source rooted at `root`. A leading `~` is expanded.
    pub fn new(root: impl AsRef<str>) -> Self {
        Self {
            root: PathBuf::from(ConfigLoader::expand_path(root.as_ref())),
        }
    }

    /// The directory configurations are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `name`, or `None` if `name` is not a plain file stem.
    pub fn path_for(&self, name: &str) -> Option<PathBuf> {
        let plain = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\'])
            && !name.contains('\0');

        plain.then(|| self.root.join(format!("{}.toml", name)))
    }

    /// Parse the named configuration without running the validator.
    pub fn read(&self, name: &str) -> Result<DashboardConfig, ConfigError> {
        let path = self
            .path_for(name)
            .filter(|path| path.is_file())
            .ok_or_else(|| ConfigError::NotFound(name.to_string()))?;

        debug!(config = name, path = %path.display(), "Reading dashboard configuration");
        ConfigLoader::load(&path)
    }
}

impl ConfigSource for FileConfigSource {
    fn load(&self, name: &str) -> Result<DashboardConfig, ConfigError> {
        let config = self.read(name)?;
        report_warnings(name, &config);
        Ok(config)
    }
}

/// In-memory configurations keyed by name, stored as TOML text.
#[derive(Debug, Clone, Default)]
pub struct MemoryConfigSource {
    configs: HashMap<String, String>,
}

impl MemoryConfigSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a configuration.
    pub fn with_config(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }

    /// Add or replace a configuration.
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.configs.insert(name.into(), content.into());
    }

    /// Check if a configuration with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }
}

impl ConfigSource for MemoryConfigSource {
    fn load(&self, name: &str) -> Result<DashboardConfig, ConfigError> {
        let content = self
            .configs
            .get(name)
            .ok_or_else(|| ConfigError::NotFound(name.to_string()))?;

        let config = ConfigLoader::load_str(content)?;
        report_warnings(name, &config);
        Ok(config)
    }
}

/// Run the validator and log its warnings.
fn report_warnings(name: &str, config: &DashboardConfig) {
    for warning in ConfigValidator::validate(config).warnings {
        warn!(config = name, path = %warning.path, "{}", warning.message);
    }
}
