//! Configuration loader.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::ConfigError;
use crate::schema::DashboardConfig;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<DashboardConfig, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<DashboardConfig, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: DashboardConfig = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut missing: Option<String> = None;

        let expanded = ENV_VAR.replace_all(content, |cap: &Captures| {
            std::env::var(&cap[1]).unwrap_or_else(|_| {
                missing.get_or_insert_with(|| cap[1].to_string());
                String::new()
            })
        });

        match missing {
            Some(var_name) => Err(ConfigError::EnvVarNotSet(var_name)),
            None => Ok(expanded.into_owned()),
        }
    }

    /// Expand shell-style paths (e.g., `~/.config`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_widgets() {
        let config = ConfigLoader::load_str("widgets = []").unwrap();
        assert!(config.widgets.is_empty());
        assert!(config.entries.is_empty());
    }

    #[test]
    fn test_load_requires_widgets() {
        let result = ConfigLoader::load_str("[userDao]\ntable = \"users\"");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_load_widget_requires_params() {
        let content = r#"
            [[widgets]]
            id = "no-params"
        "#;
        assert!(ConfigLoader::load_str(content).is_err());
    }

    #[test]
    fn test_load_widgets_must_be_array() {
        assert!(ConfigLoader::load_str("widgets = \"counter\"").is_err());
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            title = "Realtime"

            [[widgets]]
            id = "active-users"
            type = "counter"
            params = { dao = "userDao", interval = 5 }

            [[widgets]]
            id = "latest-orders"
            type = "table"
            [widgets.params]
            columns = ["id", "total"]

            [userDao]
            table = "users"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();

        assert_eq!(config.widgets.len(), 2);
        assert_eq!(config.widgets[0].attribute_str("id"), Some("active-users"));
        assert_eq!(config.widgets[0].dao(), Some("userDao"));
        assert_eq!(config.widgets[0].params.extra.get("interval"), Some(&json!(5)));
        assert_eq!(config.widgets[1].kind(), Some("table"));
        assert!(config.widgets[1].dao().is_none());
        assert_eq!(config.entry("userDao"), Some(&json!({ "table": "users" })));
        assert_eq!(config.entry("title"), Some(&json!("Realtime")));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[[widgets]]").unwrap();
        writeln!(file, "id = \"clock\"").unwrap();
        writeln!(file, "params = {{}}").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.widgets.len(), 1);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/dashboard.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("widgets = [unclosed");
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("DASHBOARD_TEST_TABLE", "users");
        }
        let content = "table = \"${DASHBOARD_TEST_TABLE}\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, "table = \"users\"");
        unsafe {
            std::env::remove_var("DASHBOARD_TEST_TABLE");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "table = \"${DASHBOARD_NONEXISTENT_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        match result {
            Err(ConfigError::EnvVarNotSet(name)) => {
                assert_eq!(name, "DASHBOARD_NONEXISTENT_VAR_12345")
            }
            other => panic!("expected EnvVarNotSet, got {:?}", other),
        }
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "table = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_expand_path_no_tilde() {
        let path = "/etc/dashboard/rtm";
        assert_eq!(ConfigLoader::expand_path(path), path);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/rtm");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/rtm"));
    }
}
