//! Configuration validation.

use std::collections::HashMap;
use std::fmt;

use crate::schema::DashboardConfig;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Configuration validator.
///
/// Shape errors (missing `widgets`, missing `params`) are already rejected by
/// deserialization; this reports suspicious cross references between widgets
/// and auxiliary entries. None of them prevent the dashboard from building.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &DashboardConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_dao_references(config, &mut result);
        Self::validate_widget_ids(config, &mut result);

        result
    }

    fn validate_dao_references(config: &DashboardConfig, result: &mut ValidationResult) {
        for (index, spec) in config.widgets.iter().enumerate() {
            let Some(dao) = spec.dao() else {
                continue;
            };
            let path = format!("widgets[{}].params.dao", index);

            if dao.is_empty() {
                result.add_warning(ValidationWarning::new(
                    path,
                    "Empty DAO reference, widget will be built without DAO parameters",
                ));
                continue;
            }

            if dao == "widgets" {
                result.add_warning(ValidationWarning::new(
                    path,
                    "'widgets' names the widget list, not a DAO entry",
                ));
                continue;
            }

            match config.entry(dao) {
                None => result.add_warning(ValidationWarning::new(
                    path,
                    format!(
                        "No entry named '{}', widget will be built without DAO parameters",
                        dao
                    ),
                )),
                Some(value) if !value.is_object() => result.add_warning(ValidationWarning::new(
                    path,
                    format!("Entry '{}' is not a table", dao),
                )),
                Some(_) => {}
            }
        }
    }

    fn validate_widget_ids(config: &DashboardConfig, result: &mut ValidationResult) {
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (index, spec) in config.widgets.iter().enumerate() {
            let Some(id) = spec.attribute_str("id") else {
                continue;
            };

            if let Some(first) = seen.insert(id, index) {
                result.add_warning(ValidationWarning::new(
                    format!("widgets[{}].id", index),
                    format!(
                        "Widget id '{}' is also declared by widgets[{}], the later one replaces it",
                        id, first
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
