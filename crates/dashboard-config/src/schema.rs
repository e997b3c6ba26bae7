//! Dashboard configuration schema.

use dashboard_protocols::WidgetSpec;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A loaded dashboard configuration.
///
/// ```toml
/// [[widgets]]
/// id = "active-users"
/// type = "counter"
/// params = { dao = "userDao" }
///
/// [userDao]
/// table = "users"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Widget specifications, in declaration order.
    pub widgets: Vec<WidgetSpec>,

    /// Auxiliary named entries (DAO parameter blocks and anything else).
    #[serde(flatten)]
    pub entries: Map<String, Value>,
}

impl DashboardConfig {
    /// Create a configuration from widget specifications.
    pub fn new(widgets: Vec<WidgetSpec>) -> Self {
        Self {
            widgets,
            entries: Map::new(),
        }
    }

    /// Add an auxiliary entry.
    pub fn with_entry(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(name.into(), value.into());
        self
    }

    /// Get an auxiliary entry by name.
    pub fn entry(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Resolve the DAO parameters referenced by a widget specification.
    ///
    /// Returns `None` when the spec has no `dao` reference or when the
    /// referenced entry does not exist. `widgets` is never an entry, so a
    /// reference to it resolves to `None` as well.
    pub fn dao_params(&self, spec: &WidgetSpec) -> Option<&Value> {
        spec.dao().and_then(|name| self.entry(name))
    }
}
