//! Widget trait and declarative widget specification.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::any::Any;
use std::sync::Arc;

use crate::error::WidgetError;

/// A built dashboard component.
///
/// The concrete shape is owned by whichever [`WidgetFactory`] produced it;
/// the registry only relies on the identifier.
pub trait Widget: Send + Sync + 'static {
    /// Returns the identifier the widget is registered under.
    fn id(&self) -> &str;

    /// Returns a reference to the widget as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Builds widgets from their specification and optional DAO parameters.
pub trait WidgetFactory: Send + Sync {
    /// Build a widget.
    ///
    /// `dao_params` is the auxiliary configuration entry referenced by
    /// `spec.params.dao`, or `None` when the spec has no reference or the
    /// referenced entry does not exist.
    fn build(
        &self,
        spec: &WidgetSpec,
        dao_params: Option<&Value>,
    ) -> Result<Arc<dyn Widget>, WidgetError>;
}

/// One entry of a dashboard configuration's `widgets` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetSpec {
    /// Widget parameters.
    pub params: WidgetParams,

    /// Every other key of the entry (`type`, `id`, `title`, ...).
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl WidgetSpec {
    /// Create a new widget specification.
    pub fn new(params: WidgetParams) -> Self {
        Self {
            params,
            attributes: Map::new(),
        }
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Get an attribute if it is a string.
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(Value::as_str)
    }

    /// The declared widget type, if any.
    pub fn kind(&self) -> Option<&str> {
        self.attribute_str("type")
    }

    /// Name of the auxiliary configuration entry holding DAO parameters.
    pub fn dao(&self) -> Option<&str> {
        self.params.dao.as_deref()
    }
}

/// The `params` table of a widget specification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetParams {
    /// Reference to a named configuration entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dao: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WidgetParams {
    /// Create parameters referencing the given DAO entry.
    pub fn with_dao(dao: impl Into<String>) -> Self {
        Self {
            dao: Some(dao.into()),
            extra: Map::new(),
        }
    }

    /// Set an extra parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
