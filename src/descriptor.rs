//! Descriptor widgets used by the CLI.
//!
//! The CLI has no rendering backend, so every widget is built as a
//! [`WidgetDescriptor`] recording what the configuration asked for.

use std::any::Any;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use dashboard_protocols::{Widget, WidgetError, WidgetFactory, WidgetSpec};

/// A widget that only describes its own specification.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct WidgetDescriptor {
    pub id: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    pub spec: WidgetSpec,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dao_params: Option<Value>,
}

impl Widget for WidgetDescriptor {
    fn id(&self) -> &str {
        &self.id
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Builds a [`WidgetDescriptor`] for every spec. Each spec needs a non-empty `id`.
pub(crate) struct DescriptorFactory;

impl WidgetFactory for DescriptorFactory {
    fn build(
        &self,
        spec: &WidgetSpec,
        dao_params: Option<&Value>,
    ) -> Result<Arc<dyn Widget>, WidgetError> {
        let id = match spec.attribute("id") {
            None => return Err(WidgetError::MissingAttribute("id".to_string())),
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(other) => {
                return Err(WidgetError::InvalidParams(format!(
                    "id must be a non-empty string, got {}",
                    other
                )));
            }
        };

        Ok(Arc::new(WidgetDescriptor {
            id,
            kind: spec.kind().map(str::to_string),
            spec: spec.clone(),
            dao_params: dao_params.cloned(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_protocols::WidgetParams;
    use serde_json::json;

    fn descriptor(widget: &Arc<dyn Widget>) -> &WidgetDescriptor {
        widget.as_any().downcast_ref::<WidgetDescriptor>().unwrap()
    }

    #[test]
    fn test_build_descriptor() {
        let spec = WidgetSpec::new(WidgetParams::with_dao("userDao"))
            .with_attribute("id", "active-users")
            .with_attribute("type", "counter");
        let dao = json!({ "table": "users" });

        let widget = DescriptorFactory.build(&spec, Some(&dao)).unwrap();
        assert_eq!(widget.id(), "active-users");

        let descriptor = descriptor(&widget);
        assert_eq!(descriptor.kind.as_deref(), Some("counter"));
        assert_eq!(descriptor.dao_params, Some(dao));
    }

    #[test]
    fn test_build_requires_id() {
        let result = DescriptorFactory.build(&WidgetSpec::default(), None);
        assert!(matches!(result, Err(WidgetError::MissingAttribute(_))));
    }

    #[test]
    fn test_build_rejects_non_string_id() {
        let spec = WidgetSpec::default().with_attribute("id", 7);
        assert!(matches!(
            DescriptorFactory.build(&spec, None),
            Err(WidgetError::InvalidParams(_))
        ));

        let spec = WidgetSpec::default().with_attribute("id", "");
        assert!(DescriptorFactory.build(&spec, None).is_err());
    }

    #[test]
    fn test_descriptor_json() {
        let spec = WidgetSpec::new(WidgetParams::default().with_param("limit", 5))
            .with_attribute("id", "clock");
        let widget = DescriptorFactory.build(&spec, None).unwrap();

        let value = serde_json::to_value(descriptor(&widget)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "clock",
                "spec": { "id": "clock", "params": { "limit": 5 } }
            })
        );
    }
}
