//! Service locator handed to the dashboard manager.

use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

use dashboard_protocols::WidgetFactory;

/// Services available to a dashboard and its collaborators.
///
/// The widget factory is a required constructor argument. Further services
/// are registered by name and resolved by type.
pub struct ServiceLocator {
    widget_factory: Arc<dyn WidgetFactory>,
    services: DashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl ServiceLocator {
    /// Create a locator around a widget factory.
    pub fn new(widget_factory: Arc<dyn WidgetFactory>) -> Self {
        Self {
            widget_factory,
            services: DashMap::new(),
        }
    }

    /// The factory used to build widgets.
    pub fn widget_factory(&self) -> Arc<dyn WidgetFactory> {
        self.widget_factory.clone()
    }

    /// Register a named service, replacing any service with the same name.
    ///
    /// Returns `true` if a service was replaced.
    pub fn register<T: Any + Send + Sync>(
        &self,
        name: impl Into<String>,
        service: Arc<T>,
    ) -> bool {
        self.services.insert(name.into(), service).is_some()
    }

    /// Get a named service.
    ///
    /// Returns `None` if nothing is registered under `name` or if the
    /// registered service is not a `T`.
    pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        let service = self.services.get(name)?.value().clone();
        service.downcast::<T>().ok()
    }

    /// Check if a service with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }
}
