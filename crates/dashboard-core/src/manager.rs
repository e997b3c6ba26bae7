//! Dashboard manager.
//!
//! Resolves a named configuration, builds every widget it declares through
//! the [`WidgetFactory`](dashboard_protocols::WidgetFactory) held by the
//! [`ServiceLocator`], and serves the built widgets by id.

use parking_lot::RwLock;
use std::sync::Arc;

use dashboard_config::{ConfigSource, DashboardConfig};
use dashboard_protocols::Widget;
use tracing::{debug, info};

use crate::error::DashboardError;
use crate::locator::ServiceLocator;
use crate::registry::WidgetRegistry;

/// Owns one dashboard's configuration and its built widgets.
pub struct DashboardManager {
    /// Services supplied by the caller.
    services: Arc<ServiceLocator>,

    /// Where named configurations are resolved.
    source: Arc<dyn ConfigSource>,

    /// Currently loaded configuration.
    config: RwLock<Arc<DashboardConfig>>,

    /// Built widgets.
    widgets: WidgetRegistry,
}

impl DashboardManager {
    /// Load the named configuration and build its widgets.
    ///
    /// Fails with [`DashboardError::ConfigurationNotFound`] when the source has
    /// no configuration for `config_name`, and with the factory's error when a
    /// widget cannot be built.
    pub fn new(
        config_name: &str,
        source: Arc<dyn ConfigSource>,
        services: Arc<ServiceLocator>,
    ) -> Result<Self, DashboardError> {
        let config = Self::resolve(source.as_ref(), config_name)?;

        let manager = Self {
            services,
            source,
            config: RwLock::new(Arc::new(config)),
            widgets: WidgetRegistry::new(),
        };
        manager.init()?;

        Ok(manager)
    }

    /// Load the named configuration, replacing the current one.
    ///
    /// Widgets are not rebuilt; call [`init`](Self::init) afterwards to build
    /// from the new configuration. On failure the current configuration is kept.
    pub fn load_config(&self, config_name: &str) -> Result<(), DashboardError> {
        let config = Self::resolve(self.source.as_ref(), config_name)?;
        *self.config.write() = Arc::new(config);
        Ok(())
    }

    fn resolve(
        source: &dyn ConfigSource,
        config_name: &str,
    ) -> Result<DashboardConfig, DashboardError> {
        if config_name.is_empty() {
            return Err(DashboardError::ConfigurationNotFound(String::new()));
        }

        let config = source.load(config_name)?;
        info!(
            config = config_name,
            widgets = config.widgets.len(),
            "Loaded dashboard configuration"
        );
        Ok(config)
    }

    /// Build every widget declared by the current configuration.
    ///
    /// Stops at the first factory error. Widgets built before the failure
    /// stay registered.
    pub fn init(&self) -> Result<(), DashboardError> {
        let factory = self.services.widget_factory();
        let config = self.config();

        for spec in config.widgets.iter() {
            let dao_params = config.dao_params(spec);
            if let (Some(dao), None) = (spec.dao(), dao_params) {
                debug!(dao, "DAO entry not found, building widget without DAO parameters");
            }

            let widget = factory.build(spec, dao_params)?;
            self.add_widget(widget);
        }

        info!(widgets = self.widgets.len(), "Dashboard widgets initialized");
        Ok(())
    }

    /// Register a widget under its own id, replacing any widget with the same id.
    pub fn add_widget(&self, widget: Arc<dyn Widget>) {
        let id = widget.id().to_string();
        if self.widgets.insert(widget).is_some() {
            debug!(widget = %id, "Replaced widget with duplicate id");
        } else {
            debug!(widget = %id, "Registered widget");
        }
    }

    /// Get a widget by id.
    pub fn get_widget(&self, id: &str) -> Result<Arc<dyn Widget>, DashboardError> {
        self.widgets
            .get(id)
            .ok_or_else(|| DashboardError::WidgetNotFound(id.to_string()))
    }

    /// The service locator supplied at construction.
    pub fn service_locator(&self) -> &Arc<ServiceLocator> {
        &self.services
    }

    /// The currently loaded configuration.
    pub fn config(&self) -> Arc<DashboardConfig> {
        self.config.read().clone()
    }

    /// Check if a widget with the given id is registered.
    pub fn has_widget(&self, id: &str) -> bool {
        self.widgets.contains(id)
    }

    /// Ids of all registered widgets, sorted.
    pub fn widget_ids(&self) -> Vec<String> {
        self.widgets.list_ids()
    }

    /// Number of registered widgets.
    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// All registered widgets, in no particular order.
    pub fn widgets(&self) -> Vec<Arc<dyn Widget>> {
        self.widgets.iter().collect()
    }
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
