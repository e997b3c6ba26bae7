//! Id-keyed widget storage.

use dashmap::DashMap;
use std::sync::Arc;

use dashboard_protocols::Widget;

/// Registry of built widgets, keyed by [`Widget::id`].
///
/// Inserting a widget whose id is already present replaces the previous
/// widget. There is no removal.
pub struct WidgetRegistry {
    items: DashMap<String, Arc<dyn Widget>>,
}

impl WidgetRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }

    /// Insert a widget under its own id.
    ///
    /// Returns the widget it replaced, if any.
    pub fn insert(&self, widget: Arc<dyn Widget>) -> Option<Arc<dyn Widget>> {
        let id = widget.id().to_string();
        self.items.insert(id, widget)
    }

    /// Get a widget by ID.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Widget>> {
        self.items.get(id).map(|item| item.clone())
    }

    /// Check if a widget with the given ID is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// List all registered widget IDs, sorted.
    pub fn list_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.items.iter().map(|item| item.key().clone()).collect();
        ids.sort();
        ids
    }

    /// Get the number of registered widgets.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all widgets.
    pub fn iter(&self) -> impl Iterator<Item = Arc<dyn Widget>> + '_ {
        self.items.iter().map(|entry| entry.value().clone())
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}
