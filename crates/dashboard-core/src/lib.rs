//! # Dashboard Core
//!
//! Builds a dashboard's widgets from a named configuration and keeps them
//! addressable by id.
//!
//! ## Components
//!
//! - [`DashboardManager`] - Loads a configuration and builds its widgets
//! - [`WidgetRegistry`] - Id-keyed storage for built widgets
//! - [`ServiceLocator`] - Carries the widget factory and other named services

pub mod error;
pub mod locator;
pub mod manager;
pub mod registry;

pub use error::DashboardError;
pub use locator::ServiceLocator;
pub use manager::DashboardManager;
pub use registry::WidgetRegistry;
