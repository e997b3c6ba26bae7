//! # Dashboard Protocols
//!
//! Protocol definitions (traits) shared by the dashboard crates.
//! Contains only interface definitions and the declarative widget records.
//!
//! ## Core Traits
//!
//! - [`Widget`] - A built dashboard component, identified by a stable id
//! - [`WidgetFactory`] - Builds widgets from their declarative specification

pub mod error;
pub mod widget;

pub use error::WidgetError;
pub use widget::{Widget, WidgetFactory, WidgetParams, WidgetSpec};
