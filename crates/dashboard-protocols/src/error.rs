//! Widget construction errors.

use thiserror::Error;

/// Errors raised by a [`WidgetFactory`](crate::WidgetFactory) while building a widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Unknown widget type: {0}")]
    UnknownType(String),

    #[error("Widget specification is missing attribute: {0}")]
    MissingAttribute(String),

    #[error("Invalid widget parameters: {0}")]
    InvalidParams(String),

    #[error("{0}")]
    Custom(String),
}
