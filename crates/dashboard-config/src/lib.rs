//! # Dashboard Config
//!
//! Loading, resolution and validation of named dashboard configurations.

mod error;
mod loader;
mod schema;
mod source;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::DashboardConfig;
pub use source::{ConfigSource, FileConfigSource, MemoryConfigSource};
pub use validator::{ConfigValidator, ValidationResult, ValidationWarning};
