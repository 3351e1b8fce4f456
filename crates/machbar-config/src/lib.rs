//! # machbar-config
//!
//! Configuration for machbar. Reads `machbar.toml`, then applies environment
//! variable overrides; CLI flags are applied on top by the caller.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::MachbarConfig;
pub use schema::{CatalogConfig, ConfigWarning, LoggingConfig, UiConfig, WarningSeverity};
