//! Configuration system for srcmerge.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `srcmerge.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (SRCMERGE_*)
//! 3. An explicit configuration file (via `ConfigBuilder::with_config_file`)
//! 4. The nearest project config (`srcmerge.yaml`)
//! 5. User config (`~/.srcmerge/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use srcmerge::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project/src"))
//!     .build()
//!     .unwrap();
//!
//! println!("Implementation extensions: {:?}",
//!     config.effective_implementation_extensions());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
