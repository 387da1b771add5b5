//! Configuration system for wincanon.
//!
//! This module provides layered configuration with support for:
//! - A YAML user configuration file
//! - Environment variable overrides
//! - Programmatic configuration via a builder
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (WINCANON_*)
//! 3. User config (`~/.wincanon/config.yaml`, or an explicit path)
//! 4. Built-in defaults (everything unset)
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use wincanon::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("configured family: {:?}", config.family);
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use wincanon::config::ConfigBuilder;
//! use wincanon::{Config, PathFamily};
//!
//! let custom = Config {
//!     family: Some(PathFamily::Cygwin),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.family, Some(PathFamily::Cygwin));
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

use std::path::PathBuf;

use crate::error::Result;

// Re-export key types at module root
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::Config;

/// Builds a merged [`Config`] from files, environment, and overrides.
///
/// # Examples
///
/// ```
/// use wincanon::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .build()
///     .unwrap();
/// assert!(config.family.is_none());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder with all sources enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the file layer from an explicit path instead of the default
    /// user configuration file.
    #[must_use]
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Skip the file layer entirely.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skip the environment variable layer.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply a programmatic configuration with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all enabled sources into a single configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be read
    /// or parsed, or if an environment variable value is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let file_config = match &self.config_path {
                Some(path) => Some(ConfigLoader::load_file(path)?),
                None => ConfigLoader::load_user_config()?,
            };
            if let Some(file_config) = file_config {
                config.merge_from(file_config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config.merge_from(overrides);
        }

        Ok(config)
    }
}
