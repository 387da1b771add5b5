//! Utility functions for CLI operations.
//!
//! This module provides the glue between global CLI options and the
//! library's configuration and context types.

use std::path::PathBuf;

use crate::error::CliError;
use wincanon::{Config, ConfigBuilder, EnvironmentContext, PathFamily};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the target path family.
    pub family: Option<String>,

    /// Override the home directory used for tilde expansion.
    pub home: Option<String>,

    /// Reject ambiguous backslash escapes.
    pub strict_escapes: bool,

    /// Refine results through the filesystem.
    pub resolve_symlinks: bool,

    /// Explicit configuration file path.
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    /// Load hierarchical configuration and build the canonicalization
    /// context.
    ///
    /// Configuration is merged from multiple sources with precedence:
    /// 1. Global options (highest priority)
    /// 2. Environment variables
    /// 3. Configuration files
    /// 4. Built-in defaults (lowest priority)
    pub fn build_context(&self) -> Result<EnvironmentContext, CliError> {
        let mut overrides = Config::default();

        if let Some(family) = &self.family {
            overrides.family = Some(
                PathFamily::parse(family).map_err(CliError::InvalidArguments)?,
            );
        }
        if let Some(home) = &self.home {
            overrides.home = Some(home.clone());
        }
        if self.strict_escapes {
            overrides.strict_escapes = Some(true);
        }
        if self.resolve_symlinks {
            overrides.resolve_symlinks = Some(true);
        }

        let mut builder = ConfigBuilder::new().with_config(overrides);
        if let Some(path) = &self.config {
            builder = builder.with_config_path(path.clone());
        }
        let config = builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(EnvironmentContext::from_config(&config))
    }
}
