//! Environment variable handling for configuration overrides.
//!
//! This module provides support for WINCANON_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::family::PathFamily;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use wincanon::config::EnvironmentConfig;
/// use wincanon::Config;
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the WINCANON_* environment variables and applies them with
    /// higher precedence than file-based configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unknown family name or a non-boolean flag value).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(family) = env::var("WINCANON_FAMILY") {
            config.family = Some(PathFamily::parse(&family).map_err(|message| {
                Error::Validation {
                    field: "WINCANON_FAMILY".into(),
                    message,
                }
            })?);
        }

        if let Ok(home) = env::var("WINCANON_HOME") {
            config.home = Some(home);
        }

        if let Ok(val) = env::var("WINCANON_STRICT_ESCAPES") {
            config.strict_escapes = Some(Self::parse_bool("WINCANON_STRICT_ESCAPES", &val)?);
        }

        if let Ok(val) = env::var("WINCANON_RESOLVE_SYMLINKS") {
            config.resolve_symlinks = Some(Self::parse_bool("WINCANON_RESOLVE_SYMLINKS", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
