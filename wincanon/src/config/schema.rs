//! Configuration schema definitions.
//!
//! This module defines the configuration structure for wincanon callers
//! that want ambient defaults for the canonicalization context.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::family::PathFamily;

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall back to built-in defaults
/// when an [`crate::EnvironmentContext`] is built from the merged result.
///
/// # Examples
///
/// ```
/// use wincanon::{Config, PathFamily};
///
/// let config = Config {
///     family: Some(PathFamily::Cygwin),
///     strict_escapes: Some(true),
///     ..Default::default()
/// };
/// assert_eq!(config.family, Some(PathFamily::Cygwin));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target path family for canonical output.
    pub family: Option<PathFamily>,

    /// Home directory value used for tilde expansion.
    pub home: Option<String>,

    /// Reject ambiguous backslash escapes instead of passing them through.
    pub strict_escapes: Option<bool>,

    /// Refine lexical results through the filesystem when possible.
    pub resolve_symlinks: Option<bool>,

    /// Mount-prefix overrides per family (e.g. `cygwin: mnt` renders
    /// drive roots as `/mnt/c/...` under the Cygwin family).
    pub mounts: Option<BTreeMap<PathFamily, String>>,
}

impl Config {
    /// Merge a higher-precedence configuration into this one.
    ///
    /// Set fields in `higher` win; its mount entries are merged per
    /// family on top of any existing entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use wincanon::{Config, PathFamily};
    ///
    /// let mut base = Config {
    ///     family: Some(PathFamily::Windows),
    ///     home: Some("/home/base".to_string()),
    ///     ..Default::default()
    /// };
    /// let higher = Config {
    ///     family: Some(PathFamily::Cygwin),
    ///     ..Default::default()
    /// };
    ///
    /// base.merge_from(higher);
    /// assert_eq!(base.family, Some(PathFamily::Cygwin));
    /// assert_eq!(base.home, Some("/home/base".to_string()));
    /// ```
    pub fn merge_from(&mut self, higher: Config) {
        if higher.family.is_some() {
            self.family = higher.family;
        }
        if higher.home.is_some() {
            self.home = higher.home;
        }
        if higher.strict_escapes.is_some() {
            self.strict_escapes = higher.strict_escapes;
        }
        if higher.resolve_symlinks.is_some() {
            self.resolve_symlinks = higher.resolve_symlinks;
        }
        if let Some(mounts) = higher.mounts {
            match &mut self.mounts {
                Some(existing) => existing.extend(mounts),
                None => self.mounts = Some(mounts),
            }
        }
    }
}
