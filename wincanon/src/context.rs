//! The environment context consumed by canonicalization.
//!
//! An [`EnvironmentContext`] bundles everything a single `canonicalize`
//! call reads: the target path family, the home-directory value used for
//! tilde expansion, the escape-handling mode, the optional symlink
//! refinement flag, and the drive-mount table. Contexts are read-only
//! during canonicalization; the same input and context always produce the
//! same result.

use crate::config::Config;
use crate::family::PathFamily;
use crate::mount::{DriveStyle, MountTable};

/// Read-only lookup providing the environment for canonicalization.
///
/// # Examples
///
/// ```
/// use wincanon::{EnvironmentContext, PathFamily};
///
/// let ctx = EnvironmentContext::new(PathFamily::Cygwin)
///     .with_home("/home/u")
///     .with_strict_escapes(false);
///
/// assert_eq!(ctx.family(), PathFamily::Cygwin);
/// assert_eq!(ctx.home(), Some("/home/u"));
/// assert!(!ctx.strict_escapes());
/// ```
#[derive(Debug, Clone)]
pub struct EnvironmentContext {
    /// Target path family for the canonical output.
    family: PathFamily,
    /// Home directory value substituted for a leading `~`.
    home: Option<String>,
    /// Reject ambiguous backslash escapes instead of passing them through.
    strict_escapes: bool,
    /// Refine the lexical result through the filesystem when possible.
    resolve_symlinks: bool,
    /// Drive-root translation table.
    mounts: MountTable,
}

impl Default for EnvironmentContext {
    fn default() -> Self {
        Self {
            family: PathFamily::detect(),
            home: home::home_dir().and_then(|p| p.to_str().map(str::to_string)),
            strict_escapes: false,
            resolve_symlinks: false,
            mounts: MountTable::default(),
        }
    }
}

impl EnvironmentContext {
    /// Create a context for the given family, with the home directory
    /// taken from the running user and all other settings at their
    /// defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use wincanon::{EnvironmentContext, PathFamily};
    ///
    /// let ctx = EnvironmentContext::new(PathFamily::Windows);
    /// assert_eq!(ctx.family(), PathFamily::Windows);
    /// ```
    #[must_use]
    pub fn new(family: PathFamily) -> Self {
        Self {
            family,
            ..Self::default()
        }
    }

    /// Change the target path family, keeping all other settings.
    #[must_use]
    pub fn with_family(mut self, family: PathFamily) -> Self {
        self.family = family;
        self
    }

    /// Override the home directory used for tilde expansion.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Remove the home directory value entirely.
    ///
    /// A subsequent `~` in the input will fail with
    /// [`crate::Error::HomeUnresolvable`].
    #[must_use]
    pub fn without_home(mut self) -> Self {
        self.home = None;
        self
    }

    /// Configure strict escape handling.
    ///
    /// When enabled, ambiguous backslash-escape sequences are rejected
    /// with [`crate::Error::AmbiguousEscape`] instead of being passed
    /// through untouched.
    #[must_use]
    pub fn with_strict_escapes(mut self, strict: bool) -> Self {
        self.strict_escapes = strict;
        self
    }

    /// Configure optional symlink refinement.
    ///
    /// When enabled, the lexically canonical result is refined through
    /// the filesystem on a best-effort basis; a non-existent path is
    /// never an error and falls back to the lexical form.
    #[must_use]
    pub fn with_symlink_resolution(mut self, resolve: bool) -> Self {
        self.resolve_symlinks = resolve;
        self
    }

    /// Replace the drive-mount translation table.
    #[must_use]
    pub fn with_mount_table(mut self, mounts: MountTable) -> Self {
        self.mounts = mounts;
        self
    }

    /// Build a context from a merged [`Config`].
    ///
    /// Unset config fields keep their defaults (detected family, the
    /// running user's home directory, permissive escapes, no symlink
    /// refinement, conventional mount table).
    ///
    /// # Examples
    ///
    /// ```
    /// use wincanon::{Config, EnvironmentContext, PathFamily};
    ///
    /// let config = Config {
    ///     family: Some(PathFamily::MinGw64),
    ///     home: Some("/home/u".to_string()),
    ///     ..Default::default()
    /// };
    /// let ctx = EnvironmentContext::from_config(&config);
    /// assert_eq!(ctx.family(), PathFamily::MinGw64);
    /// assert_eq!(ctx.home(), Some("/home/u"));
    /// ```
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut ctx = Self::default();
        if let Some(family) = config.family {
            ctx.family = family;
        }
        if let Some(home) = &config.home {
            ctx.home = Some(home.clone());
        }
        if let Some(strict) = config.strict_escapes {
            ctx.strict_escapes = strict;
        }
        if let Some(resolve) = config.resolve_symlinks {
            ctx.resolve_symlinks = resolve;
        }
        if let Some(mounts) = &config.mounts {
            let mut table = MountTable::default();
            for (family, prefix) in mounts {
                table = table.with_style(*family, DriveStyle::mounted(prefix.clone()));
            }
            ctx.mounts = table;
        }
        ctx
    }

    /// The target path family.
    #[must_use]
    pub fn family(&self) -> PathFamily {
        self.family
    }

    /// The home directory value, if one is available.
    #[must_use]
    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }

    /// Whether ambiguous escapes are rejected.
    #[must_use]
    pub fn strict_escapes(&self) -> bool {
        self.strict_escapes
    }

    /// Whether the lexical result is refined through the filesystem.
    #[must_use]
    pub fn resolve_symlinks(&self) -> bool {
        self.resolve_symlinks
    }

    /// The drive-mount translation table.
    #[must_use]
    pub fn mounts(&self) -> &MountTable {
        &self.mounts
    }
}
