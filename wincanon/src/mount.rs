//! Pluggable drive-root translation.
//!
//! Drive-letter/mount translation is modeled as a lookup from path family
//! to a [`DriveStyle`] rather than hard-coded branches, so new conventions
//! can be added without touching the resolution algorithm. Input
//! recognition is bidirectional: every named mount prefix in the table is
//! recognized on input regardless of which family is active, so a
//! Cygwin-style path handed to a native-Windows context still maps to the
//! current family's canonical form.

use std::collections::BTreeMap;
use std::fmt;

use crate::family::PathFamily;

/// How a drive root is written for a given family.
///
/// # Examples
///
/// ```
/// use wincanon::DriveStyle;
///
/// let letter = DriveStyle::Letter;             // C:\Users
/// let cygwin = DriveStyle::mounted("cygdrive"); // /cygdrive/c/Users
/// let mingw = DriveStyle::mounted("");          // /c/Users
/// assert_ne!(letter, cygwin);
/// assert_ne!(cygwin, mingw);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveStyle {
    /// Drive-letter form: `C:\...`.
    Letter,
    /// POSIX mount form: `/{prefix}/c/...`, or `/c/...` when the prefix
    /// is empty.
    Mounted {
        /// The mount prefix without surrounding separators
        /// (e.g. `cygdrive`). Empty for bare single-letter mounts.
        prefix: String,
    },
}

impl DriveStyle {
    /// Create a mount-form style, trimming any surrounding separators
    /// from the prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use wincanon::DriveStyle;
    ///
    /// assert_eq!(DriveStyle::mounted("/cygdrive/"), DriveStyle::mounted("cygdrive"));
    /// ```
    #[must_use]
    pub fn mounted(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self::Mounted {
            prefix: prefix.trim_matches(|c| c == '/' || c == '\\').to_string(),
        }
    }
}

impl fmt::Display for DriveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter => write!(f, "drive letter (C:\\...)"),
            Self::Mounted { prefix } if prefix.is_empty() => write!(f, "mount (/c/...)"),
            Self::Mounted { prefix } => write!(f, "mount (/{prefix}/c/...)"),
        }
    }
}

/// Lookup table mapping each path family to its drive-root style.
///
/// The default table carries the conventional styles: native Windows uses
/// drive letters, MinGW uses bare single-letter mounts, Cygwin uses
/// `/cygdrive` mounts.
///
/// # Examples
///
/// ```
/// use wincanon::{DriveStyle, MountTable, PathFamily};
///
/// let table = MountTable::default();
/// assert_eq!(*table.style_for(PathFamily::Windows), DriveStyle::Letter);
/// assert_eq!(
///     *table.style_for(PathFamily::Cygwin),
///     DriveStyle::mounted("cygdrive")
/// );
///
/// // Styles are pluggable per family.
/// let table = MountTable::default()
///     .with_style(PathFamily::Cygwin, DriveStyle::mounted("mnt"));
/// assert_eq!(*table.style_for(PathFamily::Cygwin), DriveStyle::mounted("mnt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountTable {
    styles: BTreeMap<PathFamily, DriveStyle>,
}

/// Fallback style for families missing from a customized table.
static FALLBACK_STYLE: DriveStyle = DriveStyle::Letter;

impl Default for MountTable {
    fn default() -> Self {
        let mut styles = BTreeMap::new();
        styles.insert(PathFamily::Windows, DriveStyle::Letter);
        styles.insert(PathFamily::MinGw32, DriveStyle::mounted(""));
        styles.insert(PathFamily::MinGw64, DriveStyle::mounted(""));
        styles.insert(PathFamily::Cygwin, DriveStyle::mounted("cygdrive"));
        Self { styles }
    }
}

impl MountTable {
    /// Create the default table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the style for one family, returning the modified table.
    #[must_use]
    pub fn with_style(mut self, family: PathFamily, style: DriveStyle) -> Self {
        self.styles.insert(family, style);
        self
    }

    /// The style used to render drive roots for `family`.
    ///
    /// Families absent from a customized table fall back to drive-letter
    /// form.
    #[must_use]
    pub fn style_for(&self, family: PathFamily) -> &DriveStyle {
        self.styles.get(&family).unwrap_or(&FALLBACK_STYLE)
    }

    /// All distinct non-empty mount prefixes known to the table.
    ///
    /// These are recognized when classifying input roots, independent of
    /// the active family.
    ///
    /// # Examples
    ///
    /// ```
    /// use wincanon::MountTable;
    ///
    /// let table = MountTable::default();
    /// let prefixes = table.named_prefixes();
    /// assert_eq!(prefixes, vec!["cygdrive"]);
    /// ```
    #[must_use]
    pub fn named_prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = self
            .styles
            .values()
            .filter_map(|style| match style {
                DriveStyle::Mounted { prefix } if !prefix.is_empty() => Some(prefix.as_str()),
                _ => None,
            })
            .collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        let table = MountTable::default();
        assert_eq!(*table.style_for(PathFamily::Windows), DriveStyle::Letter);
        assert_eq!(
            *table.style_for(PathFamily::MinGw32),
            DriveStyle::mounted("")
        );
        assert_eq!(
            *table.style_for(PathFamily::MinGw64),
            DriveStyle::mounted("")
        );
        assert_eq!(
            *table.style_for(PathFamily::Cygwin),
            DriveStyle::mounted("cygdrive")
        );
    }

    #[test]
    fn test_mounted_trims_separators() {
        assert_eq!(
            DriveStyle::mounted("/cygdrive"),
            DriveStyle::Mounted {
                prefix: "cygdrive".to_string()
            }
        );
        assert_eq!(
            DriveStyle::mounted("\\mnt\\"),
            DriveStyle::Mounted {
                prefix: "mnt".to_string()
            }
        );
    }

    #[test]
    fn test_with_style_overrides() {
        let table =
            MountTable::default().with_style(PathFamily::Cygwin, DriveStyle::mounted("mnt"));
        assert_eq!(*table.style_for(PathFamily::Cygwin), DriveStyle::mounted("mnt"));
        // Other families untouched
        assert_eq!(*table.style_for(PathFamily::Windows), DriveStyle::Letter);
    }

    #[test]
    fn test_named_prefixes_default() {
        assert_eq!(MountTable::default().named_prefixes(), vec!["cygdrive"]);
    }

    #[test]
    fn test_named_prefixes_deduplicated_and_sorted() {
        let table = MountTable::default()
            .with_style(PathFamily::MinGw32, DriveStyle::mounted("mnt"))
            .with_style(PathFamily::MinGw64, DriveStyle::mounted("mnt"));
        assert_eq!(table.named_prefixes(), vec!["cygdrive", "mnt"]);
    }

    #[test]
    fn test_style_display() {
        assert_eq!(format!("{}", DriveStyle::Letter), "drive letter (C:\\...)");
        assert_eq!(format!("{}", DriveStyle::mounted("")), "mount (/c/...)");
        assert_eq!(
            format!("{}", DriveStyle::mounted("cygdrive")),
            "mount (/cygdrive/c/...)"
        );
    }
}
