//! Path family identification.
//!
//! A path family is one of the Windows-adjacent environments whose path
//! conventions this library understands: native Windows, MinGW32, MinGW64,
//! and Cygwin. The family decides which character joins segments and how a
//! drive root is written (see [`crate::mount`]).

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A Windows-family path convention.
///
/// Each family has its own separator and drive-root style:
///
/// | Family    | Separator | Drive root      |
/// |-----------|-----------|-----------------|
/// | `Windows` | `\`       | `C:\`           |
/// | `MinGw32` | `/`       | `/c/`           |
/// | `MinGw64` | `/`       | `/c/`           |
/// | `Cygwin`  | `/`       | `/cygdrive/c/`  |
///
/// # Examples
///
/// ```
/// use wincanon::PathFamily;
///
/// assert_eq!(PathFamily::Windows.separator(), '\\');
/// assert_eq!(PathFamily::Cygwin.separator(), '/');
/// assert_eq!(PathFamily::parse("mingw64").unwrap(), PathFamily::MinGw64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathFamily {
    /// Native Windows conventions (`C:\Users\x`).
    Windows,
    /// MinGW 32-bit conventions (`/c/Users/x`).
    MinGw32,
    /// MinGW 64-bit conventions (`/c/Users/x`).
    MinGw64,
    /// Cygwin conventions (`/cygdrive/c/Users/x`).
    Cygwin,
}

impl fmt::Display for PathFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::MinGw32 => write!(f, "mingw32"),
            Self::MinGw64 => write!(f, "mingw64"),
            Self::Cygwin => write!(f, "cygwin"),
        }
    }
}

impl PathFamily {
    /// All supported families, in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wincanon::PathFamily;
    ///
    /// assert_eq!(PathFamily::all().len(), 4);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Windows, Self::MinGw32, Self::MinGw64, Self::Cygwin]
    }

    /// Parses a family from a string.
    ///
    /// Recognizes: "windows", "mingw32", "mingw64", "cygwin"
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use wincanon::PathFamily;
    ///
    /// assert_eq!(PathFamily::parse("CYGWIN").unwrap(), PathFamily::Cygwin);
    /// assert!(PathFamily::parse("plan9").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "mingw32" => Ok(Self::MinGw32),
            "mingw64" => Ok(Self::MinGw64),
            "cygwin" => Ok(Self::Cygwin),
            _ => Err(format!(
                "invalid path family: {s} (expected windows/mingw32/mingw64/cygwin)"
            )),
        }
    }

    /// The separator character used when rendering paths for this family.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::MinGw32 | Self::MinGw64 | Self::Cygwin => '/',
        }
    }

    /// Whether `\` is unconditionally a separator for this family.
    ///
    /// On native Windows the backslash has no escape semantics; under the
    /// POSIX-on-Windows families it doubles as a shell escape character.
    #[must_use]
    pub const fn uses_backslash_separators(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Detect the active family from the process environment.
    ///
    /// Inspects `MSYSTEM` (set by MSYS2/MinGW shells) and `OSTYPE` (set by
    /// Cygwin shells), falling back to native Windows conventions when
    /// neither identifies a POSIX-on-Windows environment. `MSYSTEM=MSYS`
    /// maps to Cygwin since MSYS inherits Cygwin's path conventions.
    #[must_use]
    pub fn detect() -> Self {
        if let Ok(msystem) = env::var("MSYSTEM") {
            match msystem.to_uppercase().as_str() {
                "MINGW32" => return Self::MinGw32,
                "MINGW64" | "UCRT64" | "CLANG64" => return Self::MinGw64,
                "MSYS" => return Self::Cygwin,
                _ => {}
            }
        }
        if let Ok(ostype) = env::var("OSTYPE") {
            if ostype.to_lowercase().contains("cygwin") {
                return Self::Cygwin;
            }
        }
        Self::Windows
    }
}
