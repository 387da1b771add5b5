//! Canonical path result type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::family::PathFamily;

/// The result of canonicalization: a normalized path string tagged with
/// the family whose conventions it follows.
///
/// # Examples
///
/// ```
/// use wincanon::{canonicalize, EnvironmentContext, PathFamily};
///
/// let ctx = EnvironmentContext::new(PathFamily::Cygwin).with_home("/home/u");
/// let path = canonicalize(r"C:\Temp\..\Users", &ctx).unwrap();
/// assert_eq!(path.as_str(), "/cygdrive/c/Users");
/// assert_eq!(path.family(), PathFamily::Cygwin);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalPath {
    value: String,
    family: PathFamily,
}

impl CanonicalPath {
    pub(crate) fn new(value: String, family: PathFamily) -> Self {
        Self { value, family }
    }

    /// The canonical path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The family whose conventions the text follows.
    #[must_use]
    pub fn family(&self) -> PathFamily {
        self.family
    }

    /// Consume the value, yielding the canonical text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for CanonicalPath {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<CanonicalPath> for String {
    fn from(path: CanonicalPath) -> Self {
        path.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let path = CanonicalPath::new("/c/temp".to_string(), PathFamily::MinGw64);
        assert_eq!(path.as_str(), "/c/temp");
        assert_eq!(path.family(), PathFamily::MinGw64);
        assert_eq!(path.to_string(), "/c/temp");
        assert_eq!(String::from(path), "/c/temp");
    }

    #[test]
    fn test_serializes_with_family_tag() {
        let path = CanonicalPath::new(r"C:\x".to_string(), PathFamily::Windows);
        let json = serde_json::to_string(&path).unwrap();
        assert!(json.contains("windows"));
    }
}
