//! Optional filesystem refinement.
//!
//! Lexical canonicalization never touches the filesystem. When symlink
//! resolution is enabled on the context, the lexical result is handed to
//! the operating system for a best-effort pass: the longest existing
//! ancestor is resolved through `fs::canonicalize` and the non-existent
//! remainder is reattached. Any failure leaves the lexical result
//! standing, so non-existent paths are never an error.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve a rendered path through the filesystem.
///
/// Returns `None` when the path is not absolute on this host, has no
/// existing ancestor, or resolves to a form this library does not model
/// (UNC, non-UTF-8). The caller keeps the lexical result in those cases.
pub(crate) fn refine(rendered: &str) -> Option<String> {
    let path = Path::new(rendered);
    if !path.is_absolute() {
        return None;
    }

    let (existing, remainder) = split_existing(path)?;
    let resolved = fs::canonicalize(&existing).ok()?;
    let rejoined = match remainder {
        Some(rest) => resolved.join(rest),
        None => resolved,
    };

    let text = rejoined.to_str()?;
    // Windows hosts return verbatim paths from canonicalize.
    let text = text.strip_prefix(r"\\?\").unwrap_or(text);
    if text.starts_with(r"\\") {
        return None;
    }
    Some(text.to_string())
}

/// Split a path into its longest existing ancestor and the remainder.
fn split_existing(path: &Path) -> Option<(PathBuf, Option<PathBuf>)> {
    if path.exists() {
        return Some((path.to_path_buf(), None));
    }

    let mut current = path.to_path_buf();
    let mut missing: Vec<OsString> = Vec::new();

    loop {
        match current.file_name() {
            Some(name) => {
                missing.push(name.to_os_string());
                current.pop();
            }
            None => return None,
        }
        if current.exists() {
            missing.reverse();
            return Some((current, Some(missing.into_iter().collect())));
        }
    }
}
