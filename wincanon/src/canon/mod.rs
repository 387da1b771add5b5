//! Path canonicalization pipeline.
//!
//! This module turns path strings written in any Windows-family
//! convention (native Windows, MinGW32, MinGW64, Cygwin) into a single
//! canonical form for a target family. Canonicalization is lexical: the
//! result is computed from the text and the
//! [`EnvironmentContext`](crate::EnvironmentContext) alone, so paths that
//! do not exist canonicalize just as well as paths that do.
//!
//! The pipeline runs in fixed stages:
//!
//! 1. `home`: leading `~` expansion
//! 2. `lexer`: escape-aware separator scan and root classification
//! 3. `segments`: `.`/`..` resolution
//! 4. `render`: family-specific output
//! 5. `symlink`: optional best-effort filesystem refinement
//!
//! # Examples
//!
//! ```
//! use wincanon::{canonicalize, EnvironmentContext, PathFamily};
//!
//! let ctx = EnvironmentContext::new(PathFamily::Cygwin).with_home("/home/u");
//! let path = canonicalize(r"C:\Temp\..\Users\x", &ctx).unwrap();
//! assert_eq!(path.as_str(), "/cygdrive/c/Users/x");
//!
//! let ctx = EnvironmentContext::new(PathFamily::Windows).with_home(r"C:\Users\u");
//! let path = canonicalize("/f/Downloads/./file.txt", &ctx).unwrap();
//! assert_eq!(path.as_str(), r"F:\Downloads\file.txt");
//! ```

mod home;
mod lexer;
mod render;
mod segments;
mod symlink;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use types::CanonicalPath;

use crate::context::EnvironmentContext;
use crate::error::{Error, Result};

/// Canonicalize a path string for the context's family.
///
/// The input may use any mix of the supported conventions; the output
/// uses exactly one. Canonicalization is deterministic for a given
/// context and, in lexical mode, idempotent.
///
/// # Errors
///
/// Returns an error for empty input, `~user` forms, a `~` with no home
/// value available, UNC paths, drive-relative or malformed drive
/// specifiers, `..` escaping an anchored root, and (in strict mode)
/// ambiguous backslash escapes.
///
/// # Examples
///
/// ```
/// use wincanon::{canonicalize, EnvironmentContext, PathFamily};
///
/// let ctx = EnvironmentContext::new(PathFamily::MinGw64).with_home("/c/Users/u");
/// assert_eq!(canonicalize(r"F:\a\b\..\c", &ctx).unwrap().as_str(), "/f/a/c");
/// assert_eq!(canonicalize("~/docs", &ctx).unwrap().as_str(), "/c/Users/u/docs");
/// ```
pub fn canonicalize(raw: &str, ctx: &EnvironmentContext) -> Result<CanonicalPath> {
    if raw.is_empty() {
        return Err(Error::EmptyPath);
    }

    let expanded = home::expand_home(raw, ctx)?;
    let (root, segments) = lexer::tokenize(&expanded, ctx)?;
    let resolved = segments::resolve(root, segments, raw)?;
    let mut rendered = render::render(root, &resolved, ctx);

    if ctx.resolve_symlinks() {
        if let Some(refined) = symlink::refine(&rendered) {
            // Re-render the host path in the target family's convention.
            // A refined path that no longer tokenizes keeps the lexical
            // result.
            if let Ok((root, segments)) = lexer::tokenize(&refined, ctx) {
                if let Ok(resolved) = segments::resolve(root, segments, raw) {
                    rendered = render::render(root, &resolved, ctx);
                }
            }
        }
    }

    log::trace!("canonicalized {raw:?} to {rendered:?}");
    Ok(CanonicalPath::new(rendered, ctx.family()))
}
