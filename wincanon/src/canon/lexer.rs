//! Escape-aware separator scanning and root classification.
//!
//! The lexer turns a raw path string into a root marker plus an ordered
//! list of segments. Both `/` and `\` are separator candidates; under the
//! POSIX-on-Windows families a `\` immediately followed by a shell
//! metacharacter is read as an escape sequence instead, and the pair is
//! carried through untouched (or rejected in strict mode). Consecutive
//! separators collapse to one.
//!
//! Root classification is bidirectional across families: drive-letter
//! form (`C:`), named mount form (`/cygdrive/c`), and bare single-letter
//! mount form (`/c`) are all recognized no matter which family is active,
//! so cross-family input still maps to the current family's canonical
//! form.

use crate::context::EnvironmentContext;
use crate::error::{Error, Result};

/// Characters a POSIX shell user plausibly escapes with a backslash.
///
/// A `\` followed by one of these has no separator semantics and is kept
/// as an escape sequence. This matches the permissive, unverified escape
/// handling of the behavior being reproduced; see the crate docs.
const ESCAPABLE: &[char] = &[
    ' ', '\t', '!', '"', '#', '$', '&', '\'', '(', ')', '*', ',', ';', '<', '=', '>', '?', '@',
    '[', ']', '^', '`', '{', '|', '}', '~',
];

/// The root marker of a tokenized path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Root {
    /// Anchored to a drive (letter stored uppercase).
    Drive(char),
    /// Anchored to a separator root with no drive (`/usr/bin`, `\foo`).
    Rooted,
    /// Relative to an unknown base.
    Relative,
}

/// Whether a character is a path-separator candidate.
pub(crate) fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Tokenize a path string into its root marker and segments.
///
/// Fails on UNC input (exactly two leading separators followed by
/// content), on drive-relative input (`C:foo`), on a named mount prefix
/// not followed by a drive letter, and, in strict mode, on ambiguous
/// escape sequences.
pub(crate) fn tokenize(input: &str, ctx: &EnvironmentContext) -> Result<(Root, Vec<String>)> {
    let leading = input.chars().take_while(|c| is_separator(*c)).count();

    // Exactly two leading separators name a UNC server; three or more
    // collapse to an ordinary root.
    if leading == 2 && input.len() > 2 {
        return Err(Error::UnsupportedUncPath {
            path: input.to_string(),
        });
    }

    let segments = split_segments(&input[leading..], ctx)?;
    classify_root(leading > 0, segments, ctx)
}

/// Split the post-root remainder into segments, honoring escapes.
fn split_segments(rest: &str, ctx: &EnvironmentContext) -> Result<Vec<String>> {
    let escapes_active = !ctx.family().uses_backslash_separators();
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = rest.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' && escapes_active {
            if let Some(&next) = chars.peek() {
                if ESCAPABLE.contains(&next) {
                    if ctx.strict_escapes() {
                        return Err(Error::AmbiguousEscape {
                            fragment: format!("\\{next}"),
                        });
                    }
                    current.push('\\');
                    current.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        if is_separator(c) {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    Ok(segments)
}

/// Classify the root of an already-split path and strip any drive marker
/// from the segment list.
fn classify_root(
    rooted: bool,
    segments: Vec<String>,
    ctx: &EnvironmentContext,
) -> Result<(Root, Vec<String>)> {
    if !rooted {
        if let Some(first) = segments.first() {
            if let Some(letter) = drive_specifier(first)? {
                return Ok((Root::Drive(letter), segments[1..].to_vec()));
            }
        }
        return Ok((Root::Relative, segments));
    }

    let Some(first) = segments.first() else {
        return Ok((Root::Rooted, segments));
    };

    // Bare single-letter mount: /c/Users
    if let Some(letter) = single_letter(first) {
        return Ok((
            Root::Drive(letter.to_ascii_uppercase()),
            segments[1..].to_vec(),
        ));
    }

    // Named mount prefixes: /cygdrive/c/Users
    if ctx.mounts().named_prefixes().contains(&first.as_str()) {
        return match segments.get(1).and_then(|seg| single_letter(seg)) {
            Some(letter) => Ok((
                Root::Drive(letter.to_ascii_uppercase()),
                segments[2..].to_vec(),
            )),
            None => Err(Error::MalformedDriveSpecifier {
                fragment: format!("/{first}"),
            }),
        };
    }

    Ok((Root::Rooted, segments))
}

/// A single ASCII letter, e.g. the `c` in `/c/Users`.
fn single_letter(segment: &str) -> Option<char> {
    let mut chars = segment.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => Some(letter),
        _ => None,
    }
}

/// Parse a drive specifier segment (`C:`), rejecting drive-relative forms
/// (`C:foo`).
fn drive_specifier(segment: &str) -> Result<Option<char>> {
    let mut chars = segment.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => {
            if chars.next().is_some() {
                // Drive-relative paths depend on per-drive CWD state,
                // which this library does not model.
                return Err(Error::MalformedDriveSpecifier {
                    fragment: segment.to_string(),
                });
            }
            Ok(Some(letter.to_ascii_uppercase()))
        }
        _ => Ok(None),
    }
}
