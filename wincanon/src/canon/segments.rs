//! Dot-segment resolution.
//!
//! Resolves `.` and `..` components against the segment list produced by
//! the lexer. Resolution is purely lexical and never consults the
//! filesystem, so `a/b/../c` becomes `a/c` even when `b` is a symlink.

use crate::canon::lexer::Root;
use crate::error::{Error, Result};

/// Collapse `.` and `..` segments.
///
/// Anchored paths (drive or rooted) fail with [`Error::EscapesRoot`] if a
/// `..` would climb above the root. Relative paths keep leading `..`
/// segments since their base is unknown.
pub(crate) fn resolve(root: Root, segments: Vec<String>, original: &str) -> Result<Vec<String>> {
    let anchored = root != Root::Relative;
    let mut resolved: Vec<String> = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment.as_str() {
            "." => {}
            ".." => match resolved.last().map(String::as_str) {
                Some(last) if last != ".." => {
                    resolved.pop();
                }
                _ if anchored => {
                    return Err(Error::EscapesRoot {
                        path: original.to_string(),
                    });
                }
                _ => resolved.push(segment),
            },
            _ => resolved.push(segment),
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_plain_segments_unchanged() {
        let result = resolve(Root::Rooted, segs(&["usr", "bin"]), "/usr/bin").unwrap();
        assert_eq!(result, segs(&["usr", "bin"]));
    }

    #[test]
    fn test_dot_removed() {
        let result = resolve(Root::Relative, segs(&["a", ".", "b", "."]), "a/./b/.").unwrap();
        assert_eq!(result, segs(&["a", "b"]));
    }

    #[test]
    fn test_dotdot_pops() {
        let result = resolve(Root::Drive('C'), segs(&["a", "b", "..", "c"]), "C:/a/b/../c").unwrap();
        assert_eq!(result, segs(&["a", "c"]));
    }

    #[test]
    fn test_dotdot_through_symlink_candidate_is_lexical() {
        let result = resolve(Root::Rooted, segs(&["x", "link", "..", "y"]), "/x/link/../y").unwrap();
        assert_eq!(result, segs(&["x", "y"]));
    }

    #[test]
    fn test_anchored_underflow_is_error() {
        let err = resolve(Root::Drive('C'), segs(&["..", "x"]), "C:/../x").unwrap_err();
        assert!(matches!(err, Error::EscapesRoot { .. }));

        let err = resolve(Root::Rooted, segs(&["a", "..", ".."]), "/a/../..").unwrap_err();
        assert!(matches!(err, Error::EscapesRoot { .. }));
    }

    #[test]
    fn test_relative_keeps_leading_dotdot() {
        let result = resolve(Root::Relative, segs(&["..", "..", "a"]), "../../a").unwrap();
        assert_eq!(result, segs(&["..", "..", "a"]));
    }

    #[test]
    fn test_relative_mixed_dotdot() {
        let result = resolve(Root::Relative, segs(&["a", "..", "..", "b"]), "a/../../b").unwrap();
        assert_eq!(result, segs(&["..", "b"]));
    }

    #[test]
    fn test_everything_collapses_to_empty() {
        let result = resolve(Root::Rooted, segs(&["a", ".."]), "/a/..").unwrap();
        assert!(result.is_empty());

        let result = resolve(Root::Relative, segs(&["a", "..", "."]), "a/../.").unwrap();
        assert!(result.is_empty());
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn segment_strategy() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec(
                prop_oneof![
                    Just(".".to_string()),
                    Just("..".to_string()),
                    "[a-zA-Z0-9_-]{1,10}".prop_map(|s| s),
                ],
                1..=10,
            )
        }

        proptest! {
            /// Resolution of an anchored path never leaves dot segments.
            #[test]
            fn resolve_rooted_no_dots(segments in segment_strategy()) {
                if let Ok(resolved) = resolve(Root::Rooted, segments, "input") {
                    prop_assert!(resolved.iter().all(|s| s != "." && s != ".."));
                }
            }

            /// Resolution is idempotent.
            #[test]
            fn resolve_idempotent(segments in segment_strategy()) {
                for root in [Root::Rooted, Root::Relative, Root::Drive('C')] {
                    if let Ok(once) = resolve(root, segments.clone(), "input") {
                        let twice = resolve(root, once.clone(), "input").unwrap();
                        prop_assert_eq!(once, twice);
                    }
                }
            }

            /// On a relative path, `..` only survives at the front.
            #[test]
            fn resolve_relative_dotdot_prefix_only(segments in segment_strategy()) {
                let resolved = resolve(Root::Relative, segments, "input").unwrap();
                let first_normal = resolved.iter().position(|s| s != "..");
                if let Some(idx) = first_normal {
                    prop_assert!(resolved[idx..].iter().all(|s| s != ".."));
                }
            }
        }
    }
}
