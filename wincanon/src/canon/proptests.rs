//! Property-based tests for the canonicalization pipeline.
//!
//! Note: the stage modules carry their own unit tests. This module checks
//! whole-pipeline invariants over generated inputs.

use proptest::prelude::*;

use super::canonicalize;
use crate::context::EnvironmentContext;
use crate::family::PathFamily;

// Strategy for generating plain path components (no dots, no separators,
// no escape-relevant characters).
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn family_strategy() -> impl Strategy<Value = PathFamily> {
    prop::sample::select(PathFamily::all().to_vec())
}

fn separator_strategy() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['/', '\\'])
}

// A root prefix in any supported convention, paired with whether it
// anchors the path.
fn root_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("/".to_string()),
        "[a-zA-Z]".prop_map(|l| format!("{l}:/")),
        "[a-zA-Z]".prop_map(|l| format!("/{l}/")),
        "[a-z]".prop_map(|l| format!("/cygdrive/{l}/")),
    ]
}

fn input_strategy() -> impl Strategy<Value = String> {
    (
        root_strategy(),
        prop::collection::vec((component_strategy(), separator_strategy()), 1..8),
    )
        .prop_map(|(root, parts)| {
            let mut input = root;
            for (i, (component, sep)) in parts.iter().enumerate() {
                if i > 0 {
                    input.push(*sep);
                }
                input.push_str(component);
            }
            input
        })
}

fn context_for(family: PathFamily) -> EnvironmentContext {
    EnvironmentContext::new(family).with_home(r"C:\Users\prop")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Canonicalization is idempotent in lexical mode.
    #[test]
    fn canonicalize_idempotent(input in input_strategy(), family in family_strategy()) {
        let ctx = context_for(family);
        if let Ok(once) = canonicalize(&input, &ctx) {
            let twice = canonicalize(once.as_str(), &ctx).unwrap();
            prop_assert_eq!(once, twice);
        }
    }

    // The output never contains the non-canonical separator for the
    // target family.
    #[test]
    fn canonicalize_uniform_separators(input in input_strategy(), family in family_strategy()) {
        let ctx = context_for(family);
        if let Ok(canonical) = canonicalize(&input, &ctx) {
            let foreign = if family.uses_backslash_separators() { '/' } else { '\\' };
            prop_assert!(!canonical.as_str().contains(foreign));
        }
    }

    // No dot segments survive resolution of anchored inputs.
    #[test]
    fn canonicalize_no_dot_segments(
        prefix in prop::sample::select(vec!["C:/", "/"]),
        parts in prop::collection::vec(
            prop_oneof![component_strategy(), Just(".".to_string()), Just("..".to_string())],
            1..10,
        ),
        family in family_strategy(),
    ) {
        let input = format!("{prefix}{}", parts.join("/"));
        let ctx = context_for(family);
        if let Ok(canonical) = canonicalize(&input, &ctx) {
            let sep = family.separator();
            for segment in canonical.as_str().split(sep) {
                prop_assert_ne!(segment, ".");
                prop_assert_ne!(segment, "..");
            }
        }
    }

    // Determinism: the same input and context always produce the same
    // output.
    #[test]
    fn canonicalize_deterministic(input in input_strategy(), family in family_strategy()) {
        let ctx = context_for(family);
        let first = canonicalize(&input, &ctx);
        let second = canonicalize(&input, &ctx);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "determinism violated for {:?}", input),
        }
    }

    // Drive anchoring survives family translation in both directions.
    #[test]
    fn canonicalize_drive_round_trip(
        letter in "[a-z]",
        parts in prop::collection::vec(component_strategy(), 1..6),
    ) {
        let windows = context_for(PathFamily::Windows);
        let cygwin = context_for(PathFamily::Cygwin);

        let input = format!("{}:\\{}", letter.to_uppercase(), parts.join("\\"));
        let posix = canonicalize(&input, &cygwin).unwrap();
        let back = canonicalize(posix.as_str(), &windows).unwrap();
        prop_assert_eq!(back.as_str(), input.as_str());
    }
}
