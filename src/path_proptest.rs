//! Property-based tests for path manipulation functions.
//!
//! proptest drives `clean` and `tree_rel` with arbitrary path-shaped strings
//! and checks the properties that must hold no matter the input.

#[cfg(test)]
mod proptest_tests {
    use crate::path::{clean, tree_rel};
    use proptest::prelude::*;

    /// Raw strings over the path alphabet: separators, dots, and short names.
    /// This covers repeated separators, `.`/`..` elements, and trailing
    /// separators without hand-picking cases.
    fn path_input() -> impl Strategy<Value = String> {
        "[a-z/.]{0,16}"
    }

    // ============================================================================
    // clean property tests
    // ============================================================================

    proptest! {
        /// Property: clean is a fixed point (cleaning twice changes nothing)
        #[test]
        fn clean_is_idempotent(input in path_input()) {
            let once = clean(&input);
            prop_assert_eq!(clean(&once), once);
        }

        /// Property: clean never returns the empty string
        #[test]
        fn clean_is_never_empty(input in path_input()) {
            prop_assert!(!clean(&input).is_empty());
        }

        /// Property: clean collapses every repeated separator
        #[test]
        fn clean_leaves_no_double_separator(input in path_input()) {
            prop_assert!(!clean(&input).contains("//"));
        }

        /// Property: clean preserves rootedness in both directions
        #[test]
        fn clean_preserves_rootedness(input in path_input()) {
            let cleaned = clean(&input);
            prop_assert_eq!(cleaned.starts_with('/'), input.starts_with('/'));
        }

        /// Property: clean drops trailing separators except for the bare root
        #[test]
        fn clean_drops_trailing_separator(input in path_input()) {
            let cleaned = clean(&input);
            if cleaned != "/" {
                prop_assert!(!cleaned.ends_with('/'));
            }
        }

        /// Property: no `.` elements survive unless the result is exactly "."
        #[test]
        fn clean_removes_dot_elements(input in path_input()) {
            let cleaned = clean(&input);
            if cleaned != "." {
                prop_assert!(cleaned.split('/').all(|seg| seg != "."));
            }
        }

        /// Property: `..` elements only survive as a leading run of a relative
        /// result, and never in a rooted one
        #[test]
        fn clean_confines_dotdot_to_leading_run(input in path_input()) {
            let cleaned = clean(&input);
            if cleaned.starts_with('/') {
                prop_assert!(cleaned.split('/').all(|seg| seg != ".."));
            } else {
                let mut run_over = false;
                for seg in cleaned.split('/') {
                    if seg == ".." {
                        prop_assert!(!run_over, "stray .. in {:?}", cleaned);
                    } else {
                        run_over = true;
                    }
                }
            }
        }
    }

    // ============================================================================
    // tree_rel property tests
    // ============================================================================

    proptest! {
        /// Property: tree-relative paths never start with a separator
        #[test]
        fn tree_rel_is_relative(input in path_input()) {
            prop_assert!(!tree_rel(&clean(&input)).starts_with('/'));
        }

        /// Property: tree_rel maps the whole-tree forms to the empty string
        /// and nothing else to "."
        #[test]
        fn tree_rel_never_yields_dot(input in path_input()) {
            let cleaned = clean(&input);
            prop_assert_ne!(tree_rel(&cleaned), ".");
        }

        /// Property: reducing an already tree-relative path is the identity
        #[test]
        fn tree_rel_is_idempotent(input in path_input()) {
            let rel = tree_rel(&clean(&input)).to_string();
            if !rel.is_empty() {
                prop_assert_eq!(tree_rel(&rel), rel.as_str());
            }
        }
    }
}
