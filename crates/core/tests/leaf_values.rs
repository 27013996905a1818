//! Property tests for leaf input validation.

use gametree_core::{leaf_count, Branch, GameTreeError, LeafValues, Score};
use proptest::prelude::*;

proptest! {
    /// Exactly 2^depth values are accepted, in order.
    #[test]
    fn exact_count_accepted(depth in 0u32..10, seed in any::<Score>()) {
        let n = leaf_count(depth).unwrap();
        let values: Vec<Score> = (0..n as Score).map(|i| i.wrapping_add(seed)).collect();
        let leaves = LeafValues::new(values.clone(), depth).unwrap();
        prop_assert_eq!(leaves.depth(), depth);
        prop_assert_eq!(leaves.into_inner(), values);
    }

    /// Any other count is rejected with both counts reported.
    #[test]
    fn wrong_count_rejected(depth in 0u32..8, len in 0usize..300) {
        let expected = leaf_count(depth).unwrap();
        prop_assume!(len != expected);
        prop_assert_eq!(
            LeafValues::new(vec![0; len], depth),
            Err(GameTreeError::LeafCountMismatch { expected, actual: len })
        );
    }

    /// Parsing the textual form of integers gives back the same integers.
    #[test]
    fn parse_matches_integers(values in proptest::collection::vec(any::<Score>(), 8)) {
        let raw: Vec<String> = values.iter().map(|v| format!(" {v} ")).collect();
        let leaves = LeafValues::parse(&raw, 3).unwrap();
        prop_assert_eq!(leaves.as_slice(), values.as_slice());
    }

    /// The first non-integer is reported by position.
    #[test]
    fn parse_reports_first_bad_leaf(bad in 0usize..4) {
        let mut raw = vec!["1", "2", "3", "4"];
        raw[bad] = "x";
        prop_assert_eq!(
            LeafValues::parse(&raw, 2),
            Err(GameTreeError::NonIntegerLeafValue { index: bad, input: "x".to_string() })
        );
    }

    /// Paths made only of L/R parse to one step per character.
    #[test]
    fn path_parses_per_character(path in "[LRlr]{0,12}") {
        let steps = Branch::parse_path(&path).unwrap();
        prop_assert_eq!(steps.len(), path.len());
        let rendered: String = steps.iter().map(|b| b.to_string()).collect();
        prop_assert_eq!(rendered, path.to_ascii_uppercase());
    }
}
