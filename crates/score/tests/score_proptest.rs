//! Property-based tests for the score bounds.

use dataduel_core::{Incident, Service, Severity};
use dataduel_score::{score_points, score_set_match};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn rows_from_ids(ids: &[u16]) -> Vec<Incident> {
    ids.iter()
        .map(|n| {
            Incident::new(
                format!("INC-{}", n),
                Service::Auth,
                Severity::High,
                30,
                0.1,
                400,
            )
        })
        .collect()
}

proptest! {
    /// Property: set-match metrics always land in [0, 1], efficiency in
    /// [0.4, 1], for any predicted/expected sets and any complexity.
    #[test]
    fn set_match_bounds(
        expected_ids in prop::collection::btree_set(0u16..50, 0..20),
        predicted_ids in prop::collection::vec(0u16..50, 0..30),
        complexity in 0u8..=20,
    ) {
        let expected: BTreeSet<String> =
            expected_ids.iter().map(|n| format!("INC-{}", n)).collect();
        let rows = rows_from_ids(&predicted_ids);

        let result = score_set_match(&expected, &rows, complexity);
        prop_assert!((0.0..=1.0).contains(&result.score));
        prop_assert!((0.0..=1.0).contains(&result.precision));
        prop_assert!((0.0..=1.0).contains(&result.recall));
        prop_assert!((0.4..=1.0).contains(&result.efficiency));
    }

    /// Property: point-wise metrics always land in [0, 1].
    #[test]
    fn point_score_bounds(
        actual in prop::collection::vec(0u8..=1, 0..64),
        predicted in prop::collection::vec(0u8..=1, 0..64),
    ) {
        let result = score_points(&actual, &predicted);
        prop_assert!((0.0..=1.0).contains(&result.score));
        prop_assert!((0.0..=1.0).contains(&result.precision));
        prop_assert!((0.0..=1.0).contains(&result.recall));
        prop_assert!((0.0..=1.0).contains(&result.latency));
    }

    /// Property: a submission equal to the answer has perfect precision
    /// and recall.
    #[test]
    fn exact_coverage_is_perfect(
        ids in prop::collection::btree_set(0u16..50, 1..20),
    ) {
        let expected: BTreeSet<String> = ids.iter().map(|n| format!("INC-{}", n)).collect();
        let id_list: Vec<u16> = ids.into_iter().collect();
        let rows = rows_from_ids(&id_list);

        let result = score_set_match(&expected, &rows, 4);
        prop_assert_eq!(result.precision, 1.0);
        prop_assert_eq!(result.recall, 1.0);
    }
}
