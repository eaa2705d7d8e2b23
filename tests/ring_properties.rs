//! Property-based tests for the gift ring assignment
//!
//! These tests verify invariants that should hold for all rosters:
//! - The assignment is a permutation: everyone receives exactly once
//! - The ring is a single cycle: walking it visits everyone before closing
//! - No roster of size >= 2 produces a fixed point
//! - The ring does not depend on survey row order

use pollyanna::{assign_ring, Participant};
use proptest::prelude::*;
use std::collections::HashSet;

fn participant_name() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

/// Rosters of distinct participants (distinct names imply distinct
/// fingerprints).
fn roster(min_size: usize) -> impl Strategy<Value = Vec<Participant>> {
    proptest::collection::hash_set(participant_name(), min_size..24).prop_map(|names| {
        names
            .into_iter()
            .map(|name| Participant {
                email: format!("{name}@example.com"),
                name,
                ..Participant::default()
            })
            .collect()
    })
}

proptest! {
    /// Property: every participant receives from exactly one giver
    #[test]
    fn prop_assignment_is_a_permutation(participants in roster(2)) {
        let assignment = assign_ring(&participants).unwrap();

        let recipients: HashSet<usize> =
            (0..participants.len()).map(|giver| assignment.recipient_of(giver)).collect();
        prop_assert_eq!(recipients.len(), participants.len());
    }

    /// Property: walking the ring from any start visits everyone exactly
    /// once before returning, and never returns early
    #[test]
    fn prop_ring_is_a_single_cycle(participants in roster(2)) {
        let assignment = assign_ring(&participants).unwrap();
        let n = participants.len();

        for start in 0..n {
            let mut current = start;
            for step in 1..n {
                current = assignment.recipient_of(current);
                prop_assert_ne!(current, start, "closed after {} < {} steps", step, n);
            }
            prop_assert_eq!(assignment.recipient_of(current), start);
        }
    }

    /// Property: nobody is assigned to themselves
    #[test]
    fn prop_ring_has_no_fixed_points(participants in roster(2)) {
        let assignment = assign_ring(&participants).unwrap();

        for giver in 0..participants.len() {
            prop_assert_ne!(assignment.recipient_of(giver), giver);
        }
    }

    /// Property: shuffling the survey rows yields the same giver -> recipient
    /// pairs by name
    #[test]
    fn prop_ring_is_invariant_under_row_order(
        (original, shuffled) in roster(2).prop_flat_map(|r| {
            let original = r.clone();
            (Just(original), Just(r).prop_shuffle())
        })
    ) {
        let assignment = assign_ring(&original).unwrap();
        let shuffled_assignment = assign_ring(&shuffled).unwrap();

        for giver in 0..original.len() {
            let recipient = &original[assignment.recipient_of(giver)].name;
            let shuffled_giver = shuffled
                .iter()
                .position(|p| p.name == original[giver].name)
                .unwrap();
            let shuffled_recipient =
                &shuffled[shuffled_assignment.recipient_of(shuffled_giver)].name;
            prop_assert_eq!(recipient, shuffled_recipient);
        }
    }
}
