//! Gift ring assignment.
//!
//! Each participant is fingerprinted over their full field set, participants
//! are sorted by fingerprint, and each gives to the next in sorted order with
//! the last wrapping to the first. One ring through everyone, reproducible on
//! every re-run over the same survey data.

use crate::core::errors::{Error, Result};
use crate::core::{Assignment, Participant, ALL_FIELDS};
use sha2::{Digest, Sha256};

/// Stable hex digest of a participant's full field set, in canonical order.
///
/// This is purely a sort key; it carries no process or environment state, so
/// the ring it produces is identical across runs and machines.
pub fn fingerprint(participant: &Participant) -> String {
    let canonical = ALL_FIELDS
        .iter()
        .map(|field| format!("{}: {}", field.key(), participant.field(*field)))
        .collect::<Vec<_>>()
        .join(" ");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Link the participants into a single gift ring.
///
/// Ties on equal fingerprints (duplicate records) fall back to the original
/// row index, keeping the sort total.
pub fn assign_ring(participants: &[Participant]) -> Result<Assignment> {
    if participants.len() < 2 {
        return Err(Error::DegenerateAssignment {
            count: participants.len(),
        });
    }

    let mut order: Vec<usize> = (0..participants.len()).collect();
    order.sort_by_cached_key(|&index| (fingerprint(&participants[index]), index));
    Ok(Assignment::from_cycle(&order))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(name: &str) -> Participant {
        Participant {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            ..Participant::default()
        }
    }

    fn ring_of(names: &[&str]) -> (Vec<Participant>, Assignment) {
        let participants: Vec<_> = names.iter().map(|name| participant(name)).collect();
        let assignment = assign_ring(&participants).unwrap();
        (participants, assignment)
    }

    #[test]
    fn fingerprint_is_stable_across_calls() {
        let ada = participant("Ada");
        assert_eq!(fingerprint(&ada), fingerprint(&ada.clone()));
    }

    #[test]
    fn fingerprint_changes_when_any_field_changes() {
        let ada = participant("Ada");
        let mut repainted = ada.clone();
        repainted.favorite_color = "vermilion".to_string();
        assert_ne!(fingerprint(&ada), fingerprint(&repainted));

        let mut opted_in = ada.clone();
        opted_in.reveal_giving = true;
        assert_ne!(fingerprint(&ada), fingerprint(&opted_in));
    }

    #[test]
    fn ring_visits_everyone_exactly_once() {
        let (participants, assignment) = ring_of(&["Ada", "Grace", "Edsger", "Barbara", "Donald"]);
        let n = participants.len();

        let mut current = 0;
        for step in 1..n {
            current = assignment.recipient_of(current);
            assert_ne!(current, 0, "returned to start after {step} < {n} steps");
        }
        assert_eq!(assignment.recipient_of(current), 0);
    }

    #[test]
    fn ring_has_no_fixed_points() {
        let (participants, assignment) = ring_of(&["Ada", "Grace", "Edsger"]);
        for giver in 0..participants.len() {
            assert_ne!(assignment.recipient_of(giver), giver);
        }
    }

    #[test]
    fn two_participants_form_the_mutual_two_cycle() {
        let (_, assignment) = ring_of(&["Ada", "Grace"]);
        assert_eq!(assignment.recipient_of(0), 1);
        assert_eq!(assignment.recipient_of(1), 0);
    }

    #[test]
    fn fewer_than_two_participants_is_degenerate() {
        assert!(matches!(
            assign_ring(&[]),
            Err(Error::DegenerateAssignment { count: 0 })
        ));
        assert!(matches!(
            assign_ring(&[participant("Ada")]),
            Err(Error::DegenerateAssignment { count: 1 })
        ));
    }

    #[test]
    fn rerunning_reproduces_the_identical_ring() {
        let (participants, first) = ring_of(&["Ada", "Grace", "Edsger", "Barbara"]);
        let second = assign_ring(&participants).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ring_is_independent_of_row_order() {
        let (participants, assignment) = ring_of(&["Ada", "Grace", "Edsger"]);

        let mut reversed = participants.clone();
        reversed.reverse();
        let reversed_assignment = assign_ring(&reversed).unwrap();

        // Compare by name, since indices refer to different row orders.
        for giver in 0..participants.len() {
            let recipient = &participants[assignment.recipient_of(giver)].name;
            let reversed_giver = reversed
                .iter()
                .position(|p| p.name == participants[giver].name)
                .unwrap();
            let reversed_recipient =
                &reversed[reversed_assignment.recipient_of(reversed_giver)].name;
            assert_eq!(recipient, reversed_recipient);
        }
    }

    #[test]
    fn identical_records_fall_back_to_row_order() {
        let participants = vec![participant("Ada"), participant("Ada"), participant("Ada")];
        let assignment = assign_ring(&participants).unwrap();
        // Equal fingerprints sort by index, so the ring is 0 -> 1 -> 2 -> 0.
        assert_eq!(assignment.recipient_of(0), 1);
        assert_eq!(assignment.recipient_of(1), 2);
        assert_eq!(assignment.recipient_of(2), 0);
    }
}
