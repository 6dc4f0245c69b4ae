//! Tests for candidate sets and the cell state sum type

use wavegrid::algorithm::candidates::{CandidateSet, CellState};

#[test]
fn all_starts_with_the_full_index_range() {
    let set = CandidateSet::all(4);
    assert_eq!(set.count(), 4);
    assert!(!set.is_empty());
    for index in 0..4 {
        assert!(set.contains(index));
    }
    assert!(!set.contains(4));
    assert_eq!(set.to_vec(), vec![0, 1, 2, 3]);
}

#[test]
fn retain_drops_rejected_candidates() {
    let mut set = CandidateSet::all(5);
    set.retain(|index| index % 2 == 0);
    assert_eq!(set.to_vec(), vec![0, 2, 4]);
    assert_eq!(set.count(), 3);
    assert!(!set.contains(1));
}

#[test]
fn emptied_set_stays_empty() {
    let mut set = CandidateSet::all(3);
    set.retain(|_| false);
    assert!(set.is_empty());
    assert_eq!(set.count(), 0);

    // Retain can only remove; a later pass cannot resurrect anything
    set.retain(|_| true);
    assert!(set.is_empty());
    assert_eq!(set.to_vec(), vec![]);
}

#[test]
fn nth_walks_candidates_in_ascending_order() {
    let mut set = CandidateSet::all(6);
    set.retain(|index| index == 1 || index == 3 || index == 5);
    assert_eq!(set.nth(0), Some(1));
    assert_eq!(set.nth(1), Some(3));
    assert_eq!(set.nth(2), Some(5));
    assert_eq!(set.nth(3), None);
}

#[test]
fn cell_state_reports_fixedness() {
    let fixed = CellState::Fixed(2);
    assert!(fixed.is_fixed());
    assert_eq!(fixed.candidate_count(), None);

    let open = CellState::Superposition(CandidateSet::all(3));
    assert!(!open.is_fixed());
    assert_eq!(open.candidate_count(), Some(3));
}
