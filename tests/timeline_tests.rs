//! History timeline behavior tests.
//!
//! These pin down the contract of the bounded snapshot history: cursor
//! bounds after every operation, undo/redo round trips, branch truncation,
//! and eviction once the window fills.

use lifetally::core::{GameMode, MatchSnapshot, PlayerId, Timeline};

use proptest::prelude::*;

/// A snapshot tagged via player 1's life total.
fn snap(tag: i64) -> MatchSnapshot {
    let mut snapshot = MatchSnapshot::new(2, GameMode::Constructed);
    snapshot.set_life(PlayerId::new(0), tag);
    snapshot
}

fn tag_of(snapshot: &MatchSnapshot) -> i64 {
    snapshot.life(PlayerId::new(0))
}

/// Walk the cursor to the floor and report every tag from oldest to newest.
fn all_tags(timeline: &Timeline) -> Vec<i64> {
    let mut probe = timeline.clone();
    while probe.undo() {}
    let mut tags = vec![tag_of(probe.current())];
    while probe.redo() {
        tags.push(tag_of(probe.current()));
    }
    tags
}

#[test]
fn test_undo_redo_round_trip_restores_entry() {
    let mut timeline = Timeline::new(snap(0));
    timeline.append(snap(1));
    timeline.append(snap(2));

    let before = timeline.current().clone();
    let len_before = timeline.len();

    assert!(timeline.undo());
    assert!(timeline.redo());

    assert_eq!(*timeline.current(), before);
    assert_eq!(timeline.len(), len_before);
}

/// Seed E0, commit E1, E2; undo back to E0; commit E3. The E1/E2 branch is
/// gone and redo has nothing to reach.
#[test]
fn test_branch_truncation_discards_redo_branch() {
    let mut timeline = Timeline::new(snap(0));
    timeline.append(snap(1));
    timeline.append(snap(2));
    assert_eq!(timeline.cursor(), 2);

    assert!(timeline.undo());
    assert!(timeline.undo());
    assert_eq!(timeline.cursor(), 0);

    timeline.append(snap(3));

    assert_eq!(timeline.cursor(), 1);
    assert_eq!(timeline.len(), 2);
    assert!(!timeline.redo());
    assert_eq!(all_tags(&timeline), vec![0, 3]);
}

/// Committing capacity+1 snapshots with no undos drops exactly the seed.
#[test]
fn test_eviction_drops_oldest() {
    let capacity = 6;
    let mut timeline = Timeline::with_capacity(capacity, snap(0));

    for tag in 1..=capacity as i64 {
        timeline.append(snap(tag));
    }

    assert_eq!(timeline.len(), capacity);
    assert_eq!(timeline.cursor(), capacity - 1);
    assert_eq!(
        all_tags(&timeline),
        (1..=capacity as i64).collect::<Vec<_>>()
    );
}

#[test]
fn test_boundary_noops_leave_state_unchanged() {
    let mut timeline = Timeline::new(snap(0));
    timeline.append(snap(1));

    assert!(!timeline.redo());
    assert_eq!(timeline.cursor(), 1);
    assert_eq!(timeline.len(), 2);

    assert!(timeline.undo());
    assert!(!timeline.undo());
    assert_eq!(timeline.cursor(), 0);
    assert_eq!(timeline.len(), 2);
}

/// The worked example: capacity 4, seed S0; S1..S3 fill the window, S4
/// evicts the seed, two undos step back to S2, and S5 truncates the branch
/// without resurrecting the stale S4 slot.
#[test]
fn test_capacity_four_scenario() {
    let mut timeline = Timeline::with_capacity(4, snap(0));

    timeline.append(snap(1));
    timeline.append(snap(2));
    timeline.append(snap(3));
    assert_eq!(timeline.cursor(), 3);
    assert_eq!(timeline.len(), 4);

    timeline.append(snap(4));
    assert_eq!(timeline.cursor(), 3);
    assert_eq!(timeline.len(), 4);
    assert_eq!(all_tags(&timeline), vec![1, 2, 3, 4]);

    assert!(timeline.undo());
    assert!(timeline.undo());
    assert_eq!(timeline.cursor(), 1);
    assert_eq!(tag_of(timeline.current()), 2);

    timeline.append(snap(5));
    assert_eq!(timeline.cursor(), 2);
    assert_eq!(timeline.len(), 3);
    assert_eq!(all_tags(&timeline), vec![1, 2, 5]);
    assert!(!timeline.redo());
}

// === Model-based property: the timeline against a naive reference ===

#[derive(Clone, Debug)]
enum Op {
    Append(i64),
    Undo,
    Redo,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0i64..1000).prop_map(Op::Append),
        2 => Just(Op::Undo),
        1 => Just(Op::Redo),
    ]
}

/// Unbounded-naive model of the same semantics: a growable vec of tags, a
/// cursor, truncate-then-evict on append.
struct Model {
    tags: Vec<i64>,
    cursor: usize,
    capacity: usize,
}

impl Model {
    fn new(capacity: usize, seed: i64) -> Self {
        Self {
            tags: vec![seed],
            cursor: 0,
            capacity,
        }
    }

    fn append(&mut self, tag: i64) {
        self.tags.truncate(self.cursor + 1);
        if self.tags.len() == self.capacity {
            self.tags.remove(0);
        }
        self.tags.push(tag);
        self.cursor = self.tags.len() - 1;
    }

    fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn redo(&mut self) -> bool {
        if self.cursor + 1 == self.tags.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

proptest! {
    /// For any operation sequence, the timeline agrees with the model and
    /// the cursor/top/capacity bounds hold after every single operation.
    #[test]
    fn prop_timeline_matches_model(
        capacity in 2usize..8,
        ops in prop::collection::vec(op_strategy(), 1..200),
    ) {
        let mut timeline = Timeline::with_capacity(capacity, snap(-1));
        let mut model = Model::new(capacity, -1);

        for op in ops {
            match op {
                Op::Append(tag) => {
                    timeline.append(snap(tag));
                    model.append(tag);
                }
                Op::Undo => prop_assert_eq!(timeline.undo(), model.undo()),
                Op::Redo => prop_assert_eq!(timeline.redo(), model.redo()),
            }

            // invariant A: 0 <= cursor <= top < capacity
            prop_assert!(timeline.cursor() < timeline.len());
            prop_assert!(timeline.len() <= timeline.capacity());

            prop_assert_eq!(timeline.cursor(), model.cursor);
            prop_assert_eq!(timeline.len(), model.tags.len());
            prop_assert_eq!(tag_of(timeline.current()), model.tags[model.cursor]);
            prop_assert_eq!(timeline.can_undo(), model.cursor > 0);
            prop_assert_eq!(timeline.can_redo(), model.cursor + 1 < model.tags.len());
        }
    }
}
