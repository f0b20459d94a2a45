//! Bounded snapshot history with undo/redo.
//!
//! The timeline is a fixed-capacity, ordered sequence of [`MatchSnapshot`]
//! values plus a cursor. Committing after one or more undos discards the
//! redo branch; committing at capacity evicts the oldest entry and shifts
//! the surviving window down one slot.
//!
//! ## Index discipline
//!
//! Entries at indices `[0, top]` are committed and reachable. Slots above
//! `top` may hold stale data from a discarded branch; they are never read,
//! only overwritten by later commits. After every operation
//! `0 <= cursor <= top < capacity` holds.

use tracing::debug;

use super::snapshot::MatchSnapshot;

/// Default number of snapshots a timeline retains.
pub const MAX_HISTORY: usize = 200;

/// Cursor-addressed, capacity-bounded sequence of match snapshots.
///
/// Created with a seed snapshot and never empty afterwards. Mutated only
/// through [`append`](Timeline::append), [`undo`](Timeline::undo),
/// [`redo`](Timeline::redo), and [`reset`](Timeline::reset).
#[derive(Clone, Debug)]
pub struct Timeline {
    entries: Vec<MatchSnapshot>,
    capacity: usize,
    /// Highest index holding a committed, redo-reachable entry.
    top: usize,
    /// Index of the current entry.
    cursor: usize,
}

impl Timeline {
    /// Create a timeline holding just `seed`, with the default capacity.
    #[must_use]
    pub fn new(seed: MatchSnapshot) -> Self {
        Self::with_capacity(MAX_HISTORY, seed)
    }

    /// Create a timeline holding just `seed`, retaining at most `capacity`
    /// snapshots.
    #[must_use]
    pub fn with_capacity(capacity: usize, seed: MatchSnapshot) -> Self {
        assert!(capacity >= 2, "History capacity must be at least 2");

        let mut entries = Vec::with_capacity(capacity);
        entries.push(seed);

        Self {
            entries,
            capacity,
            top: 0,
            cursor: 0,
        }
    }

    /// Reset to hold exactly `seed`, discarding all prior contents.
    ///
    /// Used when a brand-new match starts; the previous history is
    /// unreachable afterwards.
    pub fn reset(&mut self, seed: MatchSnapshot) {
        self.entries.clear();
        self.entries.push(seed);
        self.top = 0;
        self.cursor = 0;
        debug!("timeline reset");
    }

    /// Commit `next` as the new current entry.
    ///
    /// If the cursor sits below `top` (the user had undone), the redo
    /// branch above the cursor is discarded first and cannot be recovered.
    /// If the window is full, the oldest entry is evicted and every
    /// surviving entry shifts down one index, the cursor tracking the same
    /// logical entry. Always succeeds.
    pub fn append(&mut self, next: MatchSnapshot) {
        // A new commit after undo orphans the redo branch.
        if self.cursor < self.top {
            debug!(
                discarded = self.top - self.cursor,
                "redo branch discarded"
            );
            self.top = self.cursor;
        }

        // Evict before growing past capacity. Must run after truncation so
        // the entry dropped is the true oldest commit.
        if self.top + 1 >= self.capacity {
            self.entries.remove(0);
            self.top -= 1;
            if self.cursor > 0 {
                self.cursor -= 1;
            }
            debug!("oldest snapshot evicted");
        }

        self.top += 1;
        self.cursor += 1;
        if self.cursor < self.entries.len() {
            // Overwrite a stale slot left behind by a discarded branch.
            self.entries[self.cursor] = next;
        } else {
            self.entries.push(next);
        }
        debug_assert_eq!(self.cursor, self.top);
        debug!(cursor = self.cursor, top = self.top, "snapshot committed");
    }

    /// Step the cursor back one entry.
    ///
    /// Returns `false` (nothing to undo) when already at the oldest
    /// reachable entry. Stored entries and `top` are untouched either way,
    /// so a later redo can return.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        debug!(cursor = self.cursor, top = self.top, "undo");
        true
    }

    /// Step the cursor forward one entry.
    ///
    /// Returns `false` (nothing to redo) when already at the newest
    /// reachable entry.
    pub fn redo(&mut self) -> bool {
        if self.cursor == self.top {
            return false;
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, top = self.top, "redo");
        true
    }

    /// The current entry. The timeline is never empty, so this always
    /// succeeds.
    #[must_use]
    pub fn current(&self) -> &MatchSnapshot {
        &self.entries[self.cursor]
    }

    /// Clone the current entry as a working copy for the next command.
    #[must_use]
    pub fn working_copy(&self) -> MatchSnapshot {
        self.current().clone()
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.top
    }

    /// Number of committed, reachable entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.top + 1
    }

    /// A timeline is never empty after construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Maximum number of snapshots retained.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of the current entry.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
